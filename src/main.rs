use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use error::SumError;

mod error;
mod logging;
mod summation;

const INPUT_PATH: &str = "day01/input.txt";

/// Sums the file at `path` and writes the total to `out`. Nothing is written unless the whole
/// file was summed.
fn run<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<(), SumError> {
    let sum = summation::load_and_sum(path)?;
    writeln!(out, "{sum}").map_err(SumError::Output)?;
    out.flush().map_err(SumError::Output)
}

fn main() -> ExitCode {
    let logger_ready = match logging::init(log::LevelFilter::Warn) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to set logger: {e}");
            false
        }
    };

    match run(INPUT_PATH, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if logger_ready {
                log::error!("Error: {e}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
