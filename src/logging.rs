use log::LevelFilter;
use std::io::Write;
use std::sync::Mutex;
use std::time::Instant;

/// Installs a logger that writes records up to `level` to stderr, keeping stdout for the result.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(WriterLogger::new(std::io::stderr(), level)))?;
    log::set_max_level(level);
    Ok(())
}

struct WriterLogger<W> {
    out: Mutex<W>,
    level: LevelFilter,
    start: Instant,
}

impl<W: Write> WriterLogger<W> {
    fn new(out: W, level: LevelFilter) -> Self {
        WriterLogger {
            out: Mutex::new(out),
            level,
            start: Instant::now(),
        }
    }
}

impl<W: Write + Send> log::Log for WriterLogger<W> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            // Nothing sensible to do if the output is gone.
            if let Ok(mut out) = self.out.lock() {
                let _ = writeln!(
                    out,
                    "{:0.3}: {} - {}",
                    self.start.elapsed().as_secs_f32(),
                    record.level(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata, Record};

    #[test]
    fn test_level_filtering() {
        let logger = WriterLogger::new(Vec::new(), LevelFilter::Warn);
        let metadata = |level| Metadata::builder().level(level).build();
        assert!(logger.enabled(&metadata(Level::Error)));
        assert!(logger.enabled(&metadata(Level::Warn)));
        assert!(!logger.enabled(&metadata(Level::Debug)));
    }

    #[test]
    fn test_enabled_record_is_written() {
        let logger = WriterLogger::new(Vec::new(), LevelFilter::Warn);
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("Error: line 2: `abc` is not an integer"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("Summing 3 lines"))
                .build(),
        );
        let written = String::from_utf8(logger.out.into_inner().unwrap()).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(
            written.ends_with(" ERROR - Error: line 2: `abc` is not an integer\n"),
            "{written}"
        );
    }
}
