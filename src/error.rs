use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading and summing an input file.
#[derive(Debug, Error)]
pub enum SumError {
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: `{text}` is not an integer")]
    MalformedLine { line: usize, text: String },

    #[error("failed to write result: {0}")]
    Output(#[source] io::Error),
}
