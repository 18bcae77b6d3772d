use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while converting a JSON file.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The derived output path exists and overriding was not requested.
    #[error("Output file ({}) already exists", .0.display())]
    FileExists(PathBuf),
    /// The derived output path is the input file itself.
    #[error("Output file ({}) would replace the input", .0.display())]
    SameFile(PathBuf),
    /// Reading the input or writing the output failed. The path is left out of
    /// the message; callers print it next to the error.
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
