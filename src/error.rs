use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning an input file.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is missing, unreadable or permission-denied.
    #[error("Input unavailable: {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
