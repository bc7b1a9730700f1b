use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreamError>;

/// Failure taxonomy shared by every stream implementation.
///
/// Errors are reported synchronously to the immediate caller; no variant is
/// retried internally, so retry and recovery policy stay on the caller side.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Stream is closed")]
    Closed,
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("End of stream")]
    EndOfStream,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
