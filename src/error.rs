#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Metric not implemented: {0}")]
    NotImplemented(String),

    #[error("Invalid interval data: {0}")]
    InvalidData(String),
}

impl Error {
    pub(crate) fn not_implemented<S: Into<String>>(msg: S) -> Self {
        Error::NotImplemented(msg.into())
    }

    pub(crate) fn invalid_data<S: Into<String>>(msg: S) -> Self {
        Error::InvalidData(msg.into())
    }
}

/// Result type for reliability-metrics operations
pub type Result<T> = std::result::Result<T, Error>;
