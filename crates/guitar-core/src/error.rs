use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// The human-readable reason, without the error kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message) => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
