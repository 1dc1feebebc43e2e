use thiserror::Error;

/// Unified error type for semver-compat operations
#[derive(Error, Debug)]
pub enum SemverCompatError {
    #[error("Invalid version string: '{0}'")]
    InvalidVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interop error: {0}")]
    Interop(String),
}

/// Convenience type alias for Results in semver-compat
pub type Result<T> = std::result::Result<T, SemverCompatError>;

impl SemverCompatError {
    /// Create an invalid version error for the rejected input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        SemverCompatError::InvalidVersion(input.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverCompatError::Config(msg.into())
    }

    /// Create an interop error with context
    pub fn interop(msg: impl Into<String>) -> Self {
        SemverCompatError::Interop(msg.into())
    }

    /// True when the error is a rejected version string
    pub fn is_invalid_version(&self) -> bool {
        matches!(self, SemverCompatError::InvalidVersion(_))
    }
}

impl From<toml::de::Error> for SemverCompatError {
    fn from(err: toml::de::Error) -> Self {
        SemverCompatError::config(err.to_string())
    }
}
