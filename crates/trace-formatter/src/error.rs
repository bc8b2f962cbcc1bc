use thiserror::Error;

/// Result type for formatter setup
pub type Result<T> = std::result::Result<T, FormatterError>;

/// Errors raised while building a formatter.
///
/// Formatting itself never fails; only configuration can.
#[derive(Error, Debug)]
pub enum FormatterError {
    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file is not valid TOML for [`crate::FormatterConfig`]
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatterError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
