use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gemini error: {0}")]
    Gemini(String),

    #[error("Content blocked by safety filter: {reason}")]
    SafetyBlocked { reason: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn gemini(msg: impl Into<String>) -> Self {
        Self::Gemini(msg.into())
    }

    pub fn safety_blocked(reason: impl Into<String>) -> Self {
        Self::SafetyBlocked {
            reason: reason.into(),
        }
    }
}
