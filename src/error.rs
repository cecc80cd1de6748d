//! Error types for configuration, stamp formatting, and component setup.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("phrase list is empty")]
    NoPhrases,
    #[error("phrase {index} is empty")]
    EmptyPhrase { index: usize },
    #[error("{name} must be a positive number of milliseconds")]
    NonPositiveDelay { name: &'static str },
    #[error("invalid configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StampError {
    #[error("unrecognized last-modified timestamp `{raw}`: {source}")]
    Parse {
        raw: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("failed to format timestamp: {0}")]
    Format(#[from] time::error::Format),
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("host error: {0}")]
    Host(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Stamp(#[from] StampError),
}
