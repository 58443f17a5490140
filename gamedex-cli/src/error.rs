use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Games file could not be loaded
    #[error(transparent)]
    Load(#[from] gamedex_loader::LoadError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn logger(msg: impl Into<String>) -> Self {
        Self::Logger(msg.into())
    }
}
