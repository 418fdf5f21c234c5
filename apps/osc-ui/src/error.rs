//! Error types for the desktop front end.

use osc_core::OscError;

/// Rejected command-line configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {what}: {source}")]
    Invalid {
        what: &'static str,
        source: OscError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Window error: {0}")]
    Window(#[from] eframe::Error),
}

pub type UiResult<T> = Result<T, UiError>;
