// ==========================================
// Scan-to-BIM CPQ - Engine Error Types
// ==========================================
// Tooling: thiserror derive macro
// Rule: user-input problems degrade to $0 lines and never reach this
// type; only configuration/programmer errors surface here
// ==========================================

use crate::config::RateTableError;
use thiserror::Error;

/// Pricing engine error type.
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== Configuration errors =====
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error(transparent)]
    RateTable(#[from] RateTableError),

    // ===== General =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
