use thiserror::Error;

use crate::form::FormErrors;

/// Unified error type for the entire investment-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("Investment validation failed: {0}")]
    Validation(FormErrors),

    #[error("Invalid date '{0}': expected a calendar date in dd/mm/yyyy format")]
    InvalidDate(String),

    #[error("Unknown bank: {0}")]
    UnknownBank(String),

    #[error("Unknown investment type: {0}")]
    UnknownInvestmentType(String),

    #[error("Invalid investment id: {0}")]
    InvalidId(String),

    // ── Store ───────────────────────────────────────────────────────
    #[error("Investment not found: {0}")]
    InvestmentNotFound(String),

    // ── Export ──────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<uuid::Error> for CoreError {
    fn from(e: uuid::Error) -> Self {
        CoreError::InvalidId(e.to_string())
    }
}

impl From<FormErrors> for CoreError {
    fn from(errors: FormErrors) -> Self {
        CoreError::Validation(errors)
    }
}
