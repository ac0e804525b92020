//! Error types for pricing, loading and quoting

use thiserror::Error;

/// Result type alias using PricingError
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors raised by the pricing core. All are deterministic functions of the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Malformed per-request input (principal, term list, score in strict mode)
    #[error("Invalid argument '{param}': {message}")]
    InvalidArgument { param: &'static str, message: String },

    /// Malformed tier policy or calculator configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PricingError {
    pub(crate) fn invalid(param: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument { param, message: message.into() }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Errors raised while loading tier tables and calculator configuration
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Errors raised by the quote service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("No credit score available for applicant ending {ssn_last4}")]
    ScoreUnavailable { ssn_last4: String },

    #[error("Unknown applicant id: {0}")]
    UnknownApplicant(u32),
}
