//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`serde_json::Error`].
    #[error("Could not parse Jira payload: {source}")]
    PayloadError { source: serde_json::Error },

    /// Wraps [`regex::Error`].
    #[error("Error while compiling regex: {source}")]
    RegexError { source: regex::Error },

    #[error("Missing field in payload: {field}")]
    MissingField { field: String },

    #[error("Unknown template placeholder: {{{{{entity}.{field}}}}}")]
    UnknownPlaceholder { entity: String, field: String },

    #[error("No value for template placeholder: {{{{{entity}.{field}}}}}")]
    MissingPlaceholderValue { entity: String, field: String },
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        Self::PayloadError { source: e }
    }
}

impl From<regex::Error> for DomainError {
    fn from(e: regex::Error) -> Self {
        Self::RegexError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
