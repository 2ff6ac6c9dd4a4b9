//! Unified error types for maturity-engine.
//!
//! The engine computes over trusted, pre-validated inputs, so the error
//! surface is narrow: catalog integrity problems are hard failures, while
//! missing answer fields and empty aggregation scopes are defined states
//! resolved by defaulting rules, never errors.

use thiserror::Error;

/// Main error type for maturity-engine operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AssessmentError {
    /// A catalog id referenced by an aggregation entry point has no entry.
    ///
    /// Signals a catalog/answer inconsistency that should never occur under
    /// correct data loading; it propagates to the caller rather than being
    /// handled locally.
    #[error("Catalog lookup failed: no {kind} with id '{id}'")]
    CatalogLookup { kind: &'static str, id: String },

    /// Catalog construction rejected inconsistent reference data.
    #[error("Catalog validation failed: {0}")]
    Validation(String),

    /// Errors while loading catalog data from JSON.
    #[error("Failed to parse catalog: {context}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Errors during report generation.
    #[error("Report generation failed: {context}: {message}")]
    Report { context: String, message: String },
}

/// Convenient Result type for maturity-engine operations
pub type Result<T> = std::result::Result<T, AssessmentError>;

impl AssessmentError {
    /// Create a catalog lookup error for a missing entity
    pub fn lookup(kind: &'static str, id: impl Into<String>) -> Self {
        Self::CatalogLookup {
            kind,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Report {
            context: context.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for AssessmentError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON deserialization", err)
    }
}
