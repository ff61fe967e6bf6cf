//! Error types for attribute classification
//!
//! Provides a unified error type for all geoclass crates. Symbol lookups that
//! miss are not errors: they return `None`.

use thiserror::Error;

/// Core error type for classification operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed classification request or argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Classification attempted with no (non-excluded) values
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Fewer data points than requested classes
    #[error("Insufficient data: expected at least {expected} values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A color string that could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Exclude-query parse failure
    #[error("Query error at position {position}: {message}")]
    Query { message: String, position: usize },

    /// Errors raised by external collaborators such as feature readers
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a malformed argument
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an error for an axis with no values left to classify
    pub fn empty_dataset(context: &str) -> Self {
        Self::EmptyDataset(format!("no values to classify for {context}"))
    }

    /// Create an error for a class count that is not at least one
    pub fn invalid_class_count(count: usize) -> Self {
        Self::InvalidArgument(format!("class count {count} must be at least 1"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidArgument(format!("{context} contains NaN or infinite values"))
    }

    /// Create a query error at the given byte position
    pub fn query(message: impl Into<String>, position: usize) -> Self {
        Self::Query {
            message: message.into(),
            position,
        }
    }

    /// Check that there are at least `expected` values
    pub fn check_sufficient(expected: usize, actual: usize) -> Result<()> {
        if actual < expected {
            return Err(Self::InsufficientData { expected, actual });
        }
        Ok(())
    }
}
