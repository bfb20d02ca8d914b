//! Error types for histogram binning
//!
//! Provides a unified error type for all binning-stats crates.

use thiserror::Error;

/// Core error type for binning operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Empty or non-numeric sample
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Binning configuration that cannot be honoured
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Insufficient data for the requested statistic
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty sample
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a non-empty sample"))
    }

    /// Create an error for a value that is not a finite number
    pub fn non_finite(index: usize) -> Self {
        Self::InvalidInput(format!("value at index {index} is not a finite number"))
    }

    /// Create an error for an unrecognised binning procedure
    pub fn unknown_procedure(name: &str) -> Self {
        Self::InvalidConfig(format!(
            "unknown binning procedure '{name}' \
             (expected one of freedman, square_root, doane, rice, sturges)"
        ))
    }

    /// Whether this error was caused by the caller's configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }

    /// Whether this error was caused by the caller's sample
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InsufficientData { .. })
    }
}
