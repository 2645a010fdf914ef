//! Error types for the CargoBox core library.
//!
//! The basic box operations never fail; these errors only come from the
//! capacity-checked insert, configuration loading and JSON interchange.

use thiserror::Error;

/// Top-level error type for all fallible CargoBox operations.
#[derive(Error, Debug)]
pub enum CargoError {
    /// The box already holds the configured maximum number of items.
    #[error("Item capacity exceeded (limit: {limit}, current: {current})")]
    CapacityExceeded {
        /// Maximum allowed.
        limit: usize,
        /// Current count.
        current: usize,
    },

    /// Adding the item would push the total weight over the configured limit.
    #[error("Weight limit exceeded: {attempted}g would exceed {limit}g")]
    WeightLimitExceeded {
        /// Maximum total weight in grammes.
        limit: i64,
        /// Total weight the box would have had after the insert.
        attempted: i64,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, CargoError>;
