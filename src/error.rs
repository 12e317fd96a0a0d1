//! Error types for agrimarket
//!
//! Absence is never an error here: lookups return `Ok(None)` or an empty
//! list. Errors cover rejected input and backend failures.

use thiserror::Error;

/// Result type alias using MarketError
pub type Result<T> = std::result::Result<T, MarketError>;

/// Unified error type for marketplace storage operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid role: {0:?} (expected farmer or trader)")]
    InvalidRole(String),

    #[error("Invalid category: {0:?}")]
    InvalidCategory(String),

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Backend Errors
    // -------------------------------------------------------------------------
    /// Reserved for durable backends; the in-memory store never fails
    #[error("Storage error: {0}")]
    Storage(String),
}
