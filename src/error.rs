//! Error types for Till
//!
//! All modules use `TillResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Till operations
pub type TillResult<T> = Result<T, TillError>;

/// All errors that can occur in Till
#[derive(Error, Debug)]
pub enum TillError {
    // Validation errors
    #[error("Item name must not be empty")]
    EmptyItemName,

    #[error("Price must be a non-negative whole number, got '{0}'")]
    InvalidPrice(String),

    #[error("Quantity must be a positive whole number, got '{0}'")]
    InvalidQuantity(String),

    #[error("Cash amount must be a whole number, got '{0}'")]
    InvalidCash(String),

    // Authentication and authorization errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Admin access required")]
    AccessDenied,

    // Cart and checkout errors
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Insufficient payment: {tendered} tendered against {total} due")]
    InsufficientPayment { total: u64, tendered: i64 },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create directory {path}: {source}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // Shell errors
    #[error("Interactive terminal required: {0}")]
    NotInteractive(&'static str),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    // General errors
    #[error("{0}")]
    User(String),
}

impl TillError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Check if error is an operator input problem rather than a fault
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyItemName
                | Self::InvalidPrice(_)
                | Self::InvalidQuantity(_)
                | Self::InvalidCash(_)
                | Self::EmptyCart
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::AccessDenied => Some("Log in with the admin credentials first"),
            Self::EmptyCart => Some("Scan an item first"),
            Self::NotInteractive(_) => Some("Run till from an interactive terminal"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TillError::InsufficientPayment {
            total: 45000,
            tendered: 40000,
        };
        assert!(err.to_string().contains("40000 tendered"));
        assert!(err.to_string().contains("45000 due"));
    }

    #[test]
    fn error_hint() {
        let err = TillError::AccessDenied;
        assert_eq!(err.hint(), Some("Log in with the admin credentials first"));
        // A failed login stays generic, no hint
        assert_eq!(TillError::InvalidCredentials.hint(), None);
    }

    #[test]
    fn error_validation_split() {
        assert!(TillError::InvalidQuantity("0".into()).is_validation());
        assert!(TillError::EmptyCart.is_validation());
        assert!(!TillError::AccessDenied.is_validation());
        assert!(!TillError::InvalidCredentials.is_validation());
    }
}
