//! # Error Types
//!
//! Domain-specific error types for fluxo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fluxo-core errors (this file)                                         │
//! │  ├── CoreError        - Sale rejections                                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Dashboard errors (in app)                                             │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is Not An Error
//! Adding a transaction or product with a blank required field creates
//! nothing and reports nothing: those operations return `None`. Only a sale
//! is rejected loudly, because the operator must learn that stock ran out.

use thiserror::Error;

use crate::types::AccountId;

// =============================================================================
// Core Error
// =============================================================================

/// Reasons a sale is refused.
///
/// Every variant is raised before the first mutation, so a rejected sale
/// leaves inventory, sales, ledger, and accounts untouched.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A required sale field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Product id does not match any product in inventory.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Insufficient stock to complete sale.
    ///
    /// ## User Workflow
    /// ```text
    /// Record sale (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { product: "Wireless Mouse", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 Wireless Mouse in stock"
    /// ```
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Target account is outside the configured 1..N range.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a quantity that is not a whole number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product: "Wireless Mouse".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Wireless Mouse: available 3, requested 5"
        );

        assert_eq!(
            CoreError::MissingField("sale price").to_string(),
            "sale price is required"
        );
        assert_eq!(CoreError::AccountNotFound(7).to_string(), "Account not found: 7");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "account count".to_string(),
            min: 2,
            max: 10,
        };
        assert_eq!(err.to_string(), "account count must be between 2 and 10");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
