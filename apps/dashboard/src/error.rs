//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Fluxo                                  │
//! │                                                                         │
//! │  Dashboard form              Rust Backend                               │
//! │  ──────────────              ────────────                               │
//! │                                                                         │
//! │  record_sale(form)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Stock too low? ─── CoreError::InsufficientStock ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Field blank?   ─── CoreError::MissingField ───── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "INSUFFICIENT_STOCK",                                        │
//! │    "message": "Insufficient stock for Mouse: available 3, ..." }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Incomplete ledger and inventory forms never reach this type: those adds
//! are silent no-ops and return `None`.

use serde::Serialize;

use fluxo_core::{AccountId, CoreError, ValidationError};

/// Error returned from dashboard commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Account not found: 7"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product, account, or sale does not exist
    NotFound,

    /// Required field blank or value out of range
    ValidationError,

    /// Sale quantity exceeds stock; shown to the operator as an alert
    InsufficientStock,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn account_not_found(id: AccountId) -> Self {
        ApiError::not_found("Account", &id.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingField(_) => ApiError::validation(err.to_string()),
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::AccountNotFound(id) => ApiError::account_not_found(id),
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_has_its_own_code() {
        let err = ApiError::from(CoreError::InsufficientStock {
            product: "Mouse".to_string(),
            available: 3,
            requested: 5,
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "Insufficient stock for Mouse: available 3, requested 5");
    }

    #[test]
    fn test_error_codes_serialize_screaming_snake() {
        let json = serde_json::to_value(ApiError::account_not_found(7)).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Account not found: 7");

        let json = serde_json::to_value(ApiError::from(CoreError::MissingField("quantity"))).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "quantity is required");
    }
}
