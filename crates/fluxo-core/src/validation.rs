//! # Validation Module
//!
//! Input guards shared by the components and the dashboard boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation form                                            │
//! │  └── Everything arrives as text                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Dashboard command (Rust)                                     │
//! │  ├── Blank required field → absent                                     │
//! │  └── Malformed number     → 0                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Component operation (THIS MODULE)                            │
//! │  ├── Completeness gates (no-op when incomplete)                        │
//! │  └── Sale quantity and account count checks                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_ACCOUNTS, MIN_ACCOUNTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a required text field is present, returning it trimmed.
///
/// ## Example
/// ```rust
/// use fluxo_core::validation::require_text;
///
/// assert_eq!(require_text("description", "  Rent  ").unwrap(), "Rent");
/// assert!(require_text("description", "   ").is_err());
/// ```
pub fn require_text(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Returns the trimmed value, or `default` when it is blank.
///
/// ## Example
/// ```rust
/// use fluxo_core::validation::or_default;
///
/// assert_eq!(or_default(Some(""), "Other"), "Other");
/// assert_eq!(or_default(None, "Other"), "Other");
/// assert_eq!(or_default(Some("Rent"), "Other"), "Rent");
/// ```
pub fn or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a whole number typed by the operator.
///
/// Returns `None` for blank or malformed input, including decimals.
///
/// ## Example
/// ```rust
/// use fluxo_core::validation::parse_whole;
///
/// assert_eq!(parse_whole(" 18 "), Some(18));
/// assert_eq!(parse_whole("2.5"), None);
/// assert_eq!(parse_whole(""), None);
/// ```
pub fn parse_whole(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// The upper bound is the product's stock, checked by the sales engine.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the configured number of bank accounts.
///
/// ## Rules
/// - Must be between MIN_ACCOUNTS (2) and MAX_ACCOUNTS (10)
pub fn validate_account_count(count: u32) -> ValidationResult<()> {
    if !(MIN_ACCOUNTS..=MAX_ACCOUNTS).contains(&count) {
        return Err(ValidationError::OutOfRange {
            field: "account count".to_string(),
            min: MIN_ACCOUNTS as i64,
            max: MAX_ACCOUNTS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
