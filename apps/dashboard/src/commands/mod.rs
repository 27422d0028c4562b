//! # Dashboard Commands
//!
//! Everything the dashboard screens call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports, form parsing)
//! ├── ledger.rs     ◄─── Receipts and expenses
//! ├── inventory.rs  ◄─── Products and stock alerts
//! ├── sales.rs      ◄─── Sale recording and edits
//! ├── accounts.rs   ◄─── Bank accounts
//! ├── reports.rs    ◄─── Dashboard metrics
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form (all fields are text)                                             │
//! │  { "productId": "…", "quantity": "2", "salePrice": "100", … }           │
//! │         │                                                               │
//! │         │ serde (camelCase)                                             │
//! │         ▼                                                               │
//! │  SaleForm ──► parse ──► NewSale ──► Session::record_sale                │
//! │                 │                                                       │
//! │                 ├── required field blank   → absent                     │
//! │                 └── number malformed       → 0                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<Sale, ApiError> (JSON)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs: `&SessionState`,
//! `&DashboardConfig`, or both.

pub mod accounts;
pub mod config;
pub mod inventory;
pub mod ledger;
pub mod reports;
pub mod sales;

use fluxo_core::validation::parse_whole;
use fluxo_core::{AccountId, Money};

// =============================================================================
// Form Parsing
// =============================================================================

/// Required amount: blank is absent, anything else parses or becomes 0.
pub(crate) fn required_money(input: &str) -> Option<Money> {
    if input.trim().is_empty() {
        return None;
    }
    Some(Money::parse_or_zero(input))
}

/// Required whole number: blank is absent, anything else parses or becomes 0.
pub(crate) fn required_whole(input: &str) -> Option<i64> {
    if input.trim().is_empty() {
        return None;
    }
    Some(parse_whole(input).unwrap_or(0))
}

/// Account selector value; blank or malformed is absent.
pub(crate) fn account_id(input: &str) -> Option<AccountId> {
    input.trim().parse::<AccountId>().ok()
}

/// Blank text is treated as not given.
pub(crate) fn non_blank(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_money() {
        assert_eq!(required_money("12.50"), Some(Money::from_cents(1250)));
        assert_eq!(required_money("abc"), Some(Money::zero()));
        assert_eq!(required_money("  "), None);
    }

    #[test]
    fn test_required_whole() {
        assert_eq!(required_whole("20"), Some(20));
        assert_eq!(required_whole("x"), Some(0));
        assert_eq!(required_whole(""), None);
    }

    #[test]
    fn test_account_id() {
        assert_eq!(account_id("2"), Some(2));
        assert_eq!(account_id(""), None);
        assert_eq!(account_id("-1"), None);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(" Rent "), Some("Rent"));
        assert_eq!(non_blank(" "), None);
    }
}
