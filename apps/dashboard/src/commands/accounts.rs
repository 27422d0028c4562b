//! # Account Commands
//!
//! The bank-account panel: how many accounts, and what each one holds.

use tracing::debug;

use fluxo_core::{Account, AccountId, Money, ValidationError};

use crate::error::ApiError;
use crate::state::SessionState;

/// Active accounts in id order.
pub fn list_accounts(state: &SessionState) -> Vec<Account> {
    state.with_session(|s| s.accounts().iter().cloned().collect())
}

/// Changes the number of accounts (2-10) and returns the new list.
///
/// Balances of accounts that drop out of range are kept and come back if
/// the count is raised again.
pub fn set_account_count(state: &SessionState, count: &str) -> Result<Vec<Account>, ApiError> {
    debug!(%count, "set_account_count command");

    let count = count
        .trim()
        .parse::<AccountId>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "account count".to_string(),
            reason: "not a whole number".to_string(),
        })?;

    state.with_session_mut(|s| -> Result<Vec<Account>, ApiError> {
        s.set_account_count(count)?;
        Ok(s.accounts().iter().cloned().collect())
    })
}

/// Sets an account's settled balance. Malformed input is stored as 0.
pub fn set_account_balance(
    state: &SessionState,
    id: AccountId,
    balance: &str,
) -> Result<Account, ApiError> {
    debug!(id, %balance, "set_account_balance command");

    let balance = Money::parse_or_zero(balance);
    state
        .with_session_mut(|s| s.set_account_balance(id, balance).cloned())
        .ok_or_else(|| ApiError::account_not_found(id))
}

/// Sets an account's pending balance. Malformed input is stored as 0.
pub fn set_account_pending(
    state: &SessionState,
    id: AccountId,
    pending: &str,
) -> Result<Account, ApiError> {
    debug!(id, %pending, "set_account_pending command");

    let pending = Money::parse_or_zero(pending);
    state
        .with_session_mut(|s| s.set_account_pending(id, pending).cloned())
        .ok_or_else(|| ApiError::account_not_found(id))
}
