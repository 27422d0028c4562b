//! # Ledger Commands
//!
//! Receipts and expenses entered on the finance tab.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fluxo_core::{Transaction, TransactionKind, TransactionPatch, RECENT_LIMIT};

use super::{account_id, non_blank, required_money};
use crate::state::SessionState;

/// New-transaction form, as typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionForm {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub account_id: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        TransactionForm {
            kind: TransactionKind::Income,
            description: String::new(),
            amount: String::new(),
            category: String::new(),
            account_id: "1".to_string(),
        }
    }
}

/// Edit dialog fields; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionEditForm {
    pub kind: Option<TransactionKind>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub account_id: Option<String>,
}

impl From<TransactionEditForm> for TransactionPatch {
    fn from(form: TransactionEditForm) -> Self {
        TransactionPatch {
            kind: form.kind,
            description: form.description,
            amount: form.amount.as_deref().map(fluxo_core::Money::parse_or_zero),
            date: None,
            category: form.category,
            account_id: form.account_id.as_deref().and_then(account_id),
        }
    }
}

/// Adds a transaction.
///
/// ## Returns
/// The new transaction, or `None` when description or amount was left
/// blank (the form is simply not submitted).
pub fn add_transaction(state: &SessionState, form: TransactionForm) -> Option<Transaction> {
    debug!(kind = ?form.kind, "add_transaction command");

    let amount = required_money(&form.amount);
    let account = account_id(&form.account_id);

    state.with_session_mut(|s| {
        s.add_transaction(
            form.kind,
            &form.description,
            amount,
            non_blank(&form.category),
            account,
        )
        .cloned()
    })
}

/// Replaces a transaction with its edited version.
pub fn edit_transaction(
    state: &SessionState,
    id: &str,
    form: TransactionEditForm,
) -> Option<Transaction> {
    debug!(%id, "edit_transaction command");
    state.with_session_mut(|s| s.edit_transaction(id, form.into()).cloned())
}

/// The ten latest transactions, newest first.
pub fn list_recent_transactions(state: &SessionState) -> Vec<Transaction> {
    state.with_session(|s| s.ledger().recent(RECENT_LIMIT).cloned().collect())
}

/// Every transaction in insertion order.
pub fn list_transactions(state: &SessionState) -> Vec<Transaction> {
    state.with_session(|s| s.ledger().transactions().to_vec())
}
