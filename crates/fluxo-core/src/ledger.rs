//! # Ledger
//!
//! Holds the merchant's receipts and expenses and totals them.
//!
//! ## Entry Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ledger Entries                                   │
//! │                                                                         │
//! │  Operator form ──► add_transaction() ──► Income | Expense              │
//! │                                                                         │
//! │  Sales engine  ──► post_sale_income() ──► Income, category "Sales",    │
//! │                                           amount = sale net revenue     │
//! │                                                                         │
//! │  Operator edit ──► edit_transaction()  ──► full record replace          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::money::Money;
use crate::types::{AccountId, Sale, Transaction, TransactionKind, TransactionPatch};
use crate::validation::{or_default, require_text};
use crate::{DEFAULT_CATEGORY, SALES_CATEGORY};

/// Append-only list of transactions (edits replace in place).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Records a receipt or expense dated today.
    ///
    /// ## Returns
    /// - `Some(&Transaction)` with the appended entry
    /// - `None` if the description is blank or the amount is absent;
    ///   nothing is recorded
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        description: &str,
        amount: Option<Money>,
        category: Option<&str>,
        account_id: Option<AccountId>,
    ) -> Option<&Transaction> {
        let Ok(description) = require_text("description", description) else {
            debug!("Transaction skipped: description is blank");
            return None;
        };
        let Some(amount) = amount else {
            debug!(%description, "Transaction skipped: amount is absent");
            return None;
        };

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            kind,
            description,
            amount,
            date: Utc::now().date_naive(),
            category: or_default(category, DEFAULT_CATEGORY),
            account_id,
        };

        debug!(id = %transaction.id, kind = ?kind, amount = %amount, "Transaction added");
        self.transactions.push(transaction);
        self.transactions.last()
    }

    /// Replaces the transaction matching `id` with the patched record.
    ///
    /// Returns `None` (and changes nothing) if no transaction has that id.
    pub fn edit_transaction(&mut self, id: &str, patch: TransactionPatch) -> Option<&Transaction> {
        let Some(slot) = self.transactions.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "Transaction edit skipped: not found");
            return None;
        };

        *slot = patch.apply(slot);
        Some(slot)
    }

    /// Appends the income entry that mirrors a recorded sale.
    pub(crate) fn post_sale_income(&mut self, sale: &Sale) -> Option<&Transaction> {
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            kind: TransactionKind::Income,
            description: format!("Sale: {} ({}x)", sale.product_name, sale.quantity),
            amount: sale.net_revenue,
            date: sale.date,
            category: SALES_CATEGORY.to_string(),
            account_id: Some(sale.account_id),
        };

        self.transactions.push(transaction);
        self.transactions.last()
    }

    /// Sum of all income amounts.
    pub fn total_income(&self) -> Money {
        self.total_of(TransactionKind::Income)
    }

    /// Sum of all expense amounts.
    pub fn total_expense(&self) -> Money {
        self.total_of(TransactionKind::Expense)
    }

    /// Income minus expense.
    pub fn net_balance(&self) -> Money {
        self.total_income() - self.total_expense()
    }

    fn total_of(&self, kind: TransactionKind) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// Looks up a transaction by id.
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The last `limit` transactions, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
