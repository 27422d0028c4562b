//! # Accounts
//!
//! The merchant's bank accounts: exactly N of them, ids 1..=N.
//!
//! ## Resizing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_count(5) with accounts 1, 2 holding balances                       │
//! │                                                                         │
//! │    before:  [1: 85.00] [2: 10.00]                                       │
//! │    after:   [1: 85.00] [2: 10.00] [3: 0] [4: 0] [5: 0]                 │
//! │                                                                         │
//! │  set_count(2) again                                                     │
//! │                                                                         │
//! │    active:  [1: 85.00] [2: 10.00]                                       │
//! │    kept:    3, 4, 5 (restored as they were if N grows back)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::money::Money;
use crate::types::{Account, AccountId};
use crate::validation::{validate_account_count, ValidationResult};

/// The configured set of bank accounts.
///
/// Only ids `1..=count` are active. Balances entered for ids beyond the
/// current count are kept so shrinking and regrowing loses nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accounts {
    count: AccountId,
    known: BTreeMap<AccountId, Account>,
}

impl Accounts {
    /// Creates `count` empty accounts.
    pub fn new(count: AccountId) -> ValidationResult<Self> {
        validate_account_count(count)?;

        let known = (1..=count).map(|id| (id, Account::new(id))).collect();
        Ok(Accounts { count, known })
    }

    /// Changes the number of accounts, regenerating the 1..N set.
    ///
    /// Accounts that persist keep their balances; new ids start at zero.
    pub fn set_count(&mut self, count: AccountId) -> ValidationResult<()> {
        validate_account_count(count)?;

        for id in 1..=count {
            self.known.entry(id).or_insert_with(|| Account::new(id));
        }

        info!(from = self.count, to = count, "Account count changed");
        self.count = count;
        Ok(())
    }

    /// Sets the settled balance entered by the operator.
    ///
    /// Returns `None` if the account is not active.
    pub fn set_balance(&mut self, id: AccountId, balance: Money) -> Option<&Account> {
        let account = self.get_mut(id)?;
        account.balance = balance;
        Some(account)
    }

    /// Sets the pending balance entered by the operator.
    pub fn set_pending(&mut self, id: AccountId, pending: Money) -> Option<&Account> {
        let account = self.get_mut(id)?;
        account.pending_balance = pending;
        Some(account)
    }

    /// Adds to the settled balance (sales post here).
    pub(crate) fn credit(&mut self, id: AccountId, amount: Money) -> Option<&Account> {
        let account = self.get_mut(id)?;
        account.balance += amount;
        Some(account)
    }

    /// Checks whether `id` is one of the active accounts.
    #[inline]
    pub fn contains(&self, id: AccountId) -> bool {
        (1..=self.count).contains(&id)
    }

    /// Looks up an active account.
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        if !self.contains(id) {
            return None;
        }
        self.known.get(&id)
    }

    fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        if !self.contains(id) {
            return None;
        }
        self.known.get_mut(&id)
    }

    /// Active accounts in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.known.range(1..=self.count).map(|(_, account)| account)
    }

    /// Number of active accounts.
    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for Accounts {
    /// The two accounts every session starts with.
    fn default() -> Self {
        Accounts {
            count: crate::MIN_ACCOUNTS,
            known: (1..=crate::MIN_ACCOUNTS)
                .map(|id| (id, Account::new(id)))
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
