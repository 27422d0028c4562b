//! # Session
//!
//! One merchant's working state: ledger, inventory, sales, and accounts.
//!
//! A session is created explicitly and dropped when the dashboard closes.
//! Nothing is persisted.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::accounts::Accounts;
use crate::error::CoreResult;
use crate::inventory::Inventory;
use crate::ledger::Ledger;
use crate::money::Money;
use crate::reporting::Reporting;
use crate::sales::{NewSale, SalesEngine};
use crate::types::{
    Account, AccountId, Product, ProductPatch, Sale, SalePatch, Transaction, TransactionKind,
    TransactionPatch,
};
use crate::validation::ValidationResult;

/// Owns every component and routes operations between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    ledger: Ledger,
    inventory: Inventory,
    sales: SalesEngine,
    accounts: Accounts,
}

impl Session {
    /// Creates an empty session with `account_count` bank accounts.
    pub fn new(account_count: AccountId) -> ValidationResult<Self> {
        let accounts = Accounts::new(account_count)?;
        info!(account_count, "Session started");

        Ok(Session {
            accounts,
            ..Default::default()
        })
    }

    // -------------------------------------------------------------------------
    // Ledger
    // -------------------------------------------------------------------------

    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        description: &str,
        amount: Option<Money>,
        category: Option<&str>,
        account_id: Option<AccountId>,
    ) -> Option<&Transaction> {
        self.ledger
            .add_transaction(kind, description, amount, category, account_id)
    }

    pub fn edit_transaction(&mut self, id: &str, patch: TransactionPatch) -> Option<&Transaction> {
        self.ledger.edit_transaction(id, patch)
    }

    // -------------------------------------------------------------------------
    // Inventory
    // -------------------------------------------------------------------------

    pub fn add_product(
        &mut self,
        name: &str,
        quantity: Option<i64>,
        cost: Option<Money>,
        category: Option<&str>,
        supplier: Option<&str>,
        min_stock: Option<i64>,
    ) -> Option<&Product> {
        self.inventory
            .add_product(name, quantity, cost, category, supplier, min_stock)
    }

    pub fn edit_product(&mut self, id: &str, patch: ProductPatch) -> Option<&Product> {
        self.inventory.edit_product(id, patch)
    }

    // -------------------------------------------------------------------------
    // Sales
    // -------------------------------------------------------------------------

    /// Records a sale against this session's inventory, ledger, and accounts.
    pub fn record_sale(&mut self, input: NewSale) -> CoreResult<Sale> {
        self.sales.record_sale(
            &mut self.inventory,
            &mut self.ledger,
            &mut self.accounts,
            input,
        )
    }

    pub fn edit_sale(&mut self, id: &str, patch: SalePatch) -> Option<&Sale> {
        self.sales.edit_sale(id, patch, &self.inventory)
    }

    // -------------------------------------------------------------------------
    // Accounts
    // -------------------------------------------------------------------------

    pub fn set_account_count(&mut self, count: AccountId) -> ValidationResult<()> {
        self.accounts.set_count(count)
    }

    pub fn set_account_balance(&mut self, id: AccountId, balance: Money) -> Option<&Account> {
        self.accounts.set_balance(id, balance)
    }

    pub fn set_account_pending(&mut self, id: AccountId, pending: Money) -> Option<&Account> {
        self.accounts.set_pending(id, pending)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Read-only reporting view over the current state.
    pub fn report(&self) -> Reporting<'_> {
        Reporting::new(&self.ledger, &self.inventory, &self.sales, &self.accounts)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn sales(&self) -> &SalesEngine {
        &self.sales
    }

    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::Rate;

    fn stocked_session() -> (Session, String) {
        let mut session = Session::default();
        let id = session
            .add_product("Wireless Mouse", Some(20), Some(Money::from_units(10)), Some("Electronics"), None, None)
            .map(|p| p.id.clone())
            .unwrap();
        (session, id)
    }

    #[test]
    fn test_new_validates_account_count() {
        assert_eq!(Session::new(4).unwrap().accounts().len(), 4);
        assert!(Session::new(0).is_err());
        assert_eq!(Session::default().accounts().len(), 2);
    }

    #[test]
    fn test_sale_flows_through_every_component() {
        let (mut session, id) = stocked_session();

        let sale = session
            .record_sale(NewSale {
                product_id: id.clone(),
                quantity: Some(2),
                sale_price: Some(Money::from_units(100)),
                shipping: Money::from_units(5),
                fees: Money::from_units(3),
                packaging: Money::from_units(2),
                invoice_rate: Rate::from_percent(5),
                account_id: Some(2),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(sale.net_revenue, Money::from_units(85));
        assert_eq!(session.inventory().get(&id).unwrap().quantity, 18);
        assert_eq!(session.sales().len(), 1);
        assert_eq!(session.ledger().total_income(), Money::from_units(85));
        assert_eq!(session.accounts().get(2).unwrap().balance, Money::from_units(85));
        assert_eq!(
            session.report().working_capital_summary().working_capital_total,
            Money::from_units(350)
        );
    }

    #[test]
    fn test_rejected_sale_leaves_session_untouched() {
        let (mut session, id) = stocked_session();
        let before = serde_json::to_value(&session).unwrap();

        let err = session
            .record_sale(NewSale {
                product_id: id,
                quantity: Some(25),
                sale_price: Some(Money::from_units(100)),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, CoreError::InsufficientStock { .. }));
        assert_eq!(serde_json::to_value(&session).unwrap(), before);
    }

    #[test]
    fn test_edit_sale_sees_current_inventory() {
        let (mut session, id) = stocked_session();
        let sale = session
            .record_sale(NewSale {
                product_id: id.clone(),
                quantity: Some(1),
                sale_price: Some(Money::from_units(40)),
                ..Default::default()
            })
            .unwrap();
        session.edit_product(
            &id,
            ProductPatch {
                cost: Some(Money::from_units(20)),
                ..Default::default()
            },
        );

        let edited = session.edit_sale(&sale.id, SalePatch::default()).unwrap();
        // 40 - 2 (5%) = 38; profit = 38 - 20
        assert_eq!(edited.net_revenue, Money::from_units(38));
        assert_eq!(edited.profit, Money::from_units(18));
    }

    #[test]
    fn test_account_operations() {
        let mut session = Session::default();
        session.set_account_count(3).unwrap();
        session.set_account_balance(3, Money::from_units(10));
        session.set_account_pending(3, Money::from_units(5));

        assert_eq!(session.report().account_totals().combined, Money::from_units(15));
        assert!(session.set_account_count(11).is_err());
        assert!(session.set_account_balance(4, Money::from_units(1)).is_none());
    }
}
