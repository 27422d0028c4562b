//! # Sales Engine
//!
//! Records sales, derives their revenue figures, and fans the effects out
//! to inventory, ledger, and accounts.
//!
//! ## Recording a Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        record_sale()                                    │
//! │                                                                         │
//! │  1. VALIDATE (nothing mutated yet)                                      │
//! │     ├── product, quantity, price, account present?  → MissingField      │
//! │     ├── product exists?                             → ProductNotFound   │
//! │     ├── quantity <= stock?                          → InsufficientStock │
//! │     └── account active?                             → AccountNotFound   │
//! │                                                                         │
//! │  2. DERIVE                                                              │
//! │     invoice_cost = sale_price × rate                                    │
//! │     net_revenue  = sale_price - shipping - fees - gifts                 │
//! │                    - packaging - invoice_cost                           │
//! │     profit       = net_revenue - unit_cost × quantity                   │
//! │                                                                         │
//! │  3. APPLY (in this order)                                               │
//! │     Inventory.decrement_stock ──► sales.push ──►                        │
//! │     Ledger.post_sale_income ──► Accounts.credit(net_revenue)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is clamped: heavy costs make net revenue and profit negative.
//!
//! ## Editing a Sale
//! An edit rewrites the sale's own record only. The invoice cost is
//! recomputed at a flat 5% whatever rate the sale was recorded with, and
//! profit uses the product found by the sale's product *name*. Stock,
//! ledger, and account balances are not adjusted for the difference.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::accounts::Accounts;
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::ledger::Ledger;
use crate::money::Money;
use crate::types::{AccountId, Rate, Sale, SalePatch};
use crate::validation::{or_default, validate_quantity};
use crate::{DEFAULT_INVOICE_LABEL, EDIT_INVOICE_RATE};

/// Input for [`SalesEngine::record_sale`].
///
/// Required fields are `Option`s (or a possibly blank product id); the
/// cost deductions are plain amounts that default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    pub product_id: String,
    pub quantity: Option<i64>,
    pub sale_price: Option<Money>,
    pub shipping: Money,
    pub fees: Money,
    pub gifts: Money,
    pub packaging: Money,
    pub invoice_rate: Rate,
    pub invoice: String,
    pub notes: String,
    pub account_id: Option<AccountId>,
}

impl Default for NewSale {
    fn default() -> Self {
        NewSale {
            product_id: String::new(),
            quantity: None,
            sale_price: None,
            shipping: Money::zero(),
            fees: Money::zero(),
            gifts: Money::zero(),
            packaging: Money::zero(),
            invoice_rate: Rate::default(),
            invoice: String::new(),
            notes: String::new(),
            account_id: Some(1),
        }
    }
}

/// Recorded sales, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesEngine {
    sales: Vec<Sale>,
}

impl SalesEngine {
    /// Creates an empty sales book.
    pub fn new() -> Self {
        SalesEngine::default()
    }

    /// Records a sale and applies its side effects.
    ///
    /// ## Errors
    /// Every check runs before the first mutation, so on `Err` the
    /// inventory, sales, ledger, and accounts are exactly as they were.
    pub fn record_sale(
        &mut self,
        inventory: &mut Inventory,
        ledger: &mut Ledger,
        accounts: &mut Accounts,
        input: NewSale,
    ) -> CoreResult<Sale> {
        let product_id = input.product_id.trim();
        if product_id.is_empty() {
            return Err(CoreError::MissingField("product"));
        }
        let quantity = input.quantity.ok_or(CoreError::MissingField("quantity"))?;
        let sale_price = input.sale_price.ok_or(CoreError::MissingField("sale price"))?;
        let account_id = input.account_id.ok_or(CoreError::MissingField("account"))?;
        validate_quantity(quantity)?;

        let product = inventory
            .get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        if !product.can_sell(quantity) {
            debug!(product = %product.name, available = product.quantity, requested = quantity, "Sale rejected");
            return Err(CoreError::InsufficientStock {
                product: product.name.clone(),
                available: product.quantity,
                requested: quantity,
            });
        }

        if !accounts.contains(account_id) {
            return Err(CoreError::AccountNotFound(account_id));
        }

        let mut sale = Sale {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            sale_price,
            shipping: input.shipping,
            fees: input.fees,
            gifts: input.gifts,
            packaging: input.packaging,
            invoice: or_default(Some(input.invoice.as_str()), DEFAULT_INVOICE_LABEL),
            invoice_rate: input.invoice_rate,
            invoice_cost: Money::zero(),
            net_revenue: Money::zero(),
            profit: Money::zero(),
            date: Utc::now().date_naive(),
            notes: input.notes.trim().to_string(),
            account_id,
        };
        derive_figures(&mut sale, input.invoice_rate, Some(product.cost));

        // Product and account were both checked above, so every step lands.
        let decremented = inventory.decrement_stock(&sale.product_id, quantity).is_some();
        debug_assert!(decremented, "checked product vanished before decrement");
        self.sales.push(sale.clone());
        let posted = ledger.post_sale_income(&sale).is_some();
        debug_assert!(posted, "sale income entry was not appended");
        let credited = accounts.credit(account_id, sale.net_revenue).is_some();
        debug_assert!(credited, "checked account vanished before credit");

        info!(
            sale_id = %sale.id,
            product = %sale.product_name,
            quantity,
            net_revenue = %sale.net_revenue,
            profit = %sale.profit,
            account_id,
            "Sale recorded"
        );

        Ok(sale)
    }

    /// Edits a sale's own record and recomputes its figures.
    ///
    /// Uses the fixed edit rate (5%) and the unit cost of the product whose
    /// name matches the edited sale; profit is zero when no product has
    /// that name. Returns `None` if no sale has that id.
    pub fn edit_sale(&mut self, id: &str, patch: SalePatch, inventory: &Inventory) -> Option<&Sale> {
        let Some(slot) = self.sales.iter_mut().find(|s| s.id == id) else {
            debug!(%id, "Sale edit skipped: not found");
            return None;
        };

        let mut edited = patch.apply(slot);
        let unit_cost = inventory.find_by_name(&edited.product_name).map(|p| p.cost);
        derive_figures(&mut edited, EDIT_INVOICE_RATE, unit_cost);

        debug!(sale_id = %edited.id, net_revenue = %edited.net_revenue, "Sale edited");
        *slot = edited;
        Some(slot)
    }

    /// Sum of net revenue over all sales.
    pub fn total_net_revenue(&self) -> Money {
        self.sales.iter().map(|s| s.net_revenue).sum()
    }

    /// Sum of profit over all sales.
    pub fn total_profit(&self) -> Money {
        self.sales.iter().map(|s| s.profit).sum()
    }

    /// Total units sold.
    pub fn units_sold(&self) -> i64 {
        self.sales
            .iter()
            .fold(0, |total, s| total.saturating_add(s.quantity))
    }

    /// Looks up a sale by id.
    pub fn get(&self, id: &str) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == id)
    }

    /// All sales in insertion order.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// The last `limit` sales, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Sale> {
        self.sales.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

/// Fills in invoice cost, net revenue, and profit from the sale's amounts.
fn derive_figures(sale: &mut Sale, rate: Rate, unit_cost: Option<Money>) {
    sale.invoice_cost = sale.sale_price.percentage(rate);
    sale.net_revenue = sale.sale_price
        - sale.shipping
        - sale.fees
        - sale.gifts
        - sale.packaging
        - sale.invoice_cost;
    sale.profit = match unit_cost {
        Some(cost) => sale.net_revenue - cost.multiply_quantity(sale.quantity),
        None => Money::zero(),
    };
}

// =============================================================================
// Unit Tests
// =============================================================================
