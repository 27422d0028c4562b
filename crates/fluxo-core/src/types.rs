//! # Domain Types
//!
//! Core domain records shared by every component.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Transaction   │   │    Product      │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  kind           │   │  name           │   │  product_id     │       │
//! │  │  amount         │   │  quantity       │   │  net_revenue    │       │
//! │  │  account_id?    │   │  cost           │   │  profit         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Account      │   │      Rate       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id (1..N)      │   │  bps (u32)      │                             │
//! │  │  balance        │   │  500 = 5%       │                             │
//! │  │  pending        │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Edits
//! Records are replaced through typed patches: every `Some` field in a patch
//! overwrites the record's field, `None` keeps it. Derived sale fields are
//! never patched directly; the sales engine recomputes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{parse_hundredths, Money};

/// Dense account identifier (1..=N).
pub type AccountId = u32;

// =============================================================================
// Rate
// =============================================================================

/// Percentage rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 500 bps = 5% (the default invoice rate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from whole percent.
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        Rate(percent.saturating_mul(100))
    }

    /// Parses a percentage typed by the operator ("5", "2.5", "7,25").
    ///
    /// Returns `None` for blank, malformed, or negative input.
    ///
    /// ## Example
    /// ```rust
    /// use fluxo_core::types::Rate;
    ///
    /// assert_eq!(Rate::parse("5"), Some(Rate::from_bps(500)));
    /// assert_eq!(Rate::parse("2,5"), Some(Rate::from_bps(250)));
    /// assert_eq!(Rate::parse("-1"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let hundredths = parse_hundredths(input)?;
        u32::try_from(hundredths).ok().map(Rate)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }
}

impl Default for Rate {
    fn default() -> Self {
        crate::DEFAULT_INVOICE_RATE
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// Whether a transaction brings money in or takes it out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Receipts, including the entry every sale posts.
    #[default]
    Income,
    /// Money spent.
    Expense,
}

/// A receipt or expense in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub kind: TransactionKind,
    pub description: String,
    /// Amount as entered; the kind carries the sign.
    pub amount: Money,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub category: String,
    /// Owning bank account, if any.
    pub account_id: Option<AccountId>,
}

impl Transaction {
    /// Returns true for income entries.
    #[inline]
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Field-level edit of a [`Transaction`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub account_id: Option<AccountId>,
}

impl TransactionPatch {
    /// Produces the edited record. The id never changes.
    pub fn apply(self, current: &Transaction) -> Transaction {
        Transaction {
            id: current.id.clone(),
            kind: self.kind.unwrap_or(current.kind),
            description: self.description.unwrap_or_else(|| current.description.clone()),
            amount: self.amount.unwrap_or(current.amount),
            date: self.date.unwrap_or(current.date),
            category: self.category.unwrap_or_else(|| current.category.clone()),
            account_id: self.account_id.or(current.account_id),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product held in inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name. Sale edits look products up by this name.
    pub name: String,

    /// Units on hand.
    pub quantity: i64,

    /// Unit cost, used for stock valuation and profit.
    pub cost: Money,

    pub category: String,

    pub supplier: String,

    /// Low-stock threshold (inclusive).
    pub min_stock: i64,
}

impl Product {
    /// Value of the units on hand at cost.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.cost.multiply_quantity(self.quantity)
    }

    /// Checks whether quantity is at or below the threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Checks if `quantity` units can be sold from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }
}

/// Field-level edit of a [`Product`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub cost: Option<Money>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub min_stock: Option<i64>,
}

impl ProductPatch {
    pub fn apply(self, current: &Product) -> Product {
        Product {
            id: current.id.clone(),
            name: self.name.unwrap_or_else(|| current.name.clone()),
            quantity: self.quantity.unwrap_or(current.quantity),
            cost: self.cost.unwrap_or(current.cost),
            category: self.category.unwrap_or_else(|| current.category.clone()),
            supplier: self.supplier.unwrap_or_else(|| current.supplier.clone()),
            min_stock: self.min_stock.unwrap_or(current.min_stock),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale.
///
/// Uses the snapshot pattern for the product name: it is copied at sale
/// time and is what later edits use to find the product again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    pub id: String,
    pub product_id: String,
    /// Product name at time of sale.
    pub product_name: String,
    pub quantity: i64,
    pub sale_price: Money,
    pub shipping: Money,
    pub fees: Money,
    pub gifts: Money,
    pub packaging: Money,
    /// Invoice label or number.
    pub invoice: String,
    /// Rate the invoice cost was computed with when the sale was recorded.
    pub invoice_rate: Rate,
    pub invoice_cost: Money,
    pub net_revenue: Money,
    pub profit: Money,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub notes: String,
    pub account_id: AccountId,
}

/// Field-level edit of a [`Sale`].
///
/// There are no fields for the derived figures; see
/// [`SalesEngine::edit_sale`](crate::sales::SalesEngine::edit_sale).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalePatch {
    pub product_name: Option<String>,
    pub quantity: Option<i64>,
    pub sale_price: Option<Money>,
    pub shipping: Option<Money>,
    pub fees: Option<Money>,
    pub gifts: Option<Money>,
    pub packaging: Option<Money>,
    pub invoice: Option<String>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub account_id: Option<AccountId>,
}

impl SalePatch {
    /// Applies the patched fields. Derived figures are copied unchanged.
    pub fn apply(self, current: &Sale) -> Sale {
        Sale {
            id: current.id.clone(),
            product_id: current.product_id.clone(),
            product_name: self.product_name.unwrap_or_else(|| current.product_name.clone()),
            quantity: self.quantity.unwrap_or(current.quantity),
            sale_price: self.sale_price.unwrap_or(current.sale_price),
            shipping: self.shipping.unwrap_or(current.shipping),
            fees: self.fees.unwrap_or(current.fees),
            gifts: self.gifts.unwrap_or(current.gifts),
            packaging: self.packaging.unwrap_or(current.packaging),
            invoice: self.invoice.unwrap_or_else(|| current.invoice.clone()),
            invoice_rate: current.invoice_rate,
            invoice_cost: current.invoice_cost,
            net_revenue: current.net_revenue,
            profit: current.profit,
            date: self.date.unwrap_or(current.date),
            notes: self.notes.unwrap_or_else(|| current.notes.clone()),
            account_id: self.account_id.unwrap_or(current.account_id),
        }
    }
}

// =============================================================================
// Account
// =============================================================================

/// A bank account the merchant manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Account {
    pub id: AccountId,
    /// "Account 01", "Account 02", ...
    pub name: String,
    /// Settled balance.
    pub balance: Money,
    /// Not-yet-released balance.
    pub pending_balance: Money,
}

impl Account {
    /// Creates an empty account with its conventional display name.
    pub fn new(id: AccountId) -> Self {
        Account {
            id,
            name: format!("Account {:02}", id),
            balance: Money::zero(),
            pending_balance: Money::zero(),
        }
    }

    /// Settled plus pending.
    #[inline]
    pub fn total(&self) -> Money {
        self.balance + self.pending_balance
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
