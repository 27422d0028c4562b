//! # fluxo-core: Cash-Flow and Stock Logic for Fluxo
//!
//! This crate holds everything the Fluxo dashboard knows about a small
//! merchant's money: receipts and expenses, inventory, sales, and bank
//! accounts. It performs no I/O; state lives in memory for one session.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fluxo Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard UI (forms, tables)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ string-form DTOs                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/dashboard commands                      │   │
//! │  │    add_transaction, add_product, record_sale, reports, etc.     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fluxo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌───────────┐  ┌──────────┐  ┌────────────┐    │   │
//! │  │   │  ledger  │  │ inventory │  │  sales   │  │  accounts  │    │   │
//! │  │   └────┬─────┘  └─────┬─────┘  └────┬─────┘  └─────┬──────┘    │   │
//! │  │        └──────────────┴──────┬──────┴──────────────┘           │   │
//! │  │                        ┌─────▼─────┐                            │   │
//! │  │                        │ reporting │  (read-only)               │   │
//! │  │                        └───────────┘                            │   │
//! │  │   session owns all four; money/types/validation underneath      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money in integer cents
//! - [`types`] - Domain records and their edit patches
//! - [`error`] - Domain error types
//! - [`validation`] - Input guards
//! - [`ledger`] - Income and expense entries
//! - [`inventory`] - Products and stock levels
//! - [`sales`] - Sale recording and its side effects
//! - [`accounts`] - The merchant's bank accounts
//! - [`reporting`] - Derived dashboard metrics
//! - [`session`] - The per-session state container
//!
//! ## Example Usage
//!
//! ```rust
//! use fluxo_core::{Money, NewSale, Rate, Session};
//!
//! let mut session = Session::default();
//! let product_id = session
//!     .add_product("Wireless Mouse", Some(20), Some(Money::from_units(10)), None, None, None)
//!     .map(|p| p.id.clone())
//!     .unwrap();
//!
//! let sale = session
//!     .record_sale(NewSale {
//!         product_id,
//!         quantity: Some(2),
//!         sale_price: Some(Money::from_units(100)),
//!         shipping: Money::from_units(5),
//!         fees: Money::from_units(3),
//!         packaging: Money::from_units(2),
//!         invoice_rate: Rate::from_percent(5),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! assert_eq!(sale.net_revenue, Money::from_units(85));
//! assert_eq!(sale.profit, Money::from_units(65));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accounts;
pub mod error;
pub mod inventory;
pub mod ledger;
pub mod money;
pub mod reporting;
pub mod sales;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use accounts::Accounts;
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use ledger::Ledger;
pub use money::Money;
pub use reporting::{
    AccountTotals, FinancialSummary, ProductRanking, Reporting, SalesOverview, StockSummary,
    WorkingCapitalComposition, WorkingCapitalSummary,
};
pub use sales::{NewSale, SalesEngine};
pub use session::Session;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category given to transactions and products entered without one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Supplier recorded when the operator leaves it blank.
pub const DEFAULT_SUPPLIER: &str = "Not informed";

/// Invoice label recorded when the operator leaves it blank.
pub const DEFAULT_INVOICE_LABEL: &str = "Not informed";

/// Category of the income entry every sale posts to the ledger.
pub const SALES_CATEGORY: &str = "Sales";

/// Low-stock threshold when none is given.
pub const DEFAULT_MIN_STOCK: i64 = 5;

/// Invoice rate pre-filled on the sale form (5%).
pub const DEFAULT_INVOICE_RATE: Rate = Rate::from_bps(500);

/// Rate used when a sale is edited, regardless of the rate it was
/// recorded with.
pub const EDIT_INVOICE_RATE: Rate = Rate::from_bps(500);

/// Bounds on the number of bank accounts.
pub const MIN_ACCOUNTS: AccountId = 2;
pub const MAX_ACCOUNTS: AccountId = 10;

/// Rows shown in the recent transactions and recent sales tables.
pub const RECENT_LIMIT: usize = 10;

/// Rows shown in the best-sellers table.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Pick-list for the transaction form.
pub const TRANSACTION_CATEGORIES: &[&str] = &[
    "Marketing",
    "Suppliers",
    "Sales",
    "Fees",
    "Shipping",
    "Packaging",
    "Taxes",
    "Salaries",
    "Rent",
    "Energy",
    "Internet",
    "Other",
];

/// Pick-list for the product form.
pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Books",
    "Beauty",
    "Toys",
    "Automotive",
    "Other",
];
