//! # Reporting
//!
//! Read-only aggregates over the ledger, inventory, sales, and accounts.
//!
//! ## Working Capital
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  working_capital_total = total_income                                   │
//! │                        + stock_value          (Σ quantity × cost)       │
//! │                        + account_balances     (Σ settled + pending)     │
//! │                                                                         │
//! │  Sale income is counted twice: once as ledger income and once in the    │
//! │  account it was credited to. The dashboard headline keeps that figure;  │
//! │  net_working_capital() leaves the income term out.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is cached. Each call recomputes from current state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::accounts::Accounts;
use crate::inventory::Inventory;
use crate::ledger::Ledger;
use crate::money::Money;
use crate::sales::SalesEngine;

// =============================================================================
// Report Types
// =============================================================================

/// Ledger and sales totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expense: Money,
    pub net_balance: Money,
    pub total_profit: Money,
    pub total_net_revenue: Money,
}

/// Inventory totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockSummary {
    pub total_quantity: i64,
    pub total_value: Money,
    pub low_stock_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkingCapitalSummary {
    pub total_income: Money,
    pub stock_value: Money,
    pub account_balances: Money,
    pub working_capital_total: Money,
}

/// Share of each component in the working capital total, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkingCapitalComposition {
    pub income_share: f64,
    pub stock_share: f64,
    pub accounts_share: f64,
}

impl WorkingCapitalSummary {
    /// Breaks the total down into percentage shares.
    ///
    /// All shares are zero when the total is zero or negative.
    pub fn composition(&self) -> WorkingCapitalComposition {
        let total = self.working_capital_total;
        if !total.is_positive() {
            return WorkingCapitalComposition {
                income_share: 0.0,
                stock_share: 0.0,
                accounts_share: 0.0,
            };
        }

        WorkingCapitalComposition {
            income_share: self.total_income.percent_of(total),
            stock_share: self.stock_value.percent_of(total),
            accounts_share: self.account_balances.percent_of(total),
        }
    }
}

/// Per-product sales aggregate, grouped by product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductRanking {
    pub product_name: String,
    pub quantity: i64,
    pub net_revenue: Money,
}

/// Balances summed over the active accounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AccountTotals {
    pub settled: Money,
    pub pending: Money,
    pub combined: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesOverview {
    pub sales_count: usize,
    pub units_sold: i64,
    pub average_ticket: Money,
    /// Percent, for display.
    pub average_margin: f64,
}

// =============================================================================
// Reporting View
// =============================================================================

/// Borrowed view over a session's components.
#[derive(Debug, Clone, Copy)]
pub struct Reporting<'a> {
    ledger: &'a Ledger,
    inventory: &'a Inventory,
    sales: &'a SalesEngine,
    accounts: &'a Accounts,
}

impl<'a> Reporting<'a> {
    pub fn new(
        ledger: &'a Ledger,
        inventory: &'a Inventory,
        sales: &'a SalesEngine,
        accounts: &'a Accounts,
    ) -> Self {
        Reporting {
            ledger,
            inventory,
            sales,
            accounts,
        }
    }

    pub fn financial_summary(&self) -> FinancialSummary {
        FinancialSummary {
            total_income: self.ledger.total_income(),
            total_expense: self.ledger.total_expense(),
            net_balance: self.ledger.net_balance(),
            total_profit: self.sales.total_profit(),
            total_net_revenue: self.sales.total_net_revenue(),
        }
    }

    pub fn stock_summary(&self) -> StockSummary {
        StockSummary {
            total_quantity: self.inventory.total_quantity(),
            total_value: self.inventory.total_value(),
            low_stock_count: self.inventory.low_stock_count(),
        }
    }

    /// Headline working capital (income is double counted, see module docs).
    pub fn working_capital_summary(&self) -> WorkingCapitalSummary {
        let total_income = self.ledger.total_income();
        let stock_value = self.inventory.total_value();
        let account_balances = self.account_totals().combined;

        WorkingCapitalSummary {
            total_income,
            stock_value,
            account_balances,
            working_capital_total: total_income + stock_value + account_balances,
        }
    }

    /// Stock value plus account balances, without the ledger income term.
    pub fn net_working_capital(&self) -> Money {
        self.inventory.total_value() + self.account_totals().combined
    }

    pub fn account_totals(&self) -> AccountTotals {
        let settled: Money = self.accounts.iter().map(|a| a.balance).sum();
        let pending: Money = self.accounts.iter().map(|a| a.pending_balance).sum();

        AccountTotals {
            settled,
            pending,
            combined: settled + pending,
        }
    }

    /// Best sellers by units sold.
    ///
    /// Sales are grouped by product name. Ties keep the order in which each
    /// name first appeared.
    pub fn top_products(&self, limit: usize) -> Vec<ProductRanking> {
        let mut rankings: Vec<ProductRanking> = Vec::new();

        for sale in self.sales.sales() {
            match rankings.iter_mut().find(|r| r.product_name == sale.product_name) {
                Some(entry) => {
                    entry.quantity = entry.quantity.saturating_add(sale.quantity);
                    entry.net_revenue += sale.net_revenue;
                }
                None => rankings.push(ProductRanking {
                    product_name: sale.product_name.clone(),
                    quantity: sale.quantity,
                    net_revenue: sale.net_revenue,
                }),
            }
        }

        // sort_by is stable
        rankings.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        rankings.truncate(limit);
        rankings
    }

    /// Mean net revenue per sale; zero with no sales.
    pub fn average_ticket(&self) -> Money {
        self.sales.total_net_revenue().per_item(self.sales.len())
    }

    /// Total profit as a percentage of total net revenue.
    ///
    /// Zero when there are no sales or net revenue is not positive.
    pub fn average_margin(&self) -> f64 {
        let net_revenue = self.sales.total_net_revenue();
        if self.sales.is_empty() || !net_revenue.is_positive() {
            return 0.0;
        }
        self.sales.total_profit().percent_of(net_revenue)
    }

    pub fn sales_overview(&self) -> SalesOverview {
        SalesOverview {
            sales_count: self.sales.len(),
            units_sold: self.sales.units_sold(),
            average_ticket: self.average_ticket(),
            average_margin: self.average_margin(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
