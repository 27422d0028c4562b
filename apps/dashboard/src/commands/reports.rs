//! # Report Commands
//!
//! Everything the overview tab renders, computed in one pass under the
//! session lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OVERVIEW                                                               │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ Income       │ │ Expense      │ │ Net balance  │ │ Working cap. │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │  Composition: income % │ stock % │ accounts %                           │
//! │  Best sellers (5)      │ Low stock alerts                               │
//! │  Recent transactions (10) │ Recent sales (10)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use fluxo_core::{
    AccountTotals, FinancialSummary, Money, Product, ProductRanking, Sale, SalesOverview,
    StockSummary, Transaction, WorkingCapitalComposition, WorkingCapitalSummary, RECENT_LIMIT,
    TOP_PRODUCTS_LIMIT,
};

use crate::state::{DashboardConfig, SessionState};

/// The full overview payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub financial: FinancialSummary,
    pub stock: StockSummary,
    pub working_capital: WorkingCapitalSummary,
    pub composition: WorkingCapitalComposition,
    pub net_working_capital: Money,
    pub accounts: AccountTotals,
    pub sales: SalesOverview,
    pub top_products: Vec<ProductRanking>,
    pub low_stock: Vec<Product>,
    pub recent_transactions: Vec<Transaction>,
    pub recent_sales: Vec<Sale>,
}

/// Headline figures formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineFigures {
    pub total_income: String,
    pub total_expense: String,
    pub net_balance: String,
    pub working_capital: String,
    pub average_ticket: String,
    pub average_margin: String,
}

pub fn get_dashboard(state: &SessionState) -> DashboardReport {
    debug!("get_dashboard command");

    state.with_session(|s| {
        let report = s.report();
        let working_capital = report.working_capital_summary();

        DashboardReport {
            financial: report.financial_summary(),
            stock: report.stock_summary(),
            composition: working_capital.composition(),
            working_capital,
            net_working_capital: report.net_working_capital(),
            accounts: report.account_totals(),
            sales: report.sales_overview(),
            top_products: report.top_products(TOP_PRODUCTS_LIMIT),
            low_stock: s.inventory().low_stock_products().cloned().collect(),
            recent_transactions: s.ledger().recent(RECENT_LIMIT).cloned().collect(),
            recent_sales: s.sales().recent(RECENT_LIMIT).cloned().collect(),
        }
    })
}

pub fn get_financial_summary(state: &SessionState) -> FinancialSummary {
    state.with_session(|s| s.report().financial_summary())
}

pub fn get_working_capital(state: &SessionState) -> WorkingCapitalSummary {
    state.with_session(|s| s.report().working_capital_summary())
}

/// Best sellers by units sold.
pub fn get_top_products(state: &SessionState) -> Vec<ProductRanking> {
    state.with_session(|s| s.report().top_products(TOP_PRODUCTS_LIMIT))
}

/// Headline cards with the configured currency symbol applied.
pub fn get_headline(state: &SessionState, config: &DashboardConfig) -> HeadlineFigures {
    let report = get_dashboard(state);

    HeadlineFigures {
        total_income: config.format_currency(report.financial.total_income),
        total_expense: config.format_currency(report.financial.total_expense),
        net_balance: config.format_currency(report.financial.net_balance),
        working_capital: config.format_currency(report.working_capital.working_capital_total),
        average_ticket: config.format_currency(report.sales.average_ticket),
        average_margin: format!("{:.1}%", report.sales.average_margin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::inventory::{add_product, ProductForm};
    use crate::commands::ledger::{add_transaction, TransactionForm};
    use crate::commands::sales::{record_sale, SaleForm};
    use fluxo_core::TransactionKind;

    fn reference_state() -> SessionState {
        let state = SessionState::default();
        let product = add_product(
            &state,
            ProductForm {
                name: "Wireless Mouse".to_string(),
                quantity: "20".to_string(),
                cost: "10".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        record_sale(
            &state,
            SaleForm {
                product_id: product.id,
                quantity: "2".to_string(),
                sale_price: "100".to_string(),
                shipping: "5".to_string(),
                fees: "3".to_string(),
                packaging: "2".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        state
    }

    #[test]
    fn test_dashboard_survives_oversized_stock() {
        let state = SessionState::default();
        add_product(
            &state,
            ProductForm {
                name: "Warehouse".to_string(),
                quantity: "1000000".to_string(),
                cost: "100000000000000".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        let report = get_dashboard(&state);
        assert_eq!(report.stock.total_value.cents(), i64::MAX);
        assert_eq!(report.working_capital.working_capital_total.cents(), i64::MAX);
        assert_eq!(report.stock.total_quantity, 1_000_000);
    }

    #[test]
    fn test_dashboard_reference_figures() {
        let report = get_dashboard(&reference_state());

        assert_eq!(report.financial.total_income, Money::from_units(85));
        assert_eq!(report.financial.total_profit, Money::from_units(65));
        assert_eq!(report.stock.total_value, Money::from_units(180));
        assert_eq!(report.working_capital.working_capital_total, Money::from_units(350));
        assert_eq!(report.net_working_capital, Money::from_units(265));
        assert_eq!(report.accounts.settled, Money::from_units(85));
        assert_eq!(report.top_products.len(), 1);
        assert_eq!(report.top_products[0].quantity, 2);
        assert_eq!(report.recent_sales.len(), 1);
        assert_eq!(report.recent_transactions[0].description, "Sale: Wireless Mouse (2x)");
        assert!(report.low_stock.is_empty());
    }

    #[test]
    fn test_empty_dashboard() {
        let report = get_dashboard(&SessionState::default());

        assert!(report.working_capital.working_capital_total.is_zero());
        assert_eq!(report.composition.stock_share, 0.0);
        assert_eq!(report.sales.average_margin, 0.0);
        assert!(report.top_products.is_empty());
    }

    #[test]
    fn test_headline_formatting() {
        let state = reference_state();
        add_transaction(
            &state,
            TransactionForm {
                kind: TransactionKind::Expense,
                description: "Ads".to_string(),
                amount: "100".to_string(),
                ..Default::default()
            },
        );

        let headline = get_headline(&state, &DashboardConfig::default());
        assert_eq!(headline.total_income, "$85.00");
        assert_eq!(headline.net_balance, "-$15.00");
        assert_eq!(headline.working_capital, "$350.00");
        assert_eq!(headline.average_ticket, "$85.00");
        assert_eq!(headline.average_margin, "76.5%");
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(get_dashboard(&reference_state())).unwrap();
        assert!(json.get("workingCapital").is_some());
        assert!(json.get("recentTransactions").is_some());
        assert_eq!(json["topProducts"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_individual_reports_match_dashboard() {
        let state = reference_state();
        let report = get_dashboard(&state);

        assert_eq!(get_financial_summary(&state), report.financial);
        assert_eq!(get_working_capital(&state), report.working_capital);
        assert_eq!(get_top_products(&state), report.top_products);
    }
}
