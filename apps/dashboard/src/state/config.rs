//! # Dashboard Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FLUXO_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no mutex.

use serde::{Deserialize, Serialize};
use tracing::warn;

use fluxo_core::{AccountId, Money, Rate, DEFAULT_INVOICE_RATE, DEFAULT_MIN_STOCK, MIN_ACCOUNTS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Bank accounts a new session starts with (2-10).
    pub account_count: AccountId,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Pre-filled invoice rate on the sale form
    pub default_invoice_rate: Rate,

    /// Pre-filled low-stock threshold on the product form
    pub default_min_stock: i64,
}

impl Default for DashboardConfig {
    /// ## Default Values
    /// - Accounts: 2
    /// - Currency: $
    /// - Invoice rate: 5%
    /// - Min stock: 5
    fn default() -> Self {
        DashboardConfig {
            account_count: MIN_ACCOUNTS,
            currency_symbol: "$".to_string(),
            default_invoice_rate: DEFAULT_INVOICE_RATE,
            default_min_stock: DEFAULT_MIN_STOCK,
        }
    }
}

impl DashboardConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FLUXO_ACCOUNT_COUNT`: number of bank accounts (e.g., "4")
    /// - `FLUXO_CURRENCY_SYMBOL`: display symbol (e.g., "R$")
    /// - `FLUXO_INVOICE_RATE`: default invoice percentage (e.g., "6.5")
    ///
    /// Unparseable values are logged and ignored. The account count is
    /// range-checked when the session is created.
    pub fn from_env() -> Self {
        let mut config = DashboardConfig::default();

        if let Ok(count) = std::env::var("FLUXO_ACCOUNT_COUNT") {
            match count.trim().parse::<AccountId>() {
                Ok(count) => config.account_count = count,
                Err(_) => warn!(value = %count, "Ignoring FLUXO_ACCOUNT_COUNT"),
            }
        }

        if let Ok(symbol) = std::env::var("FLUXO_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(rate) = std::env::var("FLUXO_INVOICE_RATE") {
            match Rate::parse(&rate) {
                Some(rate) => config.default_invoice_rate = rate,
                None => warn!(value = %rate, "Ignoring FLUXO_INVOICE_RATE"),
            }
        }

        config
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use fluxo_core::Money;
    /// use fluxo_dashboard::state::DashboardConfig;
    ///
    /// let config = DashboardConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}
