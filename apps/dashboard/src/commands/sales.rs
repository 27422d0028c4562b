//! # Sales Commands
//!
//! ## Sale Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operator picks a product (list_available_products) and fills in:       │
//! │                                                                         │
//! │    quantity, sale price             ── required                         │
//! │    shipping, fees, gifts, packaging ── optional, blank = 0              │
//! │    invoice %                        ── pre-filled "5", blank = 0        │
//! │    account                          ── pre-filled "1"                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  record_sale ──► Ok(Sale)                                               │
//! │              └─► Err(INSUFFICIENT_STOCK) shown as an alert              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use fluxo_core::validation::parse_whole;
use fluxo_core::{Money, NewSale, Rate, Sale, SalePatch, RECENT_LIMIT};

use super::{account_id, required_money};
use crate::error::ApiError;
use crate::state::{DashboardConfig, SessionState};

/// New-sale form, as typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleForm {
    pub product_id: String,
    pub quantity: String,
    pub sale_price: String,
    pub shipping: String,
    pub fees: String,
    pub gifts: String,
    pub packaging: String,
    pub invoice_percentage: String,
    pub invoice: String,
    pub notes: String,
    pub account_id: String,
}

impl Default for SaleForm {
    fn default() -> Self {
        SaleForm {
            product_id: String::new(),
            quantity: String::new(),
            sale_price: String::new(),
            shipping: String::new(),
            fees: String::new(),
            gifts: String::new(),
            packaging: String::new(),
            invoice_percentage: "5".to_string(),
            invoice: String::new(),
            notes: String::new(),
            account_id: "1".to_string(),
        }
    }
}

impl From<SaleForm> for NewSale {
    fn from(form: SaleForm) -> Self {
        NewSale {
            product_id: form.product_id,
            // Zero or negative units is treated like a blank quantity
            quantity: parse_whole(&form.quantity).filter(|&q| q > 0),
            sale_price: required_money(&form.sale_price),
            shipping: Money::parse_or_zero(&form.shipping),
            fees: Money::parse_or_zero(&form.fees),
            gifts: Money::parse_or_zero(&form.gifts),
            packaging: Money::parse_or_zero(&form.packaging),
            invoice_rate: Rate::parse(&form.invoice_percentage).unwrap_or(Rate::zero()),
            invoice: form.invoice,
            notes: form.notes,
            account_id: account_id(&form.account_id),
        }
    }
}

/// Edit dialog fields; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleEditForm {
    pub product_name: Option<String>,
    pub quantity: Option<String>,
    pub sale_price: Option<String>,
    pub shipping: Option<String>,
    pub fees: Option<String>,
    pub gifts: Option<String>,
    pub packaging: Option<String>,
    pub invoice: Option<String>,
    pub notes: Option<String>,
    pub account_id: Option<String>,
}

impl From<SaleEditForm> for SalePatch {
    fn from(form: SaleEditForm) -> Self {
        let money = |s: Option<String>| s.as_deref().map(Money::parse_or_zero);

        SalePatch {
            product_name: form.product_name,
            quantity: form
                .quantity
                .as_deref()
                .map(|q| parse_whole(q).unwrap_or(0)),
            sale_price: money(form.sale_price),
            shipping: money(form.shipping),
            fees: money(form.fees),
            gifts: money(form.gifts),
            packaging: money(form.packaging),
            invoice: form.invoice,
            date: None,
            notes: form.notes,
            account_id: form.account_id.as_deref().and_then(account_id),
        }
    }
}

/// A blank sale form pre-filled from the configuration.
pub fn new_sale_form(config: &DashboardConfig) -> SaleForm {
    SaleForm {
        invoice_percentage: format!("{}", config.default_invoice_rate.percentage()),
        ..Default::default()
    }
}

/// Records a sale.
///
/// ## Errors
/// - `VALIDATION_ERROR`: product, quantity, price, or account left blank
/// - `NOT_FOUND`: product or account does not exist
/// - `INSUFFICIENT_STOCK`: quantity exceeds stock; nothing was changed
pub fn record_sale(state: &SessionState, form: SaleForm) -> Result<Sale, ApiError> {
    debug!(product_id = %form.product_id, quantity = %form.quantity, "record_sale command");

    let input = NewSale::from(form);
    state
        .with_session_mut(|s| s.record_sale(input))
        .map_err(|e| {
            warn!(error = %e, "Sale refused");
            ApiError::from(e)
        })
}

/// Replaces a sale with its edited version and recomputes its figures.
///
/// Stock, ledger, and account balances are not touched by an edit.
pub fn edit_sale(state: &SessionState, id: &str, form: SaleEditForm) -> Option<Sale> {
    debug!(%id, "edit_sale command");
    state.with_session_mut(|s| s.edit_sale(id, form.into()).cloned())
}

/// The ten latest sales, newest first.
pub fn list_recent_sales(state: &SessionState) -> Vec<Sale> {
    state.with_session(|s| s.sales().recent(RECENT_LIMIT).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::inventory::{add_product, ProductForm};
    use crate::commands::ledger::list_transactions;
    use crate::error::ErrorCode;

    fn stocked() -> (SessionState, String) {
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
        (state, product.id)
    }

    fn sale_form(product_id: &str, quantity: &str) -> SaleForm {
        SaleForm {
            product_id: product_id.to_string(),
            quantity: quantity.to_string(),
            sale_price: "100".to_string(),
            shipping: "5".to_string(),
            fees: "3".to_string(),
            packaging: "2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_record_sale_from_form() {
        let (state, id) = stocked();
        let sale = record_sale(&state, sale_form(&id, "2")).unwrap();

        assert_eq!(sale.invoice_cost, Money::from_units(5));
        assert_eq!(sale.net_revenue, Money::from_units(85));
        assert_eq!(sale.profit, Money::from_units(65));
        assert_eq!(sale.account_id, 1);

        let ledger = list_transactions(&state);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].category, "Sales");
    }

    #[test]
    fn test_insufficient_stock_is_reported() {
        let (state, id) = stocked();
        let err = record_sale(&state, sale_form(&id, "21")).unwrap_err();

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert!(list_recent_sales(&state).is_empty());
        assert!(list_transactions(&state).is_empty());
    }

    #[test]
    fn test_blank_or_zero_quantity_is_missing() {
        let (state, id) = stocked();

        for quantity in ["", "0", "-2", "two"] {
            let err = record_sale(&state, sale_form(&id, quantity)).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
            assert_eq!(err.message, "quantity is required");
        }
    }

    #[test]
    fn test_unknown_account_is_not_found() {
        let (state, id) = stocked();
        let form = SaleForm {
            account_id: "9".to_string(),
            ..sale_form(&id, "1")
        };

        let err = record_sale(&state, form).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Account not found: 9");
    }

    #[test]
    fn test_blank_invoice_percentage_is_zero() {
        let (state, id) = stocked();
        let form = SaleForm {
            invoice_percentage: String::new(),
            ..sale_form(&id, "2")
        };

        let sale = record_sale(&state, form).unwrap();
        assert!(sale.invoice_cost.is_zero());
        assert_eq!(sale.net_revenue, Money::from_units(90));
    }

    #[test]
    fn test_form_deserializes_camel_case() {
        let form: SaleForm = serde_json::from_value(serde_json::json!({
            "productId": "p-1",
            "quantity": "2",
            "salePrice": "100",
            "invoicePercentage": "7.5"
        }))
        .unwrap();

        assert_eq!(form.sale_price, "100");
        assert_eq!(form.account_id, "1");
        assert_eq!(NewSale::from(form).invoice_rate, Rate::from_bps(750));
    }

    #[test]
    fn test_new_sale_form_uses_config() {
        let config = DashboardConfig {
            default_invoice_rate: Rate::from_bps(650),
            ..Default::default()
        };
        assert_eq!(new_sale_form(&config).invoice_percentage, "6.5");
        assert_eq!(new_sale_form(&DashboardConfig::default()).invoice_percentage, "5");
    }

    #[test]
    fn test_edit_sale_recomputes_at_five_percent() {
        let (state, id) = stocked();
        let form = SaleForm {
            invoice_percentage: "10".to_string(),
            ..sale_form(&id, "2")
        };
        let sale = record_sale(&state, form).unwrap();

        let edited = edit_sale(
            &state,
            &sale.id,
            SaleEditForm {
                sale_price: Some("200".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        // 200 - 5 - 3 - 0 - 2 - 10 = 180; profit = 180 - 20
        assert_eq!(edited.invoice_cost, Money::from_units(10));
        assert_eq!(edited.net_revenue, Money::from_units(180));
        assert_eq!(edited.profit, Money::from_units(160));
        assert_eq!(list_recent_sales(&state)[0], edited);
    }
}
