//! # Inventory Commands
//!
//! Product entry, edits, and the stock lists the dashboard shows.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fluxo_core::validation::parse_whole;
use fluxo_core::{Money, Product, ProductPatch};

use super::{non_blank, required_money, required_whole};
use crate::state::{DashboardConfig, SessionState};

/// New-product form, as typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductForm {
    pub name: String,
    pub quantity: String,
    pub cost: String,
    pub category: String,
    pub supplier: String,
    pub min_stock: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        ProductForm {
            name: String::new(),
            quantity: String::new(),
            cost: String::new(),
            category: String::new(),
            supplier: String::new(),
            min_stock: fluxo_core::DEFAULT_MIN_STOCK.to_string(),
        }
    }
}

/// Edit dialog fields; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductEditForm {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub cost: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub min_stock: Option<String>,
}

impl From<ProductEditForm> for ProductPatch {
    fn from(form: ProductEditForm) -> Self {
        let whole = |s: &str| parse_whole(s).unwrap_or(0);

        ProductPatch {
            name: form.name,
            quantity: form.quantity.as_deref().map(whole),
            cost: form.cost.as_deref().map(Money::parse_or_zero),
            category: form.category,
            supplier: form.supplier,
            min_stock: form.min_stock.as_deref().map(whole),
        }
    }
}

/// A blank product form pre-filled from the configuration.
pub fn new_product_form(config: &DashboardConfig) -> ProductForm {
    ProductForm {
        min_stock: config.default_min_stock.to_string(),
        ..Default::default()
    }
}

/// Adds a product.
///
/// A min stock of "0", blank, or garbage falls back to the default of 5.
///
/// ## Returns
/// The new product, or `None` when name, quantity, or cost was left blank.
pub fn add_product(state: &SessionState, form: ProductForm) -> Option<Product> {
    debug!(name = %form.name, "add_product command");

    let quantity = required_whole(&form.quantity);
    let cost = required_money(&form.cost);
    let min_stock = parse_whole(&form.min_stock).filter(|&n| n != 0);

    state.with_session_mut(|s| {
        s.add_product(
            &form.name,
            quantity,
            cost,
            non_blank(&form.category),
            non_blank(&form.supplier),
            min_stock,
        )
        .cloned()
    })
}

/// Replaces a product with its edited version.
pub fn edit_product(state: &SessionState, id: &str, form: ProductEditForm) -> Option<Product> {
    debug!(%id, "edit_product command");
    state.with_session_mut(|s| s.edit_product(id, form.into()).cloned())
}

/// Every product in insertion order.
pub fn list_products(state: &SessionState) -> Vec<Product> {
    state.with_session(|s| s.inventory().products().to_vec())
}

/// Products at or below their minimum stock.
pub fn low_stock_alerts(state: &SessionState) -> Vec<Product> {
    state.with_session(|s| s.inventory().low_stock_products().cloned().collect())
}

/// Products that can be picked on the sale form (stock above zero).
pub fn list_available_products(state: &SessionState) -> Vec<Product> {
    state.with_session(|s| s.inventory().available_products().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, quantity: &str, cost: &str, min_stock: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            quantity: quantity.to_string(),
            cost: cost.to_string(),
            min_stock: min_stock.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_product_from_form() {
        let state = SessionState::default();
        let product = add_product(&state, form("Wireless Mouse", "20", "10.00", "3")).unwrap();

        assert_eq!(product.quantity, 20);
        assert_eq!(product.cost, Money::from_units(10));
        assert_eq!(product.min_stock, 3);
        assert_eq!(product.supplier, "Not informed");
    }

    #[test]
    fn test_min_stock_zero_or_blank_uses_default() {
        let state = SessionState::default();
        assert_eq!(add_product(&state, form("A", "1", "1", "0")).unwrap().min_stock, 5);
        assert_eq!(add_product(&state, form("B", "1", "1", "")).unwrap().min_stock, 5);
        assert_eq!(add_product(&state, form("C", "1", "1", "lots")).unwrap().min_stock, 5);
    }

    #[test]
    fn test_blank_fields_are_not_submitted() {
        let state = SessionState::default();
        assert!(add_product(&state, form("", "1", "1", "5")).is_none());
        assert!(add_product(&state, form("Lamp", "", "1", "5")).is_none());
        assert!(add_product(&state, form("Lamp", "1", "", "5")).is_none());
        assert!(list_products(&state).is_empty());
    }

    #[test]
    fn test_new_product_form_uses_config() {
        let config = DashboardConfig {
            default_min_stock: 8,
            ..Default::default()
        };
        assert_eq!(new_product_form(&config).min_stock, "8");
        assert_eq!(ProductForm::default().min_stock, "5");
    }

    #[test]
    fn test_stock_lists() {
        let state = SessionState::default();
        add_product(&state, form("Mouse", "20", "10", "5"));
        add_product(&state, form("Cable", "2", "1", "5"));
        add_product(&state, form("Sold out", "0", "1", "5"));

        let alerts: Vec<String> = low_stock_alerts(&state).into_iter().map(|p| p.name).collect();
        assert_eq!(alerts, vec!["Cable", "Sold out"]);

        let available: Vec<String> = list_available_products(&state).into_iter().map(|p| p.name).collect();
        assert_eq!(available, vec!["Mouse", "Cable"]);
    }

    #[test]
    fn test_edit_product_restock() {
        let state = SessionState::default();
        let id = add_product(&state, form("Cable", "2", "1", "5")).unwrap().id;

        let edited = edit_product(
            &state,
            &id,
            ProductEditForm {
                quantity: Some("40".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(edited.quantity, 40);
        assert!(low_stock_alerts(&state).is_empty());
    }
}
