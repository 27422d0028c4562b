//! # Inventory
//!
//! Products with stock counts and reorder thresholds.
//!
//! ## Stock Movements
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stock Movements                                  │
//! │                                                                         │
//! │  add_product()     ──► new product with its opening quantity            │
//! │  edit_product()    ──► quantity set explicitly by the operator          │
//! │  decrement_stock() ──► ONLY called by the sales engine, after it has    │
//! │                        checked quantity <= stock                        │
//! │                                                                         │
//! │  There is no restock operation: stock goes up only through an edit.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::money::Money;
use crate::types::{Product, ProductPatch};
use crate::validation::{or_default, require_text};
use crate::{DEFAULT_CATEGORY, DEFAULT_MIN_STOCK, DEFAULT_SUPPLIER};

/// The product catalogue and its stock levels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Adds a product.
    ///
    /// ## Defaults
    /// - category: "Other"
    /// - supplier: "Not informed"
    /// - min_stock: 5
    ///
    /// ## Returns
    /// `None` (nothing added) if the name is blank, or quantity or cost is
    /// absent or negative.
    pub fn add_product(
        &mut self,
        name: &str,
        quantity: Option<i64>,
        cost: Option<Money>,
        category: Option<&str>,
        supplier: Option<&str>,
        min_stock: Option<i64>,
    ) -> Option<&Product> {
        let Ok(name) = require_text("name", name) else {
            debug!("Product skipped: name is blank");
            return None;
        };
        let (Some(quantity), Some(cost)) = (quantity, cost) else {
            debug!(%name, "Product skipped: quantity or cost is absent");
            return None;
        };
        if quantity < 0 || cost.is_negative() {
            debug!(%name, quantity, cost = %cost, "Product skipped: negative quantity or cost");
            return None;
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name,
            quantity,
            cost,
            category: or_default(category, DEFAULT_CATEGORY),
            supplier: or_default(supplier, DEFAULT_SUPPLIER),
            min_stock: min_stock.unwrap_or(DEFAULT_MIN_STOCK),
        };

        debug!(id = %product.id, name = %product.name, quantity, "Product added");
        self.products.push(product);
        self.products.last()
    }

    /// Replaces the product matching `id` with the patched record.
    ///
    /// Returns `None` (and changes nothing) if no product has that id.
    pub fn edit_product(&mut self, id: &str, patch: ProductPatch) -> Option<&Product> {
        let Some(slot) = self.products.iter_mut().find(|p| p.id == id) else {
            debug!(%id, "Product edit skipped: not found");
            return None;
        };

        *slot = patch.apply(slot);
        Some(slot)
    }

    /// Removes `qty` units from the product's stock.
    ///
    /// ## Contract
    /// The caller has already checked `qty <= quantity`; this only
    /// subtracts. Returns `None` if the product does not exist.
    pub fn decrement_stock(&mut self, id: &str, qty: i64) -> Option<&Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.quantity = product.quantity.saturating_sub(qty);
        Some(product)
    }

    /// Total units on hand across all products, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.products
            .iter()
            .fold(0, |total, p| total.saturating_add(p.quantity))
    }

    /// Stock valuation: Σ quantity × cost.
    pub fn total_value(&self) -> Money {
        self.products.iter().map(Product::stock_value).sum()
    }

    /// Number of products at or below their threshold.
    pub fn low_stock_count(&self) -> usize {
        self.low_stock_products().count()
    }

    /// Products at or below their threshold, in insertion order.
    pub fn low_stock_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_low_stock())
    }

    /// Products with at least one unit on hand (the sale pick-list).
    pub fn available_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.quantity > 0)
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// First product with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn add(inventory: &mut Inventory, name: &str, quantity: i64, cost_units: i64, min: i64) -> String {
        inventory
            .add_product(
                name,
                Some(quantity),
                Some(Money::from_units(cost_units)),
                None,
                None,
                Some(min),
            )
            .map(|p| p.id.clone())
            .unwrap()
    }

    #[test]
    fn test_add_product_defaults() {
        let mut inventory = Inventory::new();
        let product = inventory
            .add_product("Desk Lamp", Some(12), Some(Money::from_units(30)), None, Some(""), None)
            .unwrap();

        assert_eq!(product.category, "Other");
        assert_eq!(product.supplier, "Not informed");
        assert_eq!(product.min_stock, 5);
        assert_eq!(product.quantity, 12);
    }

    #[test]
    fn test_add_product_incomplete_is_noop() {
        let mut inventory = Inventory::new();

        assert!(inventory
            .add_product(" ", Some(1), Some(Money::from_units(1)), None, None, None)
            .is_none());
        assert!(inventory
            .add_product("Lamp", None, Some(Money::from_units(1)), None, None, None)
            .is_none());
        assert!(inventory
            .add_product("Lamp", Some(1), None, None, None, None)
            .is_none());
        assert!(inventory
            .add_product("Lamp", Some(-1), Some(Money::from_units(1)), None, None, None)
            .is_none());
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_stock_totals() {
        let mut inventory = Inventory::new();
        add(&mut inventory, "Mouse", 18, 10, 5);
        add(&mut inventory, "Cable", 3, 2, 5);

        assert_eq!(inventory.total_quantity(), 21);
        assert_eq!(inventory.total_value(), Money::from_units(186));
    }

    #[test]
    fn test_oversized_stock_saturates_totals() {
        let mut inventory = Inventory::new();
        inventory
            .add_product(
                "Warehouse",
                Some(1_000_000),
                Some(Money::from_units(100_000_000_000_000)),
                None,
                None,
                None,
            )
            .unwrap();
        add(&mut inventory, "Mouse", i64::MAX, 10, 5);

        assert_eq!(inventory.total_value().cents(), i64::MAX);
        assert_eq!(inventory.total_quantity(), i64::MAX);
    }

    #[test]
    fn test_low_stock_boundary_is_inclusive() {
        let mut inventory = Inventory::new();
        add(&mut inventory, "At threshold", 5, 1, 5);
        add(&mut inventory, "Below", 4, 1, 5);
        add(&mut inventory, "Above", 6, 1, 5);
        add(&mut inventory, "Empty", 0, 1, 0);

        assert_eq!(inventory.low_stock_count(), 3);
        let names: Vec<&str> = inventory.low_stock_products().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["At threshold", "Below", "Empty"]);
    }

    #[test]
    fn test_available_products_excludes_empty() {
        let mut inventory = Inventory::new();
        add(&mut inventory, "Mouse", 1, 10, 5);
        add(&mut inventory, "Sold out", 0, 10, 5);

        let names: Vec<&str> = inventory.available_products().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mouse"]);
    }

    #[test]
    fn test_decrement_stock() {
        let mut inventory = Inventory::new();
        let id = add(&mut inventory, "Mouse", 20, 10, 5);

        assert_eq!(inventory.decrement_stock(&id, 2).unwrap().quantity, 18);
        assert!(inventory.decrement_stock("missing", 1).is_none());
        assert_eq!(inventory.get(&id).unwrap().quantity, 18);
    }

    #[test]
    fn test_edit_product_replaces_by_id() {
        let mut inventory = Inventory::new();
        let id = add(&mut inventory, "Mouse", 20, 10, 5);

        let edited = inventory
            .edit_product(
                &id,
                ProductPatch {
                    quantity: Some(40),
                    cost: Some(Money::from_units(9)),
                    ..Default::default()
                },
            )
            .cloned()
            .unwrap();

        assert_eq!(edited.quantity, 40);
        assert_eq!(edited.name, "Mouse");
        assert_eq!(inventory.total_value(), Money::from_units(360));
        assert!(inventory.edit_product("missing", ProductPatch::default()).is_none());
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let mut inventory = Inventory::new();
        let first = add(&mut inventory, "Mouse", 1, 10, 5);
        add(&mut inventory, "Mouse", 2, 12, 5);

        assert_eq!(inventory.find_by_name("Mouse").unwrap().id, first);
        assert!(inventory.find_by_name("mouse").is_none());
    }
}
