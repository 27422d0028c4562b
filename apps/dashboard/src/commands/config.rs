//! # Config Commands

use tracing::debug;

use crate::state::DashboardConfig;

/// Gets the current dashboard configuration (currency, form defaults).
pub fn get_config(config: &DashboardConfig) -> DashboardConfig {
    debug!("get_config command");
    config.clone()
}

/// Pick-list for the transaction form's category field.
pub fn get_transaction_categories() -> Vec<&'static str> {
    fluxo_core::TRANSACTION_CATEGORIES.to_vec()
}

/// Pick-list for the product form's category field.
pub fn get_product_categories() -> Vec<&'static str> {
    fluxo_core::PRODUCT_CATEGORIES.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_pick_lists() {
        let transaction = get_transaction_categories();
        assert_eq!(transaction.len(), 12);
        assert!(transaction.contains(&"Sales"));
        assert_eq!(transaction.last(), Some(&"Other"));

        let product = get_product_categories();
        assert_eq!(product.len(), 9);
        assert_eq!(product.first(), Some(&"Electronics"));
    }
}
