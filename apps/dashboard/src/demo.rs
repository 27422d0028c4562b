//! # Demo Data
//!
//! A small sample business, entered through the same commands the forms
//! use. Handy for screenshots and for eyeballing the reports.

use tracing::info;

use fluxo_core::TransactionKind;

use crate::commands::accounts::{set_account_balance, set_account_pending};
use crate::commands::inventory::{add_product, ProductForm};
use crate::commands::ledger::{add_transaction, TransactionForm};
use crate::commands::sales::{record_sale, SaleForm};
use crate::error::ApiError;
use crate::state::SessionState;

const PRODUCTS: &[(&str, &str, &str, &str, &str)] = &[
    // name, quantity, cost, category, supplier
    ("Wireless Mouse", "20", "10.00", "Electronics", "Acme Imports"),
    ("USB-C Cable", "40", "2.50", "Electronics", "Acme Imports"),
    ("Yoga Mat", "6", "18.00", "Sports", ""),
    ("Desk Lamp", "3", "24.90", "Home & Garden", "Lumen Co"),
];

const EXPENSES: &[(&str, &str, &str)] = &[
    ("Instagram ads", "150.00", "Marketing"),
    ("Shipping boxes", "42.30", "Packaging"),
    ("Internet plan", "99.90", "Internet"),
];

/// Seeds `state` with products, expenses, opening balances, and sales.
pub fn seed(state: &SessionState) -> Result<(), ApiError> {
    let mut ids = Vec::with_capacity(PRODUCTS.len());
    for &(name, quantity, cost, category, supplier) in PRODUCTS {
        let form = ProductForm {
            name: name.to_string(),
            quantity: quantity.to_string(),
            cost: cost.to_string(),
            category: category.to_string(),
            supplier: supplier.to_string(),
            ..Default::default()
        };
        if let Some(product) = add_product(state, form) {
            ids.push(product.id);
        }
    }

    for &(description, amount, category) in EXPENSES {
        add_transaction(
            state,
            TransactionForm {
                kind: TransactionKind::Expense,
                description: description.to_string(),
                amount: amount.to_string(),
                category: category.to_string(),
                account_id: "2".to_string(),
            },
        );
    }

    // opening balances, before sales credit the accounts
    set_account_balance(state, 2, "1250.00")?;
    set_account_pending(state, 1, "310.45")?;

    let sales = [
        (0, "2", "100.00", "5.00", "3.00", "1"),
        (1, "10", "89.90", "0", "4.50", "1"),
        (0, "1", "49.90", "7.90", "1.80", "2"),
        (2, "1", "59.00", "12.00", "2.95", "2"),
    ];
    for (index, quantity, price, shipping, fees, account) in sales {
        let Some(product_id) = ids.get(index) else {
            continue;
        };
        record_sale(
            state,
            SaleForm {
                product_id: product_id.clone(),
                quantity: quantity.to_string(),
                sale_price: price.to_string(),
                shipping: shipping.to_string(),
                fees: fees.to_string(),
                packaging: "2.00".to_string(),
                account_id: account.to_string(),
                ..Default::default()
            },
        )?;
    }

    info!(products = ids.len(), "Demo data seeded");
    Ok(())
}
