//! # State Module
//!
//! Two focused state types instead of one `AppState`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌────────────────────────────┐     ┌────────────────────────────┐     │
//! │  │       SessionState         │     │      DashboardConfig       │     │
//! │  │                            │     │                            │     │
//! │  │  Arc<Mutex<Session>>       │     │  account_count             │     │
//! │  │  ledger, inventory,        │     │  currency_symbol           │     │
//! │  │  sales, accounts           │     │  default_invoice_rate      │     │
//! │  └────────────────────────────┘     └────────────────────────────┘     │
//! │                                                                         │
//! │  SessionState: exclusive access per command                             │
//! │  DashboardConfig: read-only after startup                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::DashboardConfig;
pub use session::SessionState;
