//! # Fluxo Dashboard Library
//!
//! The command boundary between the dashboard screens and `fluxo-core`.
//!
//! ## Module Organization
//! ```text
//! fluxo_dashboard/
//! ├── lib.rs          ◄─── You are here (startup, tracing)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Shared session (Arc<Mutex<Session>>)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports, form parsing
//! │   ├── ledger.rs   ◄─── Transactions
//! │   ├── inventory.rs◄─── Products
//! │   ├── sales.rs    ◄─── Sales
//! │   ├── accounts.rs ◄─── Bank accounts
//! │   ├── reports.rs  ◄─── Overview metrics
//! │   └── config.rs   ◄─── Config and pick-lists
//! ├── demo.rs         ◄─── Sample data
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod demo;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{DashboardConfig, SessionState};

/// Runs the demo dashboard.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (RUST_LOG overrides the default filter)         │
/// │  2. Load DashboardConfig from FLUXO_* env vars                          │
/// │  3. Create SessionState with the configured account count               │
/// │  4. Seed demo data through the commands                                 │
/// │  5. Print the overview report as JSON                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Fluxo dashboard");

    let config = DashboardConfig::from_env();
    let session = SessionState::from_config(&config)?;
    info!(accounts = config.account_count, "Session initialized");

    demo::seed(&session)?;

    let headline = commands::reports::get_headline(&session, &config);
    info!(
        working_capital = %headline.working_capital,
        net_balance = %headline.net_balance,
        "Dashboard ready"
    );

    let report = commands::reports::get_dashboard(&session);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fluxo_core=trace` - Trace the core only
/// - Default: INFO, DEBUG for fluxo crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fluxo_core=debug,fluxo_dashboard=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
