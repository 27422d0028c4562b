//! # Fluxo Dashboard Entry Point
//!
//! Seeds a sample session and prints the overview report.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main.rs ────► fluxo_dashboard::run()                                   │
//! │                   │                                                     │
//! │                   ├── tracing + config                                  │
//! │                   ├── SessionState                                      │
//! │                   ├── demo::seed (via commands/)                        │
//! │                   └── stdout: DashboardReport JSON                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup lives in lib.rs for testability
    fluxo_dashboard::run()
}
