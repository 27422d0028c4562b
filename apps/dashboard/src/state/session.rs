//! # Session State
//!
//! The live session shared by every command.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` so whichever host drives the
//! commands can call them from any thread. Each command runs to completion
//! under the lock, so a sale's four side effects are never interleaved with
//! another command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form submit ──► command ──► with_session_mut(|s| s.record_sale(..))   │
//! │                                     │                                   │
//! │                              lock held until the closure returns        │
//! │                                                                         │
//! │  Dashboard   ──► command ──► with_session(|s| s.report()...)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use fluxo_core::validation::ValidationResult;
use fluxo_core::Session;

use super::DashboardConfig;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    pub fn new(session: Session) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Starts an empty session sized by the configured account count.
    pub fn from_config(config: &DashboardConfig) -> ValidationResult<Self> {
        Ok(SessionState::new(Session::new(config.account_count)?))
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = state.with_session(|s| s.report().financial_summary());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        // Sale checks all run before the first mutation: a poisoned session
        // is still consistent.
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}
