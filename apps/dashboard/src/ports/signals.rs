//! Post-success signals: cache invalidation and navigation.

use tracing::info;

/// Views a submission can invalidate or navigate to.
pub mod views {
    pub const INVOICES: &str = "/dashboard/invoices";
    pub const DASHBOARD: &str = "/dashboard";
    pub const LOGIN: &str = "/login";
}

/// Fired by an orchestrator after a successful mutation, in the order
/// revalidate then navigate.
pub trait Signals: Send + Sync {
    /// Marks cached data for `view` stale.
    fn revalidate(&self, view: &str);

    /// Moves the user to `view`.
    fn navigate(&self, view: &str);
}

/// Emits each signal as a structured log event. Used by the CLI host,
/// where there is no rendered view to refresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSignals;

impl Signals for TracingSignals {
    fn revalidate(&self, view: &str) {
        info!(view = %view, "Revalidating view");
    }

    fn navigate(&self, view: &str) {
        info!(view = %view, "Navigating");
    }
}
