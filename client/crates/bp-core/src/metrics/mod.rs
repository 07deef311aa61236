//! Derived figures shown on the dashboard, budget and goal screens.
//!
//! Everything here is a pure function of amounts. Non-finite inputs are
//! treated as zero and percentages are clamped to what the screens display.

pub mod budget_usage;
pub mod chart;
pub mod goal_progress;
pub mod health_status;
pub mod monthly_summary;
pub mod transaction_summary;

/// Percentage of `part` in `whole`, or 0 when `whole` is not positive.
pub(crate) fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}
