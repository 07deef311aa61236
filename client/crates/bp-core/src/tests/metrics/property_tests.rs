use crate::{BudgetUsage, GoalProgress, MonthlySummary};

use proptest::prelude::*;

// =========================================================================
// Property-Based Tests - Metric bounds
// =========================================================================

proptest! {
    #[test]
    fn given_any_amounts_when_budget_usage_then_pct_in_range(
        allocated in -1.0e9f64..1.0e9,
        spent in -1.0e9f64..1.0e9,
    ) {
        let usage = BudgetUsage::new(allocated, spent);
        prop_assert!(usage.usage_pct <= 100.0);
        prop_assert!(usage.remaining >= 0.0);
    }

    #[test]
    fn given_non_negative_amounts_when_budget_usage_then_pct_non_negative(
        allocated in 0.0f64..1.0e9,
        spent in 0.0f64..1.0e9,
    ) {
        let usage = BudgetUsage::new(allocated, spent);
        prop_assert!(usage.usage_pct >= 0.0);
    }

    #[test]
    fn given_any_amounts_when_goal_progress_then_percent_at_most_100(
        current in -1.0e9f64..1.0e9,
        target in -1.0e9f64..1.0e9,
    ) {
        prop_assert!(GoalProgress::new(current, target).percent <= 100);
    }

    #[test]
    fn given_any_amounts_when_monthly_summary_then_remaining_non_negative(
        income in 0.0f64..1.0e9,
        spend in 0.0f64..1.0e9,
    ) {
        let summary = MonthlySummary::new(income, spend);
        prop_assert!(summary.remaining >= 0.0);
        prop_assert!(summary.remaining <= summary.income);
    }
}
