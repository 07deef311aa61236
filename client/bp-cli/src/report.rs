use crate::{CliError, CliResult};

use bp_core::{
    BudgetUsage, CategoryBudget, CategoryProgress, GoalProgress, MonthlySummary, UserProfile,
    allocation_shares, top_spending,
};

use std::fmt::Write;
use std::path::Path;

/// Read a budget file: a JSON array of categories.
pub fn load_budget(path: &Path) -> CliResult<Vec<CategoryBudget>> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::BudgetFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| CliError::BudgetParse {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn whoami(user: Option<&UserProfile>) -> String {
    match user {
        None => "Not signed in".to_string(),
        Some(user) => {
            let mut out = format!("{} <{}>", user.display_name(), user.email);
            if user.needs_onboarding() {
                out.push_str("\nOnboarding incomplete: run `bp onboard`");
            }
            out
        }
    }
}

/// Render the dashboard numbers as plain text.
pub fn summary(
    user: &UserProfile,
    budget: &[CategoryBudget],
    goal: Option<GoalProgress>,
    days_left: Option<u32>,
) -> String {
    let mut out = String::new();
    let month = MonthlySummary::from_profile(user);

    // Writing to a String cannot fail
    let _ = writeln!(out, "Hello, {}", user.display_name());
    let _ = writeln!(out, "Income:     {:>12.2}", month.income);
    let _ = writeln!(out, "Spent:      {:>12.2}", month.spend);
    let _ = writeln!(out, "Remaining:  {:>12.2}", month.remaining);
    let _ = writeln!(out, "Saved:      {:>11.0}%", month.savings_pct);

    if !budget.is_empty() {
        let overall: BudgetUsage = CategoryProgress::overall(budget);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Budget: {:.2} of {:.2} used ({}%)",
            overall.spent,
            overall.allocated,
            overall.rounded_pct()
        );
        for progress in CategoryProgress::for_all(budget) {
            let _ = writeln!(
                out,
                "  {:<16} {:>3}%  left {:>10.2}  [{}]",
                progress.name,
                progress.usage.rounded_pct(),
                progress.usage.remaining,
                progress.health
            );
        }

        let shares = allocation_shares(budget);
        if !shares.is_empty() {
            let _ = writeln!(out, "Allocation:");
            for share in shares {
                let _ = writeln!(out, "  {:<16} {:>3}%", share.name, share.percent);
            }
        }

        let bars = top_spending(budget);
        if let Some(top) = bars.first().filter(|bar| bar.spent > 0.0) {
            let _ = writeln!(out, "Top spending: {} ({:.2})", top.name, top.spent);
        }
    }

    if let Some(goal) = goal {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Goal: {:.2} of {:.2} ({}%)",
            goal.current, goal.target, goal.percent
        );
        if goal.is_reached() {
            let _ = writeln!(out, "Goal reached");
        } else if let Some(days) = days_left {
            let _ = writeln!(out, "Save {:.2} per day", goal.daily_target(days));
        }
    }

    out
}
