pub mod error;
pub mod metrics;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result, ValidationFailure};
pub use metrics::budget_usage::{BudgetUsage, CategoryProgress};
pub use metrics::chart::{AllocationShare, SpendingBar, allocation_shares, axis_ceiling, top_spending, week_of_point};
pub use metrics::goal_progress::GoalProgress;
pub use metrics::health_status::HealthStatus;
pub use metrics::monthly_summary::MonthlySummary;
pub use metrics::transaction_summary::TransactionSummary;
pub use models::category_budget::CategoryBudget;
pub use models::profile_patch::ProfilePatch;
pub use models::user_profile::UserProfile;
pub use validation::{Credentials, MIN_PASSWORD_LENGTH, OnboardingDetails, is_valid_email};
