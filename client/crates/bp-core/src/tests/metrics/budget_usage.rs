use crate::{BudgetUsage, CategoryBudget, CategoryProgress, HealthStatus};

#[test]
fn test_usage_under_budget() {
    let usage = BudgetUsage::new(1000.0, 250.0);

    assert_eq!(usage.usage_pct, 25.0);
    assert_eq!(usage.remaining, 750.0);
    assert_eq!(usage.rounded_pct(), 25);
}

#[test]
fn test_usage_over_budget_is_capped() {
    let usage = BudgetUsage::new(1000.0, 1500.0);

    assert_eq!(usage.usage_pct, 100.0);
    assert_eq!(usage.remaining, 0.0);
}

#[test]
fn test_usage_without_allocation_is_zero() {
    let usage = BudgetUsage::new(0.0, 300.0);

    assert_eq!(usage.usage_pct, 0.0);
    assert_eq!(usage.remaining, 0.0);
}

#[test]
fn test_health_thresholds() {
    assert_eq!(HealthStatus::for_budget(1000.0, 800.0), HealthStatus::Great);
    assert_eq!(HealthStatus::for_budget(1000.0, 801.0), HealthStatus::Good);
    assert_eq!(HealthStatus::for_budget(1000.0, 1000.0), HealthStatus::Good);
    assert_eq!(HealthStatus::for_budget(1000.0, 1000.5), HealthStatus::Poor);
    assert_eq!(HealthStatus::Poor.to_string(), "Poor");
}

#[test]
fn test_category_progress_rows_and_overall() {
    let categories = vec![
        CategoryBudget::new("Food", 4000.0, 1000.0),
        CategoryBudget::new("Travel", 1000.0, 1500.0),
    ];

    let rows = CategoryProgress::for_all(&categories);
    let overall = CategoryProgress::overall(&categories);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Food");
    assert_eq!(rows[0].usage.usage_pct, 25.0);
    assert_eq!(rows[0].health, HealthStatus::Great);
    assert_eq!(rows[1].usage.remaining, 0.0);
    assert_eq!(rows[1].health, HealthStatus::Poor);
    assert_eq!(overall.allocated, 5000.0);
    assert_eq!(overall.spent, 2500.0);
    assert_eq!(overall.usage_pct, 50.0);
}
