use crate::{GoalProgress, TransactionSummary};

#[test]
fn test_goal_progress_rounds_and_clamps() {
    assert_eq!(GoalProgress::new(5000.0, 10000.0).percent, 50);
    assert_eq!(GoalProgress::new(3333.0, 10000.0).percent, 33);
    assert_eq!(GoalProgress::new(15000.0, 10000.0).percent, 100);
    assert_eq!(GoalProgress::new(100.0, 0.0).percent, 0);
}

#[test]
fn test_goal_override_is_clamped() {
    let goal = GoalProgress::new(0.0, 100.0);

    assert_eq!(goal.with_override(140.0).percent, 100);
    assert_eq!(goal.with_override(-3.0).percent, 0);
    assert_eq!(goal.with_override(42.7).percent, 42);
}

#[test]
fn test_goal_daily_target() {
    let goal = GoalProgress::new(5000.0, 10000.0);

    assert_eq!(goal.daily_target(10), 500.0);
    assert_eq!(goal.daily_target(0), 5000.0);
    assert!(!goal.is_reached());
    assert_eq!(GoalProgress::new(12000.0, 10000.0).daily_target(5), 0.0);
}

#[test]
fn test_transaction_summary() {
    let summary = TransactionSummary::from_amounts(&[250.0, -750.0, 1000.0]);

    assert_eq!(summary.count, 3);
    assert_eq!(summary.total, 2000.0);
    assert!((summary.average - 666.666).abs() < 0.01);
    assert_eq!(TransactionSummary::from_amounts(&[]).average, 0.0);
}
