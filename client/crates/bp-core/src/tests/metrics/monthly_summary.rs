use crate::{MonthlySummary, UserProfile};

#[test]
fn test_summary_from_profile() {
    let mut profile = UserProfile::new("u1", "a@example.com");
    profile.income = 50000.0;
    profile.monthly_spend = 12500.0;

    let summary = MonthlySummary::from_profile(&profile);

    assert_eq!(summary.saving, 37500.0);
    assert_eq!(summary.remaining, 37500.0);
    assert_eq!(summary.savings_pct, 75.0);
    assert!(summary.has_spending());
}

#[test]
fn test_overspent_month_keeps_negative_saving_but_zero_remaining() {
    let summary = MonthlySummary::new(1000.0, 1200.0);

    assert_eq!(summary.saving, -200.0);
    assert_eq!(summary.remaining, 0.0);
    assert_eq!(summary.savings_pct, -20.0);
}

#[test]
fn test_no_income_gives_zero_percent() {
    let summary = MonthlySummary::new(0.0, 0.0);

    assert_eq!(summary.savings_pct, 0.0);
    assert!(!summary.has_spending());
}
