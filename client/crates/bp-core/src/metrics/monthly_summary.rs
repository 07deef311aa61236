use crate::UserProfile;
use crate::metrics::percent_of;
use crate::models::category_budget::sanitize;

/// Income versus spend for the current month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySummary {
    pub income: f64,
    pub spend: f64,
    /// `income - spend`; negative when overspent.
    pub saving: f64,
    /// `saving` floored at zero.
    pub remaining: f64,
    /// `saving` as a percentage of income, 0 without income.
    pub savings_pct: f64,
}

impl MonthlySummary {
    pub fn new(income: f64, spend: f64) -> Self {
        let income = sanitize(income);
        let spend = sanitize(spend);
        let saving = income - spend;
        Self {
            income,
            spend,
            saving,
            remaining: saving.max(0.0),
            savings_pct: percent_of(saving, income),
        }
    }

    pub fn from_profile(profile: &UserProfile) -> Self {
        Self::new(profile.income, profile.monthly_spend)
    }

    pub fn has_spending(&self) -> bool {
        self.spend > 0.0
    }
}
