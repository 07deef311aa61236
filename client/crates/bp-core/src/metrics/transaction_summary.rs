use crate::models::category_budget::sanitize;

/// Count, total and average of a month's transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

impl TransactionSummary {
    /// Amounts are signed (+income, -expense); totals use magnitudes.
    pub fn from_amounts(amounts: &[f64]) -> Self {
        let count = amounts.len();
        let total: f64 = amounts.iter().map(|a| sanitize(*a).abs()).sum();
        let average = if count == 0 { 0.0 } else { total / count as f64 };
        Self {
            count,
            total,
            average,
        }
    }
}
