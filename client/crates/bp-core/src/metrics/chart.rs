//! Bucketing and scaling for the dashboard charts.

use crate::CategoryBudget;
use crate::metrics::percent_of;
use crate::models::category_budget::sanitize;

/// Smallest y-axis ceiling the yearly chart uses.
pub const MIN_AXIS_CEILING: f64 = 500.0;

/// A category's slice of the allocation pie.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationShare {
    pub name: String,
    pub allocated: f64,
    /// Rounded whole percent of the total allocation.
    pub percent: u32,
}

/// A category bar in the top-spending list.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingBar {
    pub name: String,
    pub spent: f64,
    /// Bar length relative to the largest spend, in `0.0..=1.0`.
    pub ratio: f64,
}

/// Split the total allocation across categories. Empty allocations are dropped.
pub fn allocation_shares(categories: &[CategoryBudget]) -> Vec<AllocationShare> {
    let total: f64 = categories.iter().map(|c| sanitize(c.allocated)).sum();

    categories
        .iter()
        .filter(|c| sanitize(c.allocated) > 0.0)
        .map(|c| {
            let allocated = sanitize(c.allocated);
            AllocationShare {
                name: c.name.clone(),
                allocated,
                percent: percent_of(allocated, total).round() as u32,
            }
        })
        .collect()
}

/// Categories ordered by spend, largest first.
pub fn top_spending(categories: &[CategoryBudget]) -> Vec<SpendingBar> {
    let mut sorted: Vec<(String, f64)> = categories
        .iter()
        .map(|c| (c.name.clone(), sanitize(c.spent)))
        .collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

    let max_spent = sorted.first().map(|(_, s)| *s).unwrap_or(0.0);
    let denominator = if max_spent > 0.0 { max_spent } else { 1.0 };

    sorted
        .into_iter()
        .map(|(name, spent)| SpendingBar {
            name,
            spent,
            ratio: (spent / denominator).clamp(0.0, 1.0),
        })
        .collect()
}

/// Week bucket for a point in a series of `points` values split into
/// `weeks` equal buckets. Out-of-range indices are clamped.
///
/// Returns `None` when the series or week count is empty.
pub fn week_of_point(index: usize, points: usize, weeks: usize) -> Option<usize> {
    if points == 0 || weeks == 0 {
        return None;
    }
    let per_week = (points / weeks).max(1);
    let index = index.min(points - 1);
    Some((index / per_week).min(weeks - 1))
}

/// Y-axis ceiling: the largest value rounded up to the next hundred, never
/// below [`MIN_AXIS_CEILING`].
pub fn axis_ceiling(values: &[f64]) -> f64 {
    let max = values
        .iter()
        .map(|v| sanitize(*v))
        .fold(0.0_f64, f64::max);
    let base = if max > 0.0 { max } else { MIN_AXIS_CEILING };
    ((base / 100.0).ceil() * 100.0).max(MIN_AXIS_CEILING)
}
