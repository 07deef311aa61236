use crate::metrics::percent_of;
use crate::models::category_budget::sanitize;

/// Progress towards a monthly savings goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub current: f64,
    pub target: f64,
    /// Whole percent in `0..=100`.
    pub percent: u32,
}

impl GoalProgress {
    pub fn new(current: f64, target: f64) -> Self {
        let current = sanitize(current);
        let target = sanitize(target);
        Self {
            current,
            target,
            percent: clamp_percent(percent_of(current, target).round()),
        }
    }

    /// Use an explicit percentage instead of the computed one.
    pub fn with_override(mut self, percent: f64) -> Self {
        self.percent = clamp_percent(sanitize(percent));
        self
    }

    pub fn is_reached(&self) -> bool {
        self.percent >= 100
    }

    /// Amount per day still needed to reach the target.
    pub fn daily_target(&self, days_left: u32) -> f64 {
        let missing = (self.target - self.current).max(0.0);
        if days_left == 0 {
            missing
        } else {
            missing / f64::from(days_left)
        }
    }
}

fn clamp_percent(value: f64) -> u32 {
    value.clamp(0.0, 100.0) as u32
}
