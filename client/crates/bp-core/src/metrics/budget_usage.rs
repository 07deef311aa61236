use crate::metrics::percent_of;
use crate::models::category_budget::sanitize;
use crate::{CategoryBudget, HealthStatus};

/// How much of an allocation has been used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetUsage {
    pub allocated: f64,
    pub spent: f64,
    /// Capped at 100; 0 when nothing was allocated.
    pub usage_pct: f64,
    /// Never negative.
    pub remaining: f64,
}

impl BudgetUsage {
    pub fn new(allocated: f64, spent: f64) -> Self {
        let allocated = sanitize(allocated);
        let spent = sanitize(spent);
        Self {
            allocated,
            spent,
            usage_pct: percent_of(spent, allocated).min(100.0),
            remaining: (allocated - spent).max(0.0),
        }
    }

    /// Usage rounded for "NN% Used" labels.
    pub fn rounded_pct(&self) -> u32 {
        self.usage_pct.round().clamp(0.0, 100.0) as u32
    }
}

/// Per-category row for the budget screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProgress {
    pub name: String,
    pub usage: BudgetUsage,
    pub health: HealthStatus,
}

impl From<&CategoryBudget> for CategoryProgress {
    fn from(category: &CategoryBudget) -> Self {
        Self {
            name: category.name.clone(),
            usage: BudgetUsage::new(category.allocated, category.spent),
            health: HealthStatus::for_budget(category.allocated, category.spent),
        }
    }
}

impl CategoryProgress {
    pub fn for_all(categories: &[CategoryBudget]) -> Vec<Self> {
        categories.iter().map(Self::from).collect()
    }

    /// Totals across all categories.
    pub fn overall(categories: &[CategoryBudget]) -> BudgetUsage {
        let (allocated, spent) = categories.iter().fold((0.0, 0.0), |(a, s), c| {
            (a + sanitize(c.allocated), s + sanitize(c.spent))
        });
        BudgetUsage::new(allocated, spent)
    }
}
