use serde::{Deserialize, Serialize};

/// One budget category with its monthly allocation and spend so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub name: String,
    #[serde(default)]
    pub allocated: f64,
    #[serde(default)]
    pub spent: f64,
    /// Display color hint, e.g. `#22C55E`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CategoryBudget {
    pub fn new(name: impl Into<String>, allocated: f64, spent: f64) -> Self {
        Self {
            name: name.into(),
            allocated,
            spent,
            color: None,
        }
    }

    /// Allocation minus spend. Negative when over budget.
    pub fn balance(&self) -> f64 {
        sanitize(self.allocated) - sanitize(self.spent)
    }
}

/// Treat NaN and infinities as zero, as the dashboard does for bad input.
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
