use crate::models::category_budget::sanitize;

use std::fmt;

/// Remaining balance at or above this is rated `Great`.
pub const GREAT_MARGIN: f64 = 200.0;

/// Budget health rating for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    Great,
    Good,
    Poor,
}

impl HealthStatus {
    pub fn for_budget(allocated: f64, spent: f64) -> Self {
        let remaining = sanitize(allocated) - sanitize(spent);
        if remaining >= GREAT_MARGIN {
            Self::Great
        } else if remaining >= 0.0 {
            Self::Good
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Poor => "Poor",
        }
    }

    /// Hex color the screens use for the label.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Great => "#22C55E",
            Self::Good => "#3B82F6",
            Self::Poor => "#FF3B30",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
