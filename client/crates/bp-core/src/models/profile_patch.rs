use crate::Result as CoreErrorResult;
use crate::models::serde_helpers::present_or_null;
use crate::models::user_profile::check_amount;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A partial profile update. Absent fields are left unchanged.
///
/// There is no `id` field: the identifier cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `Some(None)` clears the avatar.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub avatar: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_spend: Option<f64>,
}

impl ProfilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn income(mut self, income: f64) -> Self {
        self.income = Some(income);
        self
    }

    pub fn monthly_spend(mut self, monthly_spend: f64) -> Self {
        self.monthly_spend = Some(monthly_spend);
        self
    }

    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject amounts that would leave the merged profile invalid.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(income) = self.income {
            check_amount("income", income)?;
        }
        if let Some(monthly_spend) = self.monthly_spend {
            check_amount("monthlySpend", monthly_spend)?;
        }
        Ok(())
    }
}
