//! UserProfile entity - the authenticated user as confirmed by the backend.

use crate::models::serde_helpers::{null_as_empty, null_as_false, null_as_zero};
use crate::{CoreError, ProfilePatch, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name shown when the backend has not recorded one yet.
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// The signed-in user's profile.
///
/// Field names follow the backend's JSON (camelCase, `_id`) so the same type
/// is used for API responses and for the persisted session blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend-assigned identifier. Immutable once set.
    #[serde(rename = "_id", default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Opaque avatar reference.
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    /// Monthly income. Zero means onboarding has not been completed.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub income: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub monthly_spend: f64,
}

impl UserProfile {
    /// Create a profile with only the identity fields set.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: email.into(),
            phone: None,
            avatar: None,
            is_active: true,
            last_login_at: None,
            income: 0.0,
            monthly_spend: 0.0,
        }
    }

    /// Check that the profile is fully formed.
    ///
    /// A profile without an identifier, or with negative/non-finite amounts,
    /// is never accepted as the session user.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::invalid_profile("profile has no identifier"));
        }
        check_amount("income", self.income)?;
        check_amount("monthlySpend", self.monthly_spend)?;
        Ok(())
    }

    /// Whether the user still has to enter their income.
    pub fn needs_onboarding(&self) -> bool {
        !(self.income.is_finite() && self.income > 0.0)
    }

    /// Name for greetings, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            FALLBACK_DISPLAY_NAME
        } else {
            name
        }
    }

    /// Shallow merge: fields present in `patch` overwrite, all others keep
    /// their current value. The identifier is never touched.
    pub fn merged(&self, patch: &ProfilePatch) -> Self {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name.clone_from(name);
        }
        if let Some(email) = &patch.email {
            next.email.clone_from(email);
        }
        if let Some(phone) = &patch.phone {
            next.phone = Some(phone.clone());
        }
        if let Some(avatar) = &patch.avatar {
            next.avatar.clone_from(avatar);
        }
        if let Some(is_active) = patch.is_active {
            next.is_active = is_active;
        }
        if let Some(last_login_at) = patch.last_login_at {
            next.last_login_at = Some(last_login_at);
        }
        if let Some(income) = patch.income {
            next.income = income;
        }
        if let Some(monthly_spend) = patch.monthly_spend {
            next.monthly_spend = monthly_spend;
        }
        next
    }
}

#[track_caller]
pub(crate) fn check_amount(field: &str, value: f64) -> CoreErrorResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::invalid_profile(format!(
            "{field} must be a non-negative amount (got {value})"
        )));
    }
    Ok(())
}
