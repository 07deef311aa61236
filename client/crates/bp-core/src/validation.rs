//! Input checks run before a request is sent to the backend.
//!
//! Inputs are trimmed first; the first failing rule wins.

use crate::{CoreError, ProfilePatch, Result as CoreErrorResult, ValidationFailure};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Trimmed, validated email and password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Validate login input.
    #[track_caller]
    pub fn for_login(email: &str, password: &str) -> CoreErrorResult<Self> {
        let email = check_email(email)?;
        let password = check_password(password)?;
        Ok(Self { email, password })
    }

    /// Validate signup input, including the password confirmation.
    #[track_caller]
    pub fn for_sign_up(email: &str, password: &str, confirm: &str) -> CoreErrorResult<Self> {
        let credentials = Self::for_login(email, password)?;

        let confirm = confirm.trim();
        if confirm.is_empty() {
            return Err(CoreError::validation(ValidationFailure::ConfirmationRequired));
        }
        if confirm != credentials.password {
            return Err(CoreError::validation(ValidationFailure::PasswordMismatch));
        }

        Ok(credentials)
    }
}

/// Name and income collected when a new user first opens the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingDetails {
    pub name: String,
    pub income: f64,
}

impl OnboardingDetails {
    /// Zero income is refused so a completed onboarding can never look
    /// incomplete again.
    #[track_caller]
    pub fn new(name: &str, income: f64) -> CoreErrorResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::validation(ValidationFailure::NameRequired));
        }
        if !income.is_finite() || income <= 0.0 {
            return Err(CoreError::validation(ValidationFailure::IncomeInvalid));
        }
        Ok(Self {
            name: name.to_string(),
            income,
        })
    }

    pub fn to_patch(&self) -> ProfilePatch {
        ProfilePatch::new().name(self.name.clone()).income(self.income)
    }
}

/// Matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[track_caller]
fn check_email(email: &str) -> CoreErrorResult<String> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CoreError::validation(ValidationFailure::EmailRequired));
    }
    if !is_valid_email(email) {
        return Err(CoreError::validation(ValidationFailure::EmailInvalid));
    }
    Ok(email.to_string())
}

#[track_caller]
fn check_password(password: &str) -> CoreErrorResult<String> {
    let password = password.trim();
    if password.is_empty() {
        return Err(CoreError::validation(ValidationFailure::PasswordRequired));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(ValidationFailure::PasswordTooShort));
    }
    Ok(password.to_string())
}
