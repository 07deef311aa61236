use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid profile: {message} {location}")]
    InvalidProfile {
        message: String,
        location: ErrorLocation,
    },

    #[error("{failure} {location}")]
    Validation {
        failure: ValidationFailure,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates InvalidProfile error at caller location.
    #[track_caller]
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(failure: ValidationFailure) -> Self {
        Self::Validation {
            failure,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The input rule that failed, if this is a validation error.
    pub fn validation_failure(&self) -> Option<ValidationFailure> {
        match self {
            Self::Validation { failure, .. } => Some(*failure),
            Self::InvalidProfile { .. } => None,
        }
    }
}

/// User input rules enforced before anything is sent to the backend.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Confirm password is required")]
    ConfirmationRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter your name")]
    NameRequired,

    #[error("Please enter a valid monthly income")]
    IncomeInvalid,
}

pub type Result<T> = StdResult<T, CoreError>;
