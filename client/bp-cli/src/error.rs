use bp_api::ClientError;
use bp_config::ConfigError;
use bp_core::{CoreError, ValidationFailure};
use bp_session::SessionError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a sign-in, sign-up or onboarding attempt did not change the session.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("{failure} {location}")]
    Validation {
        failure: ValidationFailure,
        location: ErrorLocation,
    },

    #[error("Backend call failed: {0}")]
    Api(#[from] ClientError),

    #[error("Session update failed: {0}")]
    Session(#[from] SessionError),

    #[error("No user is signed in {location}")]
    NotSignedIn { location: ErrorLocation },
}

impl FlowError {
    #[track_caller]
    pub fn not_signed_in() -> Self {
        FlowError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message to show the person at the keyboard.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { failure, .. } => failure.to_string(),
            Self::Api(e) => e.user_message().to_string(),
            Self::Session(e) => e.recovery_hint().to_string(),
            Self::NotSignedIn { .. } => "Please sign in first".to_string(),
        }
    }
}

impl From<CoreError> for FlowError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error.validation_failure() {
            Some(failure) => FlowError::Validation {
                failure,
                location: ErrorLocation::from(Location::caller()),
            },
            None => FlowError::Session(SessionError::from(error)),
        }
    }
}

pub type FlowResult<T> = std::result::Result<T, FlowError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read budget file {path}: {source}")]
    BudgetFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid budget file {path}: {source}")]
    BudgetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for CliError {
    #[track_caller]
    fn from(error: ClientError) -> Self {
        CliError::Flow(FlowError::Api(error))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
