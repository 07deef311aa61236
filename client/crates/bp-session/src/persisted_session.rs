use crate::Result as SessionErrorResult;

use bp_core::UserProfile;

use serde::{Deserialize, Serialize};

pub const PERSISTED_SCHEMA_VERSION: u32 = 1;

/// The session as written to storage. Only the user is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: Option<UserProfile>,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    PERSISTED_SCHEMA_VERSION
}

impl PersistedSession {
    pub fn new(user: Option<UserProfile>) -> Self {
        Self {
            user,
            version: PERSISTED_SCHEMA_VERSION,
        }
    }

    pub fn encode(&self) -> SessionErrorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored blob.
    ///
    /// Returns a description of the problem when the blob is unreadable, from
    /// a newer schema, or holds a profile that fails validation.
    pub fn decode(blob: &str) -> Result<Self, String> {
        let session: PersistedSession = serde_json::from_str(blob).map_err(|e| e.to_string())?;

        if session.version > PERSISTED_SCHEMA_VERSION {
            return Err(format!(
                "unsupported session schema v{} (expected <= v{})",
                session.version, PERSISTED_SCHEMA_VERSION
            ));
        }

        if let Some(user) = &session.user {
            user.validate().map_err(|e| e.to_string())?;
        }

        Ok(session)
    }
}
