use bp_core::{ProfilePatch, UserProfile};

use std::sync::Arc;

/// Snapshot of the session.
///
/// `user` is `None` when nobody is signed in. A present user has already
/// passed [`UserProfile::validate`].
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    user: Option<Arc<UserProfile>>,
    /// Bumped on every applied change.
    revision: u64,
}

/// A change to the session, applied by [`SessionState::reduce`].
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Replace the session with a server-confirmed profile.
    Set(UserProfile),
    /// Shallow-merge into the current profile, if any.
    Update(ProfilePatch),
    /// Sign out.
    Clear,
    /// Load the persisted profile at start-up.
    Restore(Option<UserProfile>),
}

impl SessionState {
    pub fn user(&self) -> Option<&Arc<UserProfile>> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Compute the next state without touching `self`.
    ///
    /// Returns `None` when the action changes nothing (an update with no
    /// user signed in).
    pub fn reduce(&self, action: SessionAction) -> Option<SessionState> {
        let user = match action {
            SessionAction::Set(profile) => Some(Arc::new(profile)),
            SessionAction::Update(patch) => {
                let current = self.user.as_ref()?;
                Some(Arc::new(current.merged(&patch)))
            }
            SessionAction::Clear => None,
            SessionAction::Restore(profile) => profile.map(Arc::new),
        };

        Some(SessionState {
            user,
            revision: self.revision.wrapping_add(1),
        })
    }
}
