//! Client-side session store.
//!
//! Holds at most one signed-in [`UserProfile`](bp_core::UserProfile), mirrors
//! every change to a [`SessionStorage`] backend and restores it on start.
//!
//! LIFECYCLE
//! =========
//! `SessionStore::new` → `hydrate().await` → `set_user` / `update_user` /
//! `clear_user` → `shutdown().await`.
//!
//! Mutations are synchronous. Persistence runs on a background writer task,
//! in mutation order, so callers never wait on disk and the stored record
//! converges to the latest state.

pub mod error;
pub mod hydrate_outcome;
pub mod persisted_session;
pub mod session_state;
pub mod session_store;
pub mod storage;
pub mod subscription;

mod persistence_writer;

#[cfg(test)]
mod tests;

pub use error::{Result, SessionError};
pub use hydrate_outcome::HydrateOutcome;
pub use persisted_session::{PERSISTED_SCHEMA_VERSION, PersistedSession};
pub use session_state::{SessionAction, SessionState};
pub use session_store::SessionStore;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use subscription::Subscription;

/// Storage key the session record is written under.
pub const DEFAULT_STORAGE_KEY: &str = "user-storage";
