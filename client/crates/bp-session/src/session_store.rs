use crate::persistence_writer::{PersistCommand, PersistenceWriter, flush_result};
use crate::subscription::ListenerRegistry;
use crate::{
    DEFAULT_STORAGE_KEY, HydrateOutcome, PersistedSession, Result as SessionErrorResult,
    SessionAction, SessionError, SessionState, SessionStorage, Subscription,
};

use bp_core::{ProfilePatch, UserProfile};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use log::{debug, info, warn};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Single source of truth for who is signed in.
///
/// Construct one per process and share it through `Arc`. Every mutation
/// replaces the in-memory state first, queues a write-through to storage,
/// then notifies listeners synchronously. Storage failures are logged and
/// reported by [`flush`](Self::flush); they never undo an in-memory change.
pub struct SessionStore {
    state: RwLock<SessionState>,
    listeners: Arc<ListenerRegistry>,
    storage: Arc<dyn SessionStorage>,
    key: String,
    writer: Mutex<Option<mpsc::UnboundedSender<PersistCommand>>>,
    writer_task: Mutex<Option<JoinHandle<()>>>,
    hydrated: AtomicBool,
}

impl SessionStore {
    /// Create an empty store persisting under [`DEFAULT_STORAGE_KEY`].
    ///
    /// Must be called from within a Tokio runtime: the persistence writer
    /// is spawned here.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (sender, handle) = PersistenceWriter::spawn(Arc::clone(&storage), key.clone());

        Self {
            state: RwLock::new(SessionState::default()),
            listeners: Arc::new(ListenerRegistry::default()),
            storage,
            key,
            writer: Mutex::new(Some(sender)),
            writer_task: Mutex::new(Some(handle)),
            hydrated: AtomicBool::new(false),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The signed-in user, if any. Side-effect free.
    pub fn current_user(&self) -> Option<Arc<UserProfile>> {
        self.read_state().user().cloned()
    }

    pub fn is_logged_in(&self) -> bool {
        self.read_state().is_logged_in()
    }

    pub fn snapshot(&self) -> SessionState {
        self.read_state().clone()
    }

    /// Whether [`hydrate`](Self::hydrate) has completed.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::Acquire)
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace the session with a server-confirmed profile.
    ///
    /// A profile that fails validation (no identifier, bad amounts) is
    /// rejected and the session is left as it was.
    #[track_caller]
    pub fn set_user(&self, profile: UserProfile) -> SessionErrorResult<()> {
        profile.validate()?;
        info!("Session set for user {}", profile.id);
        self.apply(SessionAction::Set(profile));
        Ok(())
    }

    /// Shallow-merge `patch` into the current profile.
    ///
    /// Returns `Ok(false)` without side effects when nobody is signed in.
    #[track_caller]
    pub fn update_user(&self, patch: &ProfilePatch) -> SessionErrorResult<bool> {
        patch.validate()?;
        let updated = self.apply(SessionAction::Update(patch.clone()));
        if !updated {
            debug!("Ignoring profile update: no user signed in");
        }
        Ok(updated)
    }

    /// Sign out. The persisted record is erased.
    pub fn clear_user(&self) {
        info!("Session cleared");
        self.apply(SessionAction::Clear);
    }

    /// Returns false when the action was a no-op.
    ///
    /// The write is queued under the state lock, so storage sees mutations
    /// in the same order memory does.
    fn apply(&self, action: SessionAction) -> bool {
        let next = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let Some(next) = state.reduce(action) else {
                return false;
            };
            *state = next.clone();
            self.persist(next.user().cloned());
            next
        };

        self.listeners.notify(&next);
        true
    }

    fn persist(&self, user: Option<Arc<UserProfile>>) {
        let writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let sent = writer
            .as_ref()
            .is_some_and(|sender| sender.send(PersistCommand::Store(user)).is_ok());
        if !sent {
            warn!("Session writer is stopped; change kept in memory only");
        }
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Call `listener` with the user after every mutation that replaces it.
    ///
    /// Comparison is by identity: a `set_user` with an equal profile still
    /// notifies, an update with nobody signed in does not.
    pub fn subscribe<L>(&self, mut listener: L) -> Subscription
    where
        L: FnMut(Option<&UserProfile>) + Send + 'static,
    {
        self.subscribe_with(
            |state| UserIdentity(state.user().cloned()),
            move |selected: &UserIdentity| listener(selected.0.as_deref()),
        )
    }

    /// Call `listener` whenever `selector`'s result changes (by `PartialEq`).
    ///
    /// States older than the last one delivered are skipped, so concurrent
    /// mutators never make a listener go backwards.
    pub fn subscribe_with<T, S, L>(&self, selector: S, mut listener: L) -> Subscription
    where
        T: PartialEq + Send + 'static,
        S: Fn(&SessionState) -> T + Send + 'static,
        L: FnMut(&T) + Send + 'static,
    {
        let (mut last, mut seen_revision) = {
            let state = self.read_state();
            (selector(&state), state.revision())
        };

        self.listeners.register(Box::new(move |state: &SessionState| {
            if state.revision() <= seen_revision {
                return;
            }
            seen_revision = state.revision();

            let next = selector(state);
            if next != last {
                listener(&next);
                last = next;
            }
        }))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Load the persisted session into memory.
    ///
    /// Never fails: unreadable or corrupt records leave the session empty
    /// and are described in the returned [`HydrateOutcome`].
    ///
    /// The stored record only applies to a store nobody has mutated yet. A
    /// mutation made before the call, or while the read is in flight, wins
    /// over the stored record and is what storage ends up holding.
    pub async fn hydrate(&self) -> HydrateOutcome {
        let (user, outcome) = match self.storage.read(&self.key).await {
            Ok(None) => {
                info!("No persisted session under '{}' (first launch)", self.key);
                (None, HydrateOutcome::empty())
            }
            Ok(Some(blob)) => match PersistedSession::decode(&blob) {
                Ok(PersistedSession { user: Some(user), .. }) => {
                    info!("Restored session for user {}", user.id);
                    (Some(user), HydrateOutcome::restored())
                }
                Ok(PersistedSession { user: None, .. }) => {
                    info!("Persisted session is signed out");
                    (None, HydrateOutcome::empty())
                }
                Err(message) => {
                    warn!("Persisted session under '{}' is corrupted: {message}", self.key);
                    (None, HydrateOutcome::corrupted(message))
                }
            },
            Err(e) => {
                warn!("Failed to read persisted session: {e}");
                (None, HydrateOutcome::unreadable(e.to_string()))
            }
        };

        let applied = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            if state.revision() == 0 {
                state
                    .reduce(SessionAction::Restore(user))
                    .map(|next| {
                        *state = next.clone();
                        next
                    })
            } else {
                debug!("Session already changed in memory; keeping it over the stored record");
                None
            }
        };

        self.hydrated.store(true, Ordering::Release);

        match applied {
            Some(next) => {
                self.listeners.notify(&next);
                outcome
            }
            None => HydrateOutcome {
                restored: false,
                ..outcome
            },
        }
    }

    /// Wait until every queued write has reached storage.
    ///
    /// Returns the first persistence failure since the previous flush.
    pub async fn flush(&self) -> SessionErrorResult<()> {
        let (reply, response) = oneshot::channel();
        {
            let writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
            let sender = writer.as_ref().ok_or_else(SessionError::writer_stopped)?;
            sender
                .send(PersistCommand::Flush(reply))
                .map_err(|_| SessionError::writer_stopped())?;
        }
        flush_result(response.await)
    }

    /// Flush pending writes and stop the writer.
    ///
    /// Later mutations still update memory but are no longer persisted.
    pub async fn shutdown(&self) -> SessionErrorResult<()> {
        let flushed = self.flush().await;

        drop(
            self.writer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take(),
        );

        let handle = self
            .writer_task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!("Session writer task ended abnormally: {e}");
            }
        }

        info!("Session store shut down");
        flushed
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .field("logged_in", &self.is_logged_in())
            .field("hydrated", &self.is_hydrated())
            .finish()
    }
}

/// Selected user compared by pointer, so every replacement counts as a change.
struct UserIdentity(Option<Arc<UserProfile>>);

impl PartialEq for UserIdentity {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
