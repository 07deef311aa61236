use crate::SessionState;

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use log::warn;

type Notify = Box<dyn FnMut(&SessionState) + Send>;

/// Process-wide so ids stay distinct across stores.
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    /// Listener ids currently running on this thread.
    static RUNNING: RefCell<Vec<u64>> = const { RefCell::new(Vec::new()) };
}

/// Marks a listener as running on this thread until dropped.
struct RunningGuard(u64);

impl RunningGuard {
    /// `None` when the listener is already running on this thread.
    fn enter(id: u64) -> Option<Self> {
        RUNNING.with_borrow_mut(|running| {
            if running.contains(&id) {
                None
            } else {
                running.push(id);
                Some(Self(id))
            }
        })
    }
}

impl Drop for RunningGuard {
    fn drop(&mut self) {
        RUNNING.with_borrow_mut(|running| running.retain(|id| *id != self.0));
    }
}

struct ListenerSlot {
    id: u64,
    active: AtomicBool,
    notify: Mutex<Notify>,
}

/// Registered store listeners.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    slots: Mutex<Vec<Arc<ListenerSlot>>>,
}

impl ListenerRegistry {
    pub(crate) fn register(self: &Arc<Self>, notify: Notify) -> Subscription {
        let slot = Arc::new(ListenerSlot {
            id: NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed),
            active: AtomicBool::new(true),
            notify: Mutex::new(notify),
        });

        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::clone(&slot));

        Subscription {
            registry: Arc::downgrade(self),
            slot: Some(slot),
        }
    }

    /// Call every active listener with the new state.
    ///
    /// Runs on the caller's thread. The registry lock is not held while
    /// listeners run, so a listener may unsubscribe itself or others. Calls
    /// from different threads into one listener are serialized.
    pub(crate) fn notify(&self, state: &SessionState) {
        let slots: Vec<Arc<ListenerSlot>> = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for slot in slots {
            if !slot.active.load(Ordering::Acquire) {
                continue;
            }
            let Some(_running) = RunningGuard::enter(slot.id) else {
                warn!(
                    "Session listener {} changed the store from inside its callback; \
                     nested notification skipped",
                    slot.id
                );
                continue;
            };
            let mut notify = slot.notify.lock().unwrap_or_else(PoisonError::into_inner);
            // Re-check: an earlier listener may have removed this one
            if slot.active.load(Ordering::Acquire) {
                (*notify)(state);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn remove(&self, id: u64) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|slot| slot.id != id);
    }
}

/// Handle for a registered listener.
///
/// Calling [`unsubscribe`](Self::unsubscribe) or dropping the handle stops
/// all further calls to the listener.
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
pub struct Subscription {
    registry: Weak<ListenerRegistry>,
    slot: Option<Arc<ListenerSlot>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    pub fn is_active(&self) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|slot| slot.active.load(Ordering::Acquire))
    }

    fn detach(&mut self) {
        if let Some(slot) = self.slot.take() {
            slot.active.store(false, Ordering::Release);
            if let Some(registry) = self.registry.upgrade() {
                registry.remove(slot.id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.slot.as_ref().map(|slot| slot.id))
            .field("active", &self.is_active())
            .finish()
    }
}
