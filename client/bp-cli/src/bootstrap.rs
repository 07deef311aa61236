use bp_config::Config;
use bp_core::UserProfile;
use bp_session::{FileStorage, HydrateOutcome, SessionState, SessionStorage, SessionStore};

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

/// Which part of the app to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Nobody is signed in.
    Unauthenticated,
    /// Signed in, but income has not been entered yet.
    Onboarding,
    Authenticated,
}

impl Route {
    pub fn for_user(user: Option<&UserProfile>) -> Self {
        match user {
            None => Route::Unauthenticated,
            Some(user) if user.needs_onboarding() => Route::Onboarding,
            Some(_) => Route::Authenticated,
        }
    }

    pub fn of_state(state: &SessionState) -> Self {
        Self::for_user(state.user().map(Arc::as_ref))
    }

    pub fn of_store(store: &SessionStore) -> Self {
        Self::for_user(store.current_user().as_deref())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::Unauthenticated => "login",
            Route::Onboarding => "onboarding",
            Route::Authenticated => "dashboard",
        };
        f.write_str(name)
    }
}

/// A hydrated store and where to send the user first.
pub struct Bootstrap {
    pub store: Arc<SessionStore>,
    pub route: Route,
    pub hydrate: HydrateOutcome,
}

/// File storage rooted at the configured storage directory.
pub fn storage_from_config(config: &Config, config_dir: &Path) -> Arc<dyn SessionStorage> {
    Arc::new(FileStorage::new(config.storage_dir(config_dir)))
}

/// Create the store, wait for hydration, then pick the first route.
///
/// Routing only ever happens after `hydrate` has resolved, so a returning
/// user is never bounced to the login screen.
pub async fn start(storage: Arc<dyn SessionStorage>, key: &str) -> Bootstrap {
    let store = Arc::new(SessionStore::with_key(storage, key));
    let hydrate = store.hydrate().await;

    if let Some(problem) = hydrate
        .corruption_error
        .as_deref()
        .or(hydrate.read_error.as_deref())
    {
        warn!("Starting signed out: {problem}");
    }

    let route = Route::of_store(&store);
    info!("Initial route: {route}");

    Bootstrap {
        store,
        route,
        hydrate,
    }
}
