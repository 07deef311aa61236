use crate::bootstrap::Route;
use crate::{FlowError, FlowResult};

use bp_api::ApiClient;
use bp_core::{Credentials, OnboardingDetails, UserProfile};
use bp_session::SessionStore;

use std::sync::Arc;

use log::info;

/// Screens' actions against the backend and the session store.
///
/// The store only changes after the backend confirms: every failure path
/// leaves the session exactly as it was.
pub struct AuthFlow {
    api: ApiClient,
    store: Arc<SessionStore>,
}

impl AuthFlow {
    pub fn new(api: ApiClient, store: Arc<SessionStore>) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub async fn login(&self, email: &str, password: &str) -> FlowResult<Route> {
        let credentials = Credentials::for_login(email, password)?;
        let profile = self
            .api
            .login(&credentials.email, &credentials.password)
            .await?;
        self.accept(profile)
    }

    pub async fn sign_up(&self, email: &str, password: &str, confirm: &str) -> FlowResult<Route> {
        let credentials = Credentials::for_sign_up(email, password, confirm)?;
        let profile = self
            .api
            .sign_up(&credentials.email, &credentials.password)
            .await?;
        self.accept(profile)
    }

    /// Save name and income for the signed-in user.
    pub async fn complete_onboarding(&self, name: &str, income: f64) -> FlowResult<Route> {
        let user = self
            .store
            .current_user()
            .ok_or_else(FlowError::not_signed_in)?;
        let details = OnboardingDetails::new(name, income)?;

        let profile = self
            .api
            .update_profile(&user.id, &details.to_patch())
            .await?;
        self.accept(profile)
    }

    pub fn logout(&self) -> Route {
        self.store.clear_user();
        Route::Unauthenticated
    }

    fn accept(&self, profile: UserProfile) -> FlowResult<Route> {
        let route = Route::for_user(Some(&profile));
        info!("Signed in as {} ({})", profile.display_name(), profile.id);
        self.store.set_user(profile)?;
        Ok(route)
    }
}
