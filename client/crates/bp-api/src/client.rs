use crate::{ApiResult, ClientError};

use bp_core::{ProfilePatch, UserProfile};

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Body the backend sends instead of a profile when signing up with a
/// registered email.
pub const EMAIL_CONFLICT_MESSAGE: &str = "Email already exists";

/// HTTP client for the BudgetPay REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

/// Status and decoded body of a completed request.
struct RawResponse {
    status: StatusCode,
    body: Value,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send the request and decode the body. An empty body decodes to `null`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ApiResult<RawResponse> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                // Error pages are often plain text
                Err(e) if !status.is_success() => {
                    debug!("Non-JSON error body ({status}): {e}");
                    Value::String(text)
                }
                Err(e) => return Err(e.into()),
            }
        };

        debug!("Backend responded {status}");
        Ok(RawResponse { status, body })
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Exchange credentials for the stored profile.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<UserProfile> {
        let body = CredentialsRequest { email, password };
        let req = self.request(Method::POST, "/user/login").json(&body);
        let RawResponse { status, body } = self.execute(req).await?;

        if matches!(
            status,
            StatusCode::BAD_REQUEST
                | StatusCode::UNAUTHORIZED
                | StatusCode::FORBIDDEN
                | StatusCode::NOT_FOUND
        ) {
            return Err(ClientError::invalid_credentials());
        }
        if !status.is_success() {
            return Err(rejection(status, &body));
        }
        if body.is_null() {
            return Err(ClientError::invalid_credentials());
        }

        parse_profile(body)
    }

    /// Register a new account and return its profile.
    pub async fn sign_up(&self, email: &str, password: &str) -> ApiResult<UserProfile> {
        let body = CredentialsRequest { email, password };
        let req = self.request(Method::POST, "/user/signup").json(&body);
        let RawResponse { status, body } = self.execute(req).await?;

        if status == StatusCode::CONFLICT || is_conflict_message(&body) {
            return Err(ClientError::email_conflict());
        }
        if !status.is_success() {
            return Err(rejection(status, &body));
        }

        match body {
            Value::Null => Err(ClientError::rejected(status.as_u16(), "empty response")),
            Value::String(message) => Err(ClientError::rejected(status.as_u16(), message)),
            profile => parse_profile(profile),
        }
    }

    /// Apply `patch` to the stored profile and return the updated profile.
    pub async fn update_profile(
        &self,
        user_id: &str,
        patch: &ProfilePatch,
    ) -> ApiResult<UserProfile> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct UpdateRequest<'a> {
            user_id: &'a str,
            data: &'a ProfilePatch,
        }

        let body = UpdateRequest {
            user_id,
            data: patch,
        };
        let req = self.request(Method::POST, "/user/update").json(&body);
        let RawResponse { status, mut body } = self.execute(req).await?;

        if !status.is_success() {
            return Err(rejection(status, &body));
        }

        match body.get_mut("user").map(Value::take) {
            Some(user) if !user.is_null() => parse_profile(user),
            _ => Err(ClientError::rejected(
                status.as_u16(),
                "response has no user",
            )),
        }
    }
}

#[derive(Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

fn is_conflict_message(body: &Value) -> bool {
    body.as_str()
        .is_some_and(|message| message.trim() == EMAIL_CONFLICT_MESSAGE)
}

/// Decode and validate a profile. Never hands back a profile without an id.
fn parse_profile(body: Value) -> ApiResult<UserProfile> {
    let profile: UserProfile = serde_json::from_value(body)
        .map_err(|e| ClientError::malformed_profile(e.to_string()))?;

    if let Err(e) = profile.validate() {
        warn!("Backend returned an unusable profile: {e}");
        return Err(ClientError::malformed_profile(e.to_string()));
    }

    Ok(profile)
}

fn rejection(status: StatusCode, body: &Value) -> ClientError {
    let message = match body {
        Value::String(message) => message.clone(),
        Value::Object(fields) => fields
            .get("message")
            .or_else(|| fields.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };
    ClientError::rejected(status.as_u16(), message)
}
