//! REST client for the resource server.
//!
//! Every protected call reads the token from the `SessionStore` at call time
//! and sends it as the raw `Authorization` header value, which is what the
//! server parses. There is no retry, refresh, or timeout policy beyond the
//! transport's own.
//!
//! ERROR HANDLING
//! ==============
//! Responses are classified into success, authentication failure, and
//! transient failure. Only `401`/`403` (or having no token to send) count as
//! authentication failures; network errors, other statuses, and undecodable
//! bodies are transient and carry their cause for logging.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::http::{BrowserTransport, HttpRequest, HttpResponse, Method, Transport};
use super::types::{Credentials, ErrorBody, LoginResponse, Profile, RegisterResponse, UserRecord, WarehouseManager};
use crate::state::session::{Role, SessionStore};

pub const PROFILE_ENDPOINT: &str = "/profile";
pub const USERS_ENDPOINT: &str = "/admin/users";
pub const WAREHOUSE_MANAGERS_ENDPOINT: &str = "/admin/warehousemanagers";
pub const LOGIN_ENDPOINT: &str = "/login";
pub const REGISTER_ENDPOINT: &str = "/register";

/// Coarse failure class driving view behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Not authenticated (or no longer): the session is unusable.
    Auth,
    /// Anything else; the session may still be fine.
    Transient,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("no session token stored")]
    MissingToken,
    #[error("authentication rejected (status {status})")]
    Unauthorized { status: u16, message: Option<String> },
    #[error("request failed (status {status})")]
    Status { status: u16, message: Option<String> },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingToken | Self::Unauthorized { .. } => FailureKind::Auth,
            Self::Status { .. } | Self::Transport(_) | Self::Decode(_) => FailureKind::Transient,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        self.kind() == FailureKind::Auth
    }

    /// Whether the stored token itself is unusable. A `403` rejects the
    /// role, not the token, so it does not revoke the session.
    pub fn revokes_session(&self) -> bool {
        matches!(self, Self::MissingToken | Self::Unauthorized { status: 401, .. })
    }

    /// Human-readable `error` field from the server, when one was sent.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. } | Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Classify a completed exchange: 2xx yields the body, 401/403 are
/// authentication failures, everything else is a status failure.
pub fn classify(response: HttpResponse) -> Result<String, ApiError> {
    if response.is_success() {
        return Ok(response.body);
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body).ok().map(|b| b.error);
    match response.status {
        401 | 403 => Err(ApiError::Unauthorized { status: response.status, message }),
        status => Err(ApiError::Status { status, message }),
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// API client bound to a base URL, a session store, and a transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    base_url: String,
    session: SessionStore,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, session: SessionStore, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, session, transport }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issue one request and decode a 2xx body as `R`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure; see [`ApiError::kind`].
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        credential: Option<&str>,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        let request = HttpRequest {
            method,
            url: self.url(path),
            authorization: credential.map(str::to_owned),
            body,
        };
        let response = self.transport.send(request).await.map_err(ApiError::Transport)?;
        let status = response.status;
        let body = classify(response)?;
        log::debug!("{method:?} {path} -> {status}");
        decode(&body)
    }

    /// `GET` a protected endpoint with the stored token.
    ///
    /// # Errors
    ///
    /// `MissingToken` without sending anything when no token is stored;
    /// otherwise as [`ApiClient::request`].
    pub async fn get_protected<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let token = self.session.token().ok_or(ApiError::MissingToken)?;
        self.request(Method::Get, path, Some(&token), None).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_protected`].
    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.get_protected(PROFILE_ENDPOINT).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_protected`].
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.get_protected(USERS_ENDPOINT).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_protected`].
    pub async fn fetch_warehouse_managers(&self) -> Result<Vec<WarehouseManager>, ApiError> {
        self.get_protected(WAREHOUSE_MANAGERS_ENDPOINT).await
    }

    /// Exchange credentials for a token and store the resulting session.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for rejected credentials; the stored session is left
    /// untouched on any failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<Role, ApiError> {
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response: LoginResponse = self.request(Method::Post, LOGIN_ENDPOINT, None, Some(body)).await?;
        let role = Role::from_claim(&response.role);
        self.session.set(&response.token, role);
        log::info!("signed in as {} (role={role})", credentials.username);
        Ok(role)
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// `Status` with the server's message for rejected registrations.
    pub async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError> {
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::Post, REGISTER_ENDPOINT, None, Some(body)).await
    }
}
