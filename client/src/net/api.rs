//! REST client for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! An `ApiClient` is built per call site from the session context, so the
//! bearer token always comes from the one `SessionState` and never from ad
//! hoc storage reads. Each method issues exactly one request; there are no
//! retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AccountingRule, CaptchaChallenge, ChargeUpdate, DynamicRoute, LoginRequest, LoginResponse, NewAccount, NewRole,
    PhonesEnvelope, Role, RoleChange, RolesEnvelope, RulesEnvelope, SmsBatch, SmsReceipt, User, UsersEnvelope,
};
use crate::state::session::SessionState;

/// Backend base URL baked in at compile time. Defaults to the host's
/// same-origin pass-through.
pub const API_BASE_URL: &str = match option_env!("CONSOLE_API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, token: None }
    }

    /// Client for the compiled-in base URL carrying the session's token.
    pub fn for_session(session: &SessionState) -> Self {
        Self::new(API_BASE_URL).with_token(session.bearer())
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_owned);
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value, when the session holds a token.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(|t| format!("Bearer {t}"))
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or credentials are rejected.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.request(Verb::Post, "/login", Some(request)).await
    }

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    pub async fn register(&self, account: &NewAccount) -> Result<(), ApiError> {
        self.send(Verb::Post, "/register", Some(account)).await
    }

    /// `POST /users` (admin).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    pub async fn create_user(&self, account: &NewAccount) -> Result<(), ApiError> {
        self.send(Verb::Post, "/users", Some(account)).await
    }

    /// `GET /admin`: every user with its role.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is not a user list.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let body: UsersEnvelope = self.request(Verb::Get, "/admin", None::<&()>).await?;
        Ok(body.users)
    }

    /// `GET /roles`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is not a role list.
    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        let body: RolesEnvelope = self.request(Verb::Get, "/roles", None::<&()>).await?;
        Ok(body.roles)
    }

    /// `POST /roles`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    pub async fn create_role(&self, role: &NewRole) -> Result<(), ApiError> {
        self.send(Verb::Post, "/roles", Some(role)).await
    }

    /// `PUT /users/{username}/role`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    pub async fn change_role(&self, username: &str, change: &RoleChange) -> Result<(), ApiError> {
        self.send(Verb::Put, &role_path(username), Some(change)).await
    }

    /// `PUT /accounting/users/{username}/charge`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    pub async fn set_charge(&self, username: &str, update: &ChargeUpdate) -> Result<(), ApiError> {
        self.send(Verb::Put, &charge_path(username), Some(update)).await
    }

    /// `GET /accounting/rules`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is not a rule list.
    pub async fn list_rules(&self) -> Result<Vec<AccountingRule>, ApiError> {
        let body: RulesEnvelope = self.request(Verb::Get, "/accounting/rules", None::<&()>).await?;
        Ok(body.rules)
    }

    /// `POST /admin/customendpoints`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    pub async fn create_dynamic_route(&self, route: &DynamicRoute) -> Result<(), ApiError> {
        self.send(Verb::Post, "/admin/customendpoints", Some(route)).await
    }

    /// `POST /sms/sendsms`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    pub async fn send_sms(&self, batch: &SmsBatch) -> Result<SmsReceipt, ApiError> {
        self.request(Verb::Post, "/sms/sendsms", Some(batch)).await
    }

    /// `GET /captcha/new`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body has no captcha ID.
    pub async fn new_captcha(&self) -> Result<CaptchaChallenge, ApiError> {
        self.request(Verb::Get, "/captcha/new", None::<&()>).await
    }

    /// Image URL for a captcha challenge, used directly as an `<img src>`.
    pub fn captcha_image_url(&self, captcha_id: &str) -> String {
        self.url(&format!("/captcha/image/{}", urlencoding::encode(captcha_id)))
    }

    /// `GET /user/phones`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is not a phone list.
    pub async fn list_phones(&self) -> Result<Vec<String>, ApiError> {
        let body: PhonesEnvelope = self.request(Verb::Get, "/user/phones", None::<&()>).await?;
        Ok(body.phones)
    }

    /// Issue a request and ignore the success body.
    async fn send<B>(&self, verb: Verb, path: &str, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        #[cfg(feature = "hydrate")]
        {
            self.dispatch(verb, path, body).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// Issue a request and decode the JSON success body.
    async fn request<B, R>(&self, verb: Verb, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.dispatch(verb, path, body).await?;
            resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch<B>(&self, verb: Verb, path: &str, body: Option<&B>) -> Result<gloo_net::http::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
        };
        let mut builder = RequestBuilder::new(&self.url(path)).method(method);
        if let Some(auth) = self.authorization() {
            builder = builder.header("Authorization", &auth);
        }
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let message = resp
            .json::<super::types::ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.error);
        Err(ApiError::Status { status: resp.status(), message })
    }
}

fn role_path(username: &str) -> String {
    format!("/users/{}/role", urlencoding::encode(username))
}

fn charge_path(username: &str) -> String {
    format!("/accounting/users/{}/charge", urlencoding::encode(username))
}
