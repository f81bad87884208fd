//! HTTP clients for the remote recruitment API.
//!
//! Two base clients exist: `core` for vacancies, applications, profiles and
//! recommendations, and `auth` for login/registration. Both attach the
//! persisted token as a bearer credential. Response bodies are opaque JSON
//! to this layer. A 401 from either client clears the session; callers then
//! redirect to the login route.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ApiConfig, AppError, AuthResponse, LoginRequest, RegisterRequest, Role};
use validator::Validate;

use crate::provider::SessionProvider;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionProvider,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, session: SessionProvider) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionProvider {
        &self.session
    }

    /// Join `path` onto the base URL with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "API request could not be sent");
            AppError::network(e.to_string())
        })?;

        let status = response.status();
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        if status.is_success() {
            let body = if body.trim().is_empty() { "null" } else { body.as_str() };
            return serde_json::from_str(body).map_err(|e| {
                tracing::warn!(error = %e, url = %url, "Unexpected API response body");
                AppError::internal(format!("Unexpected response body: {e}"))
            });
        }

        let error = AppError::from_response(status.as_u16(), &body);
        if error.is_unauthorized() {
            tracing::info!(url = %url, "API rejected the session token, clearing it");
            self.session.clear();
        } else {
            tracing::warn!(status = status.as_u16(), url = %url, error = %error, "API request failed");
        }
        Err(error)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(self.request(Method::DELETE, path)).await
    }
}

/// Client for the authentication resources. Stores the issued token in the
/// session on success.
#[derive(Clone, Debug)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Sign in and return the role carried by the new token.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<Role, AppError> {
        request.validate()?;
        let response: AuthResponse = self.client.post_json("/login", request).await?;
        Ok(self.store(&response))
    }

    /// Create an account and sign in with the returned token.
    #[tracing::instrument(skip(self, request), fields(email = %request.email, role = %request.role))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<Role, AppError> {
        request.check()?;
        let response: AuthResponse = self.client.post_json("/register", request).await?;
        Ok(self.store(&response))
    }

    fn store(&self, response: &AuthResponse) -> Role {
        let session = self.client.session();
        session.set_token(&response.token);
        let role = session.resolve_role();
        tracing::info!(role = %role, "Signed in");
        role
    }
}

/// The two preconfigured clients, sharing one connection pool and session.
#[derive(Clone, Debug)]
pub struct ApiClients {
    pub core: ApiClient,
    pub auth: AuthApi,
}

impl ApiClients {
    pub fn new(config: &ApiConfig, session: SessionProvider) -> Self {
        let http = reqwest::Client::new();
        Self {
            core: ApiClient::new(http.clone(), config.core_base_url.clone(), session.clone()),
            auth: AuthApi::new(ApiClient::new(http, config.auth_base_url.clone(), session)),
        }
    }
}

impl PartialEq for ApiClients {
    fn eq(&self, other: &Self) -> bool {
        self.core.base_url == other.core.base_url
            && self.auth.client.base_url == other.auth.client.base_url
            && self.core.session == other.core.session
    }
}
