use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use session::{ApiClients, SessionProvider};
use shared_types::ApiConfig;
use std::sync::{Arc, Mutex};

/// Password the mock API accepts for every account.
pub const PASSWORD: &str = "correct horse";

/// Bearer token the mock API treats as revoked.
pub const REVOKED_TOKEN: &str = "revoked.token.value";

/// A request as seen by the mock API.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// A running mock of the remote recruitment API.
pub struct MockApi {
    pub base_url: String,
    state: MockState,
}

impl MockApi {
    /// Core and auth base URLs pointing at this server.
    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            core_base_url: format!("{}/api", self.base_url),
            auth_base_url: format!("{}/api/auth", self.base_url),
        }
    }

    pub fn clients(&self, session: SessionProvider) -> ApiClients {
        ApiClients::new(&self.config(), session)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

/// Compact token whose payload is `claims`. Header and signature are
/// placeholders; nothing on the client verifies them.
pub fn token_with(claims: Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.signature")
}

pub fn token_for_role(role: &str) -> String {
    token_with(json!({ "id": "42", "role": role, "email": format!("{role}@example.com") }))
}

/// Start the mock API on an ephemeral port.
pub async fn mock_api() -> MockApi {
    let state = MockState::default();
    let app = Router::new().fallback(handle).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("Mock API has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock API stopped");
    });

    MockApi {
        base_url: format!("http://{addr}"),
        state,
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        authorization: authorization.clone(),
        body: body.clone(),
    });

    let bearer = authorization
        .as_deref()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);

    match (method, uri.path()) {
        (Method::POST, "/api/auth/login") => {
            if body["password"] != PASSWORD {
                return error(StatusCode::UNAUTHORIZED, "Invalid email or password");
            }
            let email = body["email"].as_str().unwrap_or_default();
            let role = email.split('@').next().unwrap_or("user");
            Json(json!({ "token": token_for_role(role), "message": "Logged in" })).into_response()
        }
        (Method::POST, "/api/auth/register") => {
            let role = body["role"].as_str().unwrap_or("user");
            (
                StatusCode::CREATED,
                Json(json!({ "accessToken": token_for_role(role) })),
            )
                .into_response()
        }
        (_, path) if path.starts_with("/api/auth") => error(StatusCode::NOT_FOUND, "Not found"),
        (method, path) => {
            match bearer.as_deref() {
                None => return error(StatusCode::UNAUTHORIZED, "No token provided"),
                Some(REVOKED_TOKEN) => return error(StatusCode::UNAUTHORIZED, "Token expired"),
                Some(_) => {}
            }
            match (method, path) {
                (Method::GET, "/api/jobs") => Json(json!([
                    { "_id": "j1", "title": "Backend Engineer", "status": "open" },
                    { "_id": "j2", "title": "Product Designer", "status": "closed" }
                ]))
                .into_response(),
                (Method::POST, "/api/jobs") => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "message": "Validation failed",
                        "errors": { "title": "Title already used" }
                    })),
                )
                    .into_response(),
                (Method::DELETE, "/api/jobs/j1") => StatusCode::NO_CONTENT.into_response(),
                (Method::GET, "/api/admin/stats") => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response()
                }
                _ => error(StatusCode::NOT_FOUND, "Not found"),
            }
        }
    }
}
