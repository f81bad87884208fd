use pretty_assertions::assert_eq;
use serde_json::Value;
use session::SessionProvider;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_bearer_token_is_attached_to_core_requests() {
    let api = common::mock_api().await;
    let session = SessionProvider::in_memory();
    let token = common::token_for_role("employer");
    session.set_token(&token);
    let clients = api.clients(session);

    let jobs: Value = clients.core.get_json("/jobs").await.unwrap();
    assert_eq!(jobs.as_array().map(Vec::len), Some(2));

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/jobs");
    assert_eq!(requests[0].authorization, Some(format!("Bearer {token}")));
}

#[tokio::test]
async fn test_anonymous_requests_carry_no_authorization_header() {
    let api = common::mock_api().await;
    let clients = api.clients(SessionProvider::in_memory());

    let err = clients.core.get_json::<Value>("/jobs").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "No token provided");
    assert_eq!(api.requests()[0].authorization, None);
}

#[tokio::test]
async fn test_unauthorized_response_clears_the_session() {
    let api = common::mock_api().await;
    let session = SessionProvider::in_memory();
    session.set_token(common::REVOKED_TOKEN);
    let clients = api.clients(session.clone());

    let err = clients.core.get_json::<Value>("/jobs").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Token expired");
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_validation_errors_keep_field_messages_and_token() {
    let api = common::mock_api().await;
    let session = SessionProvider::in_memory();
    session.set_token(&common::token_for_role("employer"));
    let clients = api.clients(session.clone());

    let body = serde_json::json!({ "title": "Backend Engineer" });
    let err = clients
        .core
        .post_json::<_, Value>("/jobs", &body)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors.get("title").map(String::as_str), Some("Title already used"));
    assert!(session.is_authenticated());
    assert_eq!(api.requests()[0].body["title"], "Backend Engineer");
}

#[tokio::test]
async fn test_plain_text_server_error_becomes_message() {
    let api = common::mock_api().await;
    let session = SessionProvider::in_memory();
    session.set_token(&common::token_for_role("admin"));
    let clients = api.clients(session);

    let err = clients.core.get_json::<Value>("/admin/stats").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "database unavailable");
    assert_eq!(err.friendly_message(), "Something went wrong. Please try again.");
}

#[tokio::test]
async fn test_empty_success_body_decodes_as_null() {
    let api = common::mock_api().await;
    let session = SessionProvider::in_memory();
    session.set_token(&common::token_for_role("admin"));
    let clients = api.clients(session);

    let deleted: Option<Value> = clients.core.delete("/jobs/j1").await.unwrap();
    assert_eq!(deleted, None);
}

#[tokio::test]
async fn test_unreachable_api_is_a_network_error() {
    let config = shared_types::ApiConfig {
        core_base_url: "http://127.0.0.1:9/api".to_string(),
        auth_base_url: "http://127.0.0.1:9/api/auth".to_string(),
    };
    let session = SessionProvider::in_memory();
    session.set_token(&common::token_for_role("user"));
    let clients = session::ApiClients::new(&config, session.clone());

    let err = clients.core.get_json::<Value>("/jobs").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    // Only a 401 clears the session.
    assert!(session.is_authenticated());
}
