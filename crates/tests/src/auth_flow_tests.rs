use pretty_assertions::assert_eq;
use session::{FileTokenStore, NavGuard, SessionProvider, TokenStore};
use shared_types::{AppErrorKind, LoginRequest, RegisterRequest, Role};

use crate::common;

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_persists_token_and_returns_role() {
    let api = common::mock_api().await;
    let session = SessionProvider::in_memory();
    let clients = api.clients(session.clone());

    let role = clients
        .auth
        .login(&login("employer@example.com", common::PASSWORD))
        .await
        .unwrap();
    assert_eq!(role, Role::Employer);
    assert!(session.is_authenticated());
    assert_eq!(session.claims().and_then(|c| c.role), Some("employer".to_string()));

    let requests = api.requests();
    assert_eq!(requests[0].path, "/api/auth/login");
    assert_eq!(requests[0].body["email"], "employer@example.com");
}

#[tokio::test]
async fn test_failed_login_leaves_session_empty() {
    let api = common::mock_api().await;
    let session = SessionProvider::in_memory();
    let clients = api.clients(session.clone());

    let err = clients
        .auth
        .login(&login("admin@example.com", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.friendly_message(), "Invalid email or password");
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn test_invalid_login_form_is_rejected_before_sending() {
    let api = common::mock_api().await;
    let clients = api.clients(SessionProvider::in_memory());

    let err = clients.auth.login(&login("nope", "")).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert_eq!(api.request_count(), 0);
}

#[tokio::test]
async fn test_register_signs_in_with_issued_token() {
    let api = common::mock_api().await;
    let session = SessionProvider::in_memory();
    let clients = api.clients(session.clone());

    let request = RegisterRequest {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        password: common::PASSWORD.to_string(),
        role: Role::Applicant,
    };
    let role = clients.auth.register(&request).await.unwrap();
    assert_eq!(role, Role::Applicant);
    assert!(session.is_authenticated());
    assert_eq!(api.requests()[0].body["role"], "user");
}

#[tokio::test]
async fn test_register_refuses_admin_accounts_locally() {
    let api = common::mock_api().await;
    let clients = api.clients(SessionProvider::in_memory());

    let request = RegisterRequest {
        name: "Mallory".to_string(),
        email: "mallory@example.com".to_string(),
        password: common::PASSWORD.to_string(),
        role: Role::Admin,
    };
    let err = clients.auth.register(&request).await.unwrap_err();
    assert!(err.field_errors.contains_key("role"));
    assert_eq!(api.request_count(), 0);
}

#[tokio::test]
async fn test_login_then_guard_then_logout_with_file_storage() {
    let dir = std::env::temp_dir().join(format!("portal-auth-flow-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let store = FileTokenStore::new(dir.join("storage.json"), "token");
    let session = SessionProvider::new(store.clone());

    let api = common::mock_api().await;
    let clients = api.clients(session.clone());
    clients
        .auth
        .login(&login("admin@example.com", common::PASSWORD))
        .await
        .unwrap();

    // A fresh mount reads what the login persisted.
    let mut guard = NavGuard::new("/login");
    assert_eq!(guard.resolve_role(&session), Role::Admin);
    assert!(guard.is_authenticated());

    assert_eq!(guard.logout(&session), "/login");
    assert_eq!(store.load().unwrap(), None);

    let _ = std::fs::remove_dir_all(&dir);
}
