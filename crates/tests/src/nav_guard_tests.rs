use pretty_assertions::assert_eq;
use serde_json::json;
use session::{decode_claims, is_active, MemoryTokenStore, NavGuard, NavPhase, SessionProvider};
use shared_types::{menu_for, Role};

use crate::common;

fn menu_paths(guard: &NavGuard) -> Vec<&'static str> {
    guard
        .menu()
        .unwrap_or_default()
        .iter()
        .map(|item| item.path)
        .collect()
}

fn resolved(token: Option<&str>) -> NavGuard {
    let session = match token {
        Some(token) => SessionProvider::new(MemoryTokenStore::with_token(token)),
        None => SessionProvider::in_memory(),
    };
    let mut guard = NavGuard::new("/login");
    guard.resolve_role(&session);
    guard
}

#[test]
fn test_admin_token_scenario_renders_admin_menu() {
    let payload = base64_standard(r#"{"role":"admin","id":"1"}"#);
    let token = format!("x.{payload}.y");

    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role.as_deref(), Some("admin"));
    assert_eq!(claims.id.map(|id| id.to_string()), Some("1".to_string()));

    let guard = resolved(Some(&token));
    assert_eq!(guard.role(), Some(Role::Admin));
    assert_eq!(
        menu_paths(&guard),
        vec![
            "/admin/dashboard",
            "/admin/users",
            "/admin/jobs",
            "/admin/applications"
        ]
    );
}

#[tokio::test]
async fn test_no_token_scenario_resolves_without_network() {
    let api = common::mock_api().await;
    let session = SessionProvider::in_memory();
    let _clients = api.clients(session.clone());

    let mut guard = NavGuard::new("/login");
    assert_eq!(guard.phase(), NavPhase::Unresolved);
    assert_eq!(guard.menu(), None);

    assert_eq!(guard.resolve_role(&session), Role::Applicant);
    assert_eq!(
        guard.phase(),
        NavPhase::Resolved {
            role: Role::Applicant,
            authenticated: false
        }
    );
    assert_eq!(guard.menu(), Some(menu_for(Role::Applicant)));
    assert_eq!(api.request_count(), 0);
}

#[test]
fn test_malformed_tokens_resolve_to_applicant() {
    let not_json = format!("a.{}.c", base64_standard("not json"));
    let array = format!("a.{}.c", base64_standard("[1,2]"));
    let cases = [
        "",
        "   ",
        "only-one-segment",
        "two.segments",
        "a.b.c.d",
        "a.***.c",
        not_json.as_str(),
        array.as_str(),
    ];
    for token in cases {
        let guard = resolved(Some(token));
        assert_eq!(guard.role(), Some(Role::Applicant), "token {token:?}");
        assert_eq!(menu_paths(&guard), menu_paths(&resolved(None)), "token {token:?}");
    }
}

#[test]
fn test_role_claim_selects_matching_menu() {
    let cases = [
        (json!({ "role": "admin" }), Role::Admin),
        (json!({ "role": "employer" }), Role::Employer),
        (json!({ "role": "user" }), Role::Applicant),
        (json!({ "role": "recruiter" }), Role::Applicant),
        (json!({ "role": 7 }), Role::Applicant),
        (json!({ "id": "no-role" }), Role::Applicant),
    ];
    for (claims, expected) in cases {
        let token = common::token_with(claims.clone());
        let guard = resolved(Some(&token));
        assert_eq!(guard.role(), Some(expected), "claims {claims}");
        assert_eq!(guard.menu(), Some(menu_for(expected)), "claims {claims}");
        assert!(guard.is_authenticated());
    }
}

#[test]
fn test_uninterpreted_claims_keep_the_role_menu() {
    let cases = [
        (json!({ "sub": "1", "id": "1", "role": "admin" }), Role::Admin),
        (json!({ "id": "1", "role": "admin", "exp": 1_700_000_000.5 }), Role::Admin),
        (json!({ "id": { "$oid": "abc" }, "role": "employer" }), Role::Employer),
        (json!({ "_id": 12, "sub": "12", "role": "employer", "iat": "now" }), Role::Employer),
        (json!({ "role": "admin", "permissions": { "users": ["read"] } }), Role::Admin),
    ];
    for (claims, expected) in cases {
        let token = common::token_with(claims.clone());
        let decoded = decode_claims(&token);
        assert_eq!(decoded.map(|c| c.role()), Some(expected), "claims {claims}");

        let guard = resolved(Some(&token));
        assert_eq!(guard.menu(), Some(menu_for(expected)), "claims {claims}");
    }
}

#[test]
fn test_listing_paths_only_match_exactly() {
    assert!(is_active("/employer/jobs", "/employer/jobs"));
    assert!(!is_active("/employer/jobs/post", "/employer/jobs"));
    assert!(!is_active("/employer/jobs/42", "/employer/jobs"));
    assert!(is_active("/employer/jobs/post", "/employer/jobs/post"));
    assert!(!is_active("/admin/jobs/9", "/admin/jobs"));
}

#[test]
fn test_other_entries_match_sub_paths() {
    assert!(is_active("/applicant/profile", "/applicant/profile"));
    assert!(is_active("/applicant/profile/edit", "/applicant/profile"));
    assert!(is_active("/applicant/jobs/3", "/applicant/jobs"));
    assert!(!is_active("/applicant/profile-old", "/applicant/profile"));
}

#[test]
fn test_logout_removes_token_and_defaults_next_resolution() {
    let session = SessionProvider::new(MemoryTokenStore::with_token(common::token_for_role(
        "employer",
    )));
    let mut guard = NavGuard::new("/login");
    assert_eq!(guard.resolve_role(&session), Role::Employer);
    guard.toggle_open();

    assert_eq!(guard.logout(&session), "/login");
    assert_eq!(session.token(), None);
    assert!(!guard.is_open());
    assert_eq!(guard.phase(), NavPhase::Unresolved);

    assert_eq!(guard.resolve_role(&session), Role::Applicant);
    assert!(!guard.is_authenticated());
}

#[test]
fn test_toggle_open_leaves_role_untouched() {
    let mut guard = resolved(Some(&common::token_for_role("admin")));
    guard.toggle_open();
    assert!(guard.is_open());
    assert_eq!(guard.role(), Some(Role::Admin));
    guard.toggle_open();
    assert!(!guard.is_open());
    assert_eq!(guard.role(), Some(Role::Admin));
}

#[test]
fn test_role_is_resolved_once_per_mount() {
    let session = SessionProvider::new(MemoryTokenStore::with_token(common::token_for_role(
        "employer",
    )));
    let mut guard = NavGuard::new("/login");
    guard.resolve_role(&session);

    // A later login elsewhere doesn't change this mount's menu.
    session.set_token(&common::token_for_role("admin"));
    assert_eq!(guard.resolve_role(&session), Role::Employer);

    let mut remounted = NavGuard::new("/login");
    assert_eq!(remounted.resolve_role(&session), Role::Admin);
}

fn base64_standard(text: &str) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(text)
}
