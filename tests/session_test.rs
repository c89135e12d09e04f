//! Session manager transitions against a mock backend

mod common;

use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, user_json};
use gradpath::auth::token_store::{MemoryTokenStore, TokenStore};
use gradpath::{Gate, Navigator, Route, SessionManager, SessionState};

#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

type Harness = (SessionManager, Arc<MemoryTokenStore>, Arc<RecordingNavigator>);

fn session_for(server: &MockServer, token: Option<&str>) -> Harness {
    let (client, store) = client_for(server, token);
    let nav = Arc::new(RecordingNavigator::default());
    (SessionManager::new(client, nav.clone()), store, nav)
}

#[tokio::test]
async fn test_resolve_without_token_skips_identity_check() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(0)
        .mount(&server)
        .await;

    let (session, _, nav) = session_for(&server, None);
    assert_eq!(session.resolve().await, SessionState::Anonymous);
    assert_eq!(session.gate(), Gate::Redirect(Route::Login));
    assert!(nav.routes().is_empty());
}

#[tokio::test]
async fn test_resolve_with_valid_token_authenticates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer stored"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let (session, store, _) = session_for(&server, Some("stored"));
    match session.resolve().await {
        SessionState::Authenticated(user) => assert_eq!(user.email, "ada@example.com"),
        other => panic!("expected authenticated, got {:?}", other),
    }
    assert!(!session.is_loading());
    assert_eq!(store.load().unwrap().as_deref(), Some("stored"));
}

#[tokio::test]
async fn test_resolve_with_rejected_token_clears_it() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Could not validate credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (session, store, _) = session_for(&server, Some("expired"));
    assert_eq!(session.resolve().await, SessionState::Anonymous);
    assert!(store.load().unwrap().is_none());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn test_login_stores_token_and_navigates_to_dashboard() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "hunter22"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok123",
            "user": user_json()
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let (session, store, nav) = session_for(&server, None);
    session.resolve().await;

    let user = session
        .login("ada@example.com", "hunter22")
        .await
        .expect("login should succeed");
    assert_eq!(user.full_name, "Ada Lovelace");
    assert_eq!(store.load().unwrap().as_deref(), Some("tok123"));
    assert_eq!(nav.routes(), vec![Route::Dashboard]);
    assert!(matches!(session.gate(), Gate::Granted(_)));

    // Later requests carry the new token
    session.api().auth().me().await.expect("me should succeed");
}

#[tokio::test]
async fn test_failed_login_leaves_state_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect email or password"})),
        )
        .mount(&server)
        .await;

    let (session, store, nav) = session_for(&server, None);
    session.resolve().await;

    let err = session.login("ada@example.com", "nope").await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect email or password");
    assert_eq!(session.state(), SessionState::Anonymous);
    assert!(store.load().unwrap().is_none());
    assert!(nav.routes().is_empty());
}

#[tokio::test]
async fn test_signup_navigates_to_onboarding() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(body_json(json!({
            "full_name": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh",
            "user": user_json()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (session, store, nav) = session_for(&server, None);
    session
        .signup("Ada Lovelace", "ada@example.com", "hunter22")
        .await
        .expect("signup should succeed");

    assert_eq!(store.load().unwrap().as_deref(), Some("fresh"));
    assert_eq!(nav.routes(), vec![Route::Onboarding]);
}

#[tokio::test]
async fn test_logout_makes_no_backend_call() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let (session, store, nav) = session_for(&server, Some("tok"));
    session.logout();

    assert!(store.load().unwrap().is_none());
    assert_eq!(session.state(), SessionState::Anonymous);
    assert_eq!(nav.routes(), vec![Route::Landing]);
}
