//! Shared helpers for the wiremock-backed integration tests.

#![allow(dead_code)]

use shorewatch::session::{KEY_EMAIL, KEY_ROLE, KEY_TOKEN, KEY_USERNAME};
use shorewatch::{App, ClientConfig, MemorySessionStore, Role, Session, SessionStore};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";

/// Route tracing through the test harness; honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start a mock backend and an [`App`] pointed at it (with the `/api`
/// prefix, so mock paths look like the real backend surface).
pub async fn test_app() -> (App, MockServer) {
    init_tracing();
    let server = MockServer::start().await;
    let app = App::new(&ClientConfig::new(format!("{}/api", server.uri())))
        .expect("client construction");
    (app, server)
}

/// Like [`test_app`], but the durable store already holds a session, as if
/// a previous run had logged in. The auth store seeds from it, leaving
/// `profile_loaded` false.
pub async fn test_app_with_persisted_session(role: Role) -> (App, MockServer) {
    init_tracing();
    let server = MockServer::start().await;
    let store = MemorySessionStore::default();
    store.set(KEY_TOKEN, TEST_TOKEN);
    store.set(KEY_USERNAME, "returning-user");
    store.set(KEY_ROLE, role.as_str());
    store.set(KEY_EMAIL, "returning@example.com");

    let app = App::with_session_store(
        &ClientConfig::new(format!("{}/api", server.uri())),
        Box::new(store),
    )
    .expect("client construction");
    (app, server)
}

/// Authenticate the app in-process (state + storage), profile loaded.
pub fn log_in(app: &App, role: Role) {
    app.auth.set_auth(Session {
        token: Some(TEST_TOKEN.to_string()),
        username: "tester".to_string(),
        role: Some(role),
        email: "tester@example.com".to_string(),
    });
}
