//! Shared setup and helpers for API tests.
//!
//! Each test gets a full application wired against a private in-memory
//! database, and drives it through `tower::ServiceExt::oneshot` so no
//! listener or port is involved.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use rolo_server::auth::TokenIssuer;
use rolo_server::db;
use rolo_server::metrics::Metrics;
use rolo_server::repositories::{
    ContactRepository, SqliteContactRepository, SqliteUserRepository, UserRepository,
};
use rolo_server::server::AppState;
use rolo_server::services::{AuthServiceImpl, ContactServiceImpl};

// Low cost keeps bcrypt fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_SECRET: &str = "test-secret";

/// A fully wired application over a fresh in-memory database.
pub struct TestApp {
    pub router: Router,
    pub metrics: Metrics,
}

/// Build a new application instance for one test.
pub async fn spawn_app() -> TestApp {
    let pool = db::connect_in_memory().await.expect("in-memory database");
    let tokens = TokenIssuer::new(TEST_SECRET, 7);
    let metrics = Metrics::new();

    let users = Arc::new(SqliteUserRepository::new(pool.clone())) as Arc<dyn UserRepository>;
    let contacts =
        Arc::new(SqliteContactRepository::new(pool)) as Arc<dyn ContactRepository>;

    let state = AppState {
        auth: Arc::new(AuthServiceImpl::new(users, tokens.clone(), TEST_BCRYPT_COST)),
        contacts: Arc::new(ContactServiceImpl::new(contacts)),
        tokens,
        metrics: metrics.clone(),
    };

    TestApp {
        router: rolo_server::server::router(state),
        metrics,
    }
}

/// Send one request and decode the JSON response body.
///
/// `token`, when given, is sent as a bearer token. `body`, when given, is
/// sent as JSON.
pub async fn request(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let payload = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, payload)
}

/// Register an account and return its bearer token.
#[allow(dead_code)]
pub async fn register_user(router: &Router, email: &str, password: &str) -> String {
    let (status, body) = request(
        router,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);
    body["token"].as_str().expect("token in response").to_string()
}

/// Minimal valid contact payload.
#[allow(dead_code)]
pub fn contact_body(name: &str, phone: &str, email: &str) -> Value {
    json!({ "name": name, "phone": phone, "email": email })
}

/// Create a contact and return its id.
#[allow(dead_code)]
pub async fn create_contact(router: &Router, token: &str, body: Value) -> i64 {
    let (status, body) = request(router, "POST", "/api/contacts", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    body["contact"]["id"].as_i64().expect("contact id")
}
