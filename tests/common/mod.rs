// SPDX-License-Identifier: MIT

//! Shared test helpers: an in-process mock registration backend and a
//! well-formed test ID token mint.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use mat_portal::config::Config;

/// Handle to a mock registration backend bound to an ephemeral port.
#[allow(dead_code)]
pub struct MockBackend {
    pub base_url: String,
    pub exchange_hits: Arc<AtomicUsize>,
    pub details_hits: Arc<AtomicUsize>,
    /// Last JSON body received on the exchange endpoint.
    pub last_exchange_body: Arc<Mutex<Option<serde_json::Value>>>,
    /// Last JSON body received on the details endpoint.
    pub last_details_body: Arc<Mutex<Option<serde_json::Value>>>,
}

struct BackendState {
    tokens: serde_json::Value,
    exchange_status: StatusCode,
    details_status: StatusCode,
    exchange_hits: Arc<AtomicUsize>,
    details_hits: Arc<AtomicUsize>,
    last_exchange_body: Arc<Mutex<Option<serde_json::Value>>>,
    last_details_body: Arc<Mutex<Option<serde_json::Value>>>,
}

/// Spawn a backend whose exchange endpoint returns the given token set
/// (wrapped in the `{"message", "tokens"}` envelope) and whose details
/// endpoint answers 200.
#[allow(dead_code)]
pub async fn spawn_backend(tokens: serde_json::Value) -> MockBackend {
    spawn_backend_with(tokens, StatusCode::OK, StatusCode::OK).await
}

/// Spawn a backend with explicit response statuses for both endpoints.
#[allow(dead_code)]
pub async fn spawn_backend_with(
    tokens: serde_json::Value,
    exchange_status: StatusCode,
    details_status: StatusCode,
) -> MockBackend {
    let exchange_hits = Arc::new(AtomicUsize::new(0));
    let details_hits = Arc::new(AtomicUsize::new(0));
    let last_exchange_body = Arc::new(Mutex::new(None));
    let last_details_body = Arc::new(Mutex::new(None));

    let state = Arc::new(BackendState {
        tokens,
        exchange_status,
        details_status,
        exchange_hits: exchange_hits.clone(),
        details_hits: details_hits.clone(),
        last_exchange_body: last_exchange_body.clone(),
        last_details_body: last_details_body.clone(),
    });

    let app = Router::new()
        .route("/register", post(register))
        .route("/details", post(details))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{}", addr),
        exchange_hits,
        details_hits,
        last_exchange_body,
        last_details_body,
    }
}

async fn register(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.exchange_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_exchange_body.lock().unwrap() = Some(body);

    (
        state.exchange_status,
        Json(serde_json::json!({
            "message": "User data processed successfully",
            "tokens": state.tokens,
        })),
    )
}

async fn details(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.details_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_details_body.lock().unwrap() = Some(body);

    (state.details_status, Json(serde_json::json!({})))
}

/// Config pointed at a mock backend.
#[allow(dead_code)]
pub fn test_config(backend: &MockBackend) -> Config {
    let mut config = Config::test_default();
    config.registration_url = format!("{}/register", backend.base_url);
    config.details_url = format!("{}/details", backend.base_url);
    config
}

/// Mint a real HS256-signed ID token carrying the given claims. The
/// bootstrapper only reads the payload segment, but a properly signed token
/// keeps the fixture honest.
#[allow(dead_code)]
pub fn mint_id_token(claims: &serde_json::Value) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(b"test_signing_key_32_bytes_long!!"),
    )
    .expect("Failed to mint test ID token")
}

/// Standard profile claims used across tests.
#[allow(dead_code)]
pub fn sample_claims() -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Rao",
        "birthdate": "1991-04-02",
        "email": "asha@example.com",
        "gender": "female",
        "cognito:username": "asha.rao",
    })
}
