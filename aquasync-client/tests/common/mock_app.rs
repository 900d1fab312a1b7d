use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::{Json, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const GOOD_EMAIL: &str = "test@eensy.io";
pub const GOOD_AUTH: &str = "super-secret";
pub const GOOD_TOKEN: &str = "tok-123";
/// Email the auth service blows up on with a 500.
pub const BOOM_EMAIL: &str = "boom@eensy.io";
/// The one registered pump.
pub const PUMP_MAC: &str = "aa:bb:cc:dd:ee:ff";
/// Device the registry 500s on.
pub const FLAKY_MAC: &str = "11:22:33:44:55:66";
/// Device the registry rejects PATCHes for with a 400.
pub const PICKY_MAC: &str = "99:88:77:66:55:44";

#[derive(Default)]
pub struct Hits {
    pub login: AtomicUsize,
    pub authorize: AtomicUsize,
    pub patch: AtomicUsize,
}

/// In-test stand-in for the auth service and the device registry, served
/// over a real socket so the clients run their full stack against it.
pub struct MockBackend {
    pub auth_url: String,
    pub device_registry_url: String,
    pub hits: Arc<Hits>,
}

pub async fn spawn() -> MockBackend {
    let hits = Arc::new(Hits::default());

    let app = Router::new()
        .route("/api/auth", post(login).get(authorize))
        .route("/api/devices", get(user_devices))
        .route("/api/devices/:uid", get(device).patch(replace_config))
        .with_state(hits.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        auth_url: format!("http://{addr}/api/auth"),
        device_registry_url: format!("http://{addr}/api/devices"),
        hits,
    }
}

fn pump_device() -> Value {
    json!({
        "id": "65f2b0a1",
        "mac": PUMP_MAC,
        "name": "patio-pump",
        "location": "18.5204,73.8567",
        "make": "rpi-0w",
        "users": [GOOD_EMAIL],
        "cfg": {"config": 2, "tickat": "10:00", "pulsegap": 50, "interval": 80}
    })
}

async fn login(
    State(hits): State<Arc<Hits>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    hits.login.fetch_add(1, Ordering::SeqCst);

    let email = body["email"].as_str().unwrap_or_default();
    let auth = body["auth"].as_str().unwrap_or_default();

    if email == BOOM_EMAIL {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "one or more things on the server failed"})),
        );
    }
    if email == GOOD_EMAIL && auth == GOOD_AUTH {
        (
            StatusCode::OK,
            Json(json!({
                "id": "65f2b0a1",
                "email": email,
                "name": "Test User",
                "role": 2,
                "telegid": 5157350442i64,
                "authtok": GOOD_TOKEN
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "credentials rejected"})),
        )
    }
}

async fn authorize(State(hits): State<Arc<Hits>>, headers: HeaderMap) -> StatusCode {
    hits.authorize.fetch_add(1, Ordering::SeqCst);

    let token = headers.get("authorization").and_then(|v| v.to_str().ok());
    if token == Some(GOOD_TOKEN) {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn user_devices(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if params.get("filter").map(String::as_str) != Some("users") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "unsupported filter"})),
        );
    }

    if params.get("user").map(String::as_str) == Some(GOOD_EMAIL) {
        (
            StatusCode::OK,
            Json(json!([
                pump_device(),
                {"mac": FLAKY_MAC, "name": "patio-light"}
            ])),
        )
    } else {
        (StatusCode::OK, Json(json!([])))
    }
}

async fn device(Path(uid): Path<String>) -> (StatusCode, Json<Value>) {
    match uid.as_str() {
        PUMP_MAC => (StatusCode::OK, Json(pump_device())),
        FLAKY_MAC => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "registry query failed"})),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "no such device"})),
        ),
    }
}

async fn replace_config(
    State(hits): State<Arc<Hits>>,
    Path(uid): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    hits.patch.fetch_add(1, Ordering::SeqCst);

    if params.get("path").map(String::as_str) != Some("config")
        || params.get("action").map(String::as_str) != Some("replace")
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "unsupported patch target"})),
        );
    }

    match uid.as_str() {
        PICKY_MAC => (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "failed to read schedule from payload"})),
        ),
        FLAKY_MAC => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "registry update failed"})),
        ),
        PUMP_MAC => {
            // same gate the real registry runs before persisting
            let config = body["config"].as_i64().unwrap_or(-1);
            let pulsegap = body["pulsegap"].as_i64().unwrap_or(0);
            let interval = body["interval"].as_i64().unwrap_or(0);

            if !(0..=3).contains(&config) || (config == 2 && interval <= pulsegap) {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"message": "failed validation of device schedule"})),
                );
            }

            (StatusCode::OK, Json(json!({})))
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "no such device"})),
        ),
    }
}
