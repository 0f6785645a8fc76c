//! Axum server setup
//!
//! - Localhost-only CORS by default (permissive behind a flag)
//! - Request tracing
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:9000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 9000)),
            cors_permissive: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::users::router())
        .merge(routes::medications::router())
        .merge(routes::sleep::router())
        .merge(routes::status::router())
        .merge(routes::alerts::router())
        .merge(routes::data::router())
        .with_state(state)
}

/// Run the HTTP server.
///
/// The pool must already have the schema applied; `main` does that
/// before calling in.
pub async fn run_server(pool: SqlitePool, config: ServerConfig) -> Result<(), ServerError> {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        // Localhost only
        CorsLayer::new()
            .allow_origin([
                "http://localhost:3000".parse::<HeaderValue>().unwrap(),
                "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = build_router(AppState::new(pool))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db;

    async fn test_app() -> (Router, SqlitePool) {
        let pool = db::memory_pool().await;
        (build_router(AppState::new(pool.clone())), pool)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (app, _pool) = test_app().await;

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "API is working!");
    }

    #[tokio::test]
    async fn user_create_then_list_round_trip() {
        let (app, _pool) = test_app().await;

        let response = app
            .clone()
            .oneshot(post(
                "/users",
                r#"{"name":"Ann","email":"ann@x.com","password":"pw1","role":"caregiver"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "User added");

        let response = app.oneshot(get("/users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["name"], "Ann");
        assert_eq!(users[0]["email"], "ann@x.com");
        assert_eq!(users[0]["role"], "caregiver");
        assert!(users[0]["user_id"].is_i64());
    }

    #[tokio::test]
    async fn user_listing_never_exposes_password_material() {
        let (app, _pool) = test_app().await;

        app.clone()
            .oneshot(post(
                "/users",
                r#"{"name":"Ann","email":"ann@x.com","password":"pw1","role":"patient"}"#,
            ))
            .await
            .unwrap();

        let response = app.oneshot(get("/users")).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(!text.contains("password"));
        assert!(!text.contains("pw1"));
    }

    #[tokio::test]
    async fn malformed_body_is_400_and_inserts_nothing() {
        let (app, _pool) = test_app().await;

        let response = app
            .clone()
            .oneshot(post("/users", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(!body["error"].as_str().unwrap().is_empty());

        let response = app.oneshot(get("/users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn missing_required_field_is_400() {
        let (app, _pool) = test_app().await;

        // no "password"
        let response = app
            .oneshot(post(
                "/users",
                r#"{"name":"Ann","email":"ann@x.com","role":"patient"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn scoped_list_for_unknown_user_is_empty_200() {
        let (app, _pool) = test_app().await;

        for uri in ["/medications/42", "/sleep/42", "/status/42"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, json!([]));
        }
    }

    #[tokio::test]
    async fn medication_round_trip_is_scoped() {
        let (app, _pool) = test_app().await;

        let response = app
            .clone()
            .oneshot(post(
                "/medications",
                r#"{"user_id":1,"medication_name":"Aspirin","dosage":"100mg","frequency":"daily","start_date":"2026-01-01","end_date":"2026-02-01"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "Medication added");

        let body = body_json(app.clone().oneshot(get("/medications/1")).await.unwrap()).await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["medication_name"], "Aspirin");
        assert_eq!(rows[0]["dosage"], "100mg");
        assert_eq!(rows[0]["frequency"], "daily");

        let body = body_json(app.oneshot(get("/medications/2")).await.unwrap()).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn sleep_round_trip() {
        let (app, _pool) = test_app().await;

        let response = app
            .clone()
            .oneshot(post(
                "/sleep",
                r#"{"user_id":3,"sleep_start":"2026-03-01 22:30","sleep_end":"2026-03-02 06:15","duration":465}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "Sleep pattern added");

        let body = body_json(app.oneshot(get("/sleep/3")).await.unwrap()).await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["duration"], 465);
        assert_eq!(rows[0]["sleep_start"], "2026-03-01 22:30");
    }

    #[tokio::test]
    async fn status_update_round_trip() {
        let (app, _pool) = test_app().await;

        let response = app
            .clone()
            .oneshot(post(
                "/status",
                r#"{"user_id":1,"caregiver_id":2,"status_message":"resting comfortably"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "Status update added");

        let body = body_json(app.oneshot(get("/status/1")).await.unwrap()).await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["caregiver_id"], 2);
        assert_eq!(rows[0]["status_message"], "resting comfortably");
        assert!(!rows[0]["update_time"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn alert_round_trip() {
        let (app, _pool) = test_app().await;

        let response = app
            .clone()
            .oneshot(post("/alerts", r#"{"message":"fall detected in room 4"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "Emergency alert added");

        let body = body_json(app.oneshot(get("/alerts")).await.unwrap()).await;
        let alerts = body.as_array().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["message"], "fall detected in room 4");
        assert!(!alerts[0]["timestamp"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn data_check_in_is_echoed() {
        let (app, _pool) = test_app().await;

        let response = app
            .clone()
            .oneshot(post("/data", r#"{"device_id":"dev-1","note":"ok"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["received"]["device_id"], "dev-1");
        assert_eq!(body["received"]["note"], "ok");

        // mistyped field is rejected, not absorbed
        let response = app
            .oneshot(post("/data", r#"{"device_id":7}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn closed_pool_is_500_with_error_body() {
        let (app, pool) = test_app().await;
        pool.close().await;

        let response = app.oneshot(get("/users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 9000);
        assert!(!config.cors_permissive);
    }
}
