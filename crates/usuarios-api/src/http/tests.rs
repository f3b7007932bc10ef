//! HTTP API tests for the router and handlers.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt; // for oneshot

use usuarios_storage::MemoryUserStore;

use super::routes::{create_router, create_router_with_body_limit};
use super::state::AppState;

/// Helper to create a test app with in-memory storage.
fn test_app() -> axum::Router {
    let storage = Arc::new(MemoryUserStore::new());
    let state = AppState::new(storage);
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Test: Health endpoint responds
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

/// Test: Root returns the greeting message
///
/// The literal is contractual, same as the mutation messages.
#[tokio::test]
async fn test_root_returns_greeting() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mensaje"], "¡Hola! Bienvenido a la API de usuarios");
}

/// Test: Saludo echoes the path name in the literal greeting format
#[tokio::test]
async fn test_saludo_echoes_name() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/saludo/Ana")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["saludo"], "¡Hola Ana! ¿Cómo estás?");
}

/// Test: Create without `activo` defaults it to true
#[tokio::test]
async fn test_create_defaults_activo_to_true() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/usuarios")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"nombre":"Ana","edad":30,"email":"ana@x.com"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mensaje"], "Usuario creado exitosamente");
    assert_eq!(json["usuario"]["id"], 1);
    assert_eq!(json["usuario"]["activo"], true);
}

/// Test: Malformed JSON is rejected with 400 before the store runs
#[tokio::test]
async fn test_malformed_body_returns_400() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/usuarios")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"nombre": }"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Test: Missing required field is rejected with 400
#[tokio::test]
async fn test_missing_required_field_returns_400() {
    let app = test_app();

    // edad and email absent
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/usuarios")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"nombre":"Ana"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Test: Oversized bodies are rejected with 413, not 400
///
/// The body limit layer fires before JSON deserialization, and
/// `JsonBadRequest` must pass 413 through instead of collapsing it
/// into the generic 400 shape.
#[tokio::test]
async fn test_oversized_body_returns_413() {
    // Small limit so the test payload stays cheap
    let storage = Arc::new(MemoryUserStore::new());
    let state = AppState::new(storage);
    let app = create_router_with_body_limit(state, 64);

    let oversized = format!(
        r#"{{"nombre":"{}","edad":30,"email":"ana@x.com"}}"#,
        "A".repeat(256)
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/usuarios")
                .header("content-type", "application/json")
                .body(Body::from(oversized))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

/// Test: Not-found is HTTP 200 with a body-level error message
///
/// The literal message is part of the wire contract.
#[tokio::test]
async fn test_get_unknown_user_returns_body_level_error() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/usuarios/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Usuario con ID 1 no encontrado");
}

/// Test: Listing an empty store
#[tokio::test]
async fn test_list_empty_store() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/usuarios")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 0);
    assert_eq!(json["usuarios"], serde_json::json!([]));
}

/// Test: Non-numeric id in the path is a transport-level client error
#[tokio::test]
async fn test_non_numeric_id_is_client_error() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/usuarios/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
