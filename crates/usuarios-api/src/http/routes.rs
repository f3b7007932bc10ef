//! HTTP route definitions and handlers.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::debug;

use usuarios_storage::{NewUser, StorageError, User, UserPatch, UserStore};

use super::state::AppState;

/// Custom JSON extractor that returns 400 Bad Request instead of 422
/// Unprocessable Entity for deserialization errors.
///
/// Malformed or missing-field bodies are a client error and never reach
/// the store. Preserves 413 Payload Too Large for body limit errors.
pub struct JsonBadRequest<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBadRequest<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorBody>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBadRequest(value)),
            Err(rejection) => {
                // Preserve 413 Payload Too Large for body limit errors
                let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    StatusCode::PAYLOAD_TOO_LARGE
                } else {
                    StatusCode::BAD_REQUEST
                };

                let error = ErrorBody {
                    error: rejection.body_text(),
                };
                Err((status, Json(error)))
            }
        }
    }
}

/// Default request body size limit (1MB).
/// This prevents memory exhaustion from oversized payloads.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Literal response messages. These are part of the wire contract and
/// asserted verbatim by the integration tests.
pub mod messages {
    /// Root greeting.
    pub const BIENVENIDA: &str = "¡Hola! Bienvenido a la API de usuarios";
    /// Successful create.
    pub const USUARIO_CREADO: &str = "Usuario creado exitosamente";
    /// Successful full replace.
    pub const USUARIO_ACTUALIZADO: &str = "Usuario actualizado completamente";
    /// Successful partial update.
    pub const USUARIO_ACTUALIZADO_PARCIAL: &str = "Usuario actualizado parcialmente";
    /// Successful single delete.
    pub const USUARIO_ELIMINADO: &str = "Usuario eliminado exitosamente";
}

/// Private helper for the user CRUD routes.
fn api_routes<S: UserStore>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/", get(root_greeting))
        .route("/saludo/:nombre", get(saludo))
        .route(
            "/usuarios",
            get(list_users::<S>)
                .post(create_user::<S>)
                .delete(delete_all_users::<S>),
        )
        .route(
            "/usuarios/:id",
            get(get_user::<S>)
                .put(replace_user::<S>)
                .patch(patch_user::<S>)
                .delete(delete_user::<S>),
        )
}

/// Creates the HTTP router with all endpoints.
///
/// Applies the default body size limit (1MB) to protect against oversized
/// payloads.
pub fn create_router<S: UserStore>(state: AppState<S>) -> Router {
    create_router_with_body_limit(state, DEFAULT_BODY_LIMIT)
}

/// Creates the HTTP router with a custom body size limit.
pub fn create_router_with_body_limit<S: UserStore>(state: AppState<S>, body_limit: usize) -> Router {
    let shared_state = Arc::new(state);
    api_routes::<S>()
        .route("/health", get(health_check))
        .with_state(shared_state)
        .layer(RequestBodyLimitLayer::new(body_limit))
}

// ============================================================
// Response Shapes
// ============================================================

/// Body-level error response.
///
/// Not-found is deliberately NOT a transport-level failure: the original
/// service answers HTTP 200 with an `error` field in the body, and wire
/// compatibility requires reproducing that exactly.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn user_not_found(id: u64) -> Self {
        Self {
            error: format!("Usuario con ID {id} no encontrado"),
        }
    }
}

/// Response for the list endpoint.
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub total: usize,
    pub usuarios: Vec<User>,
}

/// Response for create/replace/patch.
#[derive(Debug, Serialize)]
pub struct UserMessageResponse {
    pub mensaje: &'static str,
    pub usuario: User,
}

/// Response for single delete.
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub mensaje: &'static str,
    pub usuario_eliminado: User,
}

/// Response for delete-all.
#[derive(Debug, Serialize)]
pub struct DeleteAllResponse {
    pub mensaje: String,
    pub usuarios_restantes: usize,
}

/// Maps a not-found signal from the store onto the HTTP 200 body-level
/// error shape.
fn not_found_response(err: StorageError) -> Response {
    let StorageError::UserNotFound { id } = err;
    Json(ErrorBody::user_not_found(id)).into_response()
}

// ============================================================
// Greetings and Health
// ============================================================

/// Basic health check - returns 200 if the server is running.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn root_greeting() -> impl IntoResponse {
    Json(serde_json::json!({ "mensaje": messages::BIENVENIDA }))
}

async fn saludo(Path(nombre): Path<String>) -> impl IntoResponse {
    Json(serde_json::json!({
        "saludo": format!("¡Hola {nombre}! ¿Cómo estás?")
    }))
}

// ============================================================
// User CRUD
// ============================================================

async fn list_users<S: UserStore>(State(state): State<Arc<AppState<S>>>) -> Response {
    match state.storage.list_users().await {
        Ok(usuarios) => Json(ListUsersResponse {
            total: usuarios.len(),
            usuarios,
        })
        .into_response(),
        Err(err) => not_found_response(err),
    }
}

/// GET one user. Success returns the bare record, not an envelope.
async fn get_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<u64>,
) -> Response {
    match state.storage.get_user(id).await {
        Ok(user) => Json(user).into_response(),
        Err(err) => not_found_response(err),
    }
}

async fn create_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    JsonBadRequest(body): JsonBadRequest<NewUser>,
) -> Response {
    match state.storage.create_user(body).await {
        Ok(usuario) => {
            debug!(id = usuario.id, "user created");
            Json(UserMessageResponse {
                mensaje: messages::USUARIO_CREADO,
                usuario,
            })
            .into_response()
        }
        Err(err) => not_found_response(err),
    }
}

async fn replace_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<u64>,
    JsonBadRequest(body): JsonBadRequest<NewUser>,
) -> Response {
    match state.storage.replace_user(id, body).await {
        Ok(usuario) => Json(UserMessageResponse {
            mensaje: messages::USUARIO_ACTUALIZADO,
            usuario,
        })
        .into_response(),
        Err(err) => not_found_response(err),
    }
}

async fn patch_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<u64>,
    JsonBadRequest(body): JsonBadRequest<UserPatch>,
) -> Response {
    match state.storage.patch_user(id, body).await {
        Ok(usuario) => Json(UserMessageResponse {
            mensaje: messages::USUARIO_ACTUALIZADO_PARCIAL,
            usuario,
        })
        .into_response(),
        Err(err) => not_found_response(err),
    }
}

async fn delete_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<u64>,
) -> Response {
    match state.storage.delete_user(id).await {
        Ok(usuario_eliminado) => {
            debug!(id, "user deleted");
            Json(DeleteUserResponse {
                mensaje: messages::USUARIO_ELIMINADO,
                usuario_eliminado,
            })
            .into_response()
        }
        Err(err) => not_found_response(err),
    }
}

async fn delete_all_users<S: UserStore>(State(state): State<Arc<AppState<S>>>) -> Response {
    match state.storage.delete_all_users().await {
        Ok(removed) => {
            debug!(removed, "all users deleted");
            Json(DeleteAllResponse {
                mensaje: format!("Se eliminaron {removed} usuarios"),
                usuarios_restantes: 0,
            })
            .into_response()
        }
        Err(err) => not_found_response(err),
    }
}
