//! HTTP REST API endpoints.
//!
//! Implements the usuarios REST API using Axum.
//!
//! # API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/` | GET | Greeting |
//! | `/saludo/{nombre}` | GET | Personalized greeting |
//! | `/usuarios` | GET | List all users |
//! | `/usuarios` | POST | Create user |
//! | `/usuarios` | DELETE | Delete all users |
//! | `/usuarios/{id}` | GET | Get user |
//! | `/usuarios/{id}` | PUT | Replace user |
//! | `/usuarios/{id}` | PATCH | Partially update user |
//! | `/usuarios/{id}` | DELETE | Delete user |

pub mod routes;
pub mod state;

pub use routes::{create_router, create_router_with_body_limit, DEFAULT_BODY_LIMIT};
pub use state::AppState;

#[cfg(test)]
mod tests;
