//! HTTP boundary for the session studio
//!
//! Wires the auth and session services behind an axum router. Errors from
//! the services are turned into status codes in [`error`] and nowhere else.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
