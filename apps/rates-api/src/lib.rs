//! # rates-api Library
//!
//! Library surface of the HTTP application, so integration tests can
//! build the router in-process (no socket, no spawned binary).

pub mod config;
pub mod error;
pub mod payload;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use routes::build_router;
pub use state::AppState;
