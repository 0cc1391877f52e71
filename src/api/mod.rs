//! Portfolio HTTP API
//! Static JSON endpoints plus the rendered page

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::{create_app, create_router};
pub use types::*;
