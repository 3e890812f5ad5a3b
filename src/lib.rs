pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod simulator;

pub use config::Config;
pub use routes::AppState;

use tower_http::trace::TraceLayer;

/// Create the app router with its middleware stack
///
/// Shared by the server and the integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
