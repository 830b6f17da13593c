//! Route table and middleware stack.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use super::{handlers, state::AppState};

/// Builds the application router: the landing page, the prediction
/// endpoint, frontend assets, and a permissive CORS layer over all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state
        .config
        .static_dir
        .clone()
        .filter(|dir| dir.exists());

    let mut app = Router::new()
        .route("/", get(handlers::serve_index))
        .route("/predict", post(handlers::predict));

    if let Some(dir) = static_dir {
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    app.with_state(state).layer(cors)
}
