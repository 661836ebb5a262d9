use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{championships, system, teams};
use super::state::AppState;

/// Builds the application router with tracing and CORS layers
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(system::welcome))
        .route("/health", get(system::health_check))
        // Team routes
        .route("/teams", post(teams::create_team).get(teams::get_all_teams))
        .route("/teams/:id", get(teams::get_team))
        // Championship routes
        .route("/championships", post(championships::create_championship))
        .route("/championships/:id", get(championships::get_championship))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
