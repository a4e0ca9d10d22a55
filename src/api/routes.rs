use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeFile, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    render::page::LOGO_ROUTE,
};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let logo = ServeFile::new(state.logo_path.as_path());

    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/health", get(handlers::health_check))
        .route_service(LOGO_ROUTE, logo)
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// JSON routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id", get(handlers::get_user))
        .route("/genres", get(handlers::get_genres))
        .route("/analytics", get(handlers::get_analytics))
}
