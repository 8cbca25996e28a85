use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::web;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Assignment API
        .route("/assign", post(controllers::assignments::assign_applicant))
        .route("/health", get(controllers::assignments::healthcheck))
        // Rating pages
        .route("/interview", get(controllers::assignments::get_version))
        .route(
            "/interview/:id",
            get(web::show_rating_form).post(web::submit_rating),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
