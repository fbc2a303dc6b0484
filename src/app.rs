use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search_form))
        .route("/chart.svg", get(handlers::get_chart_svg))
        .route("/api/search", get(handlers::search))
        .route("/api/chart", get(handlers::get_chart))
        .route("/api/fares", get(handlers::get_fares))
        .route("/api/airports", get(handlers::get_airports))
        .with_state(state)
}
