use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::insights_page))
        .route("/schedule", get(handlers::schedule_page))
        .route("/health", get(handlers::health))
        .route("/api/schedule", get(handlers::get_schedule))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/day/:date", get(handlers::get_day))
        .nest_service("/images", ServeDir::new("public/images"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
