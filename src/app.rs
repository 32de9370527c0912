use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/rep/add", post(handlers::rep_add))
        .route("/rep/reset", post(handlers::rep_reset))
        .route("/theme/toggle", post(handlers::theme_toggle))
        .route("/api/state", get(handlers::get_state))
        .route("/api/action", post(handlers::action))
        .with_state(state)
}
