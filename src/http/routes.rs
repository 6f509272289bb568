use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{index_handler, result_handler},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/result", post(result_handler))
        .with_state(state)
}
