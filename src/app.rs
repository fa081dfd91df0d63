use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handler, state::AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handler::graphql))
        .route("/schema.graphql", get(handler::sdl))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
