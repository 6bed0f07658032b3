pub mod config;
pub mod routes;
pub mod state;
pub mod templates;

use std::sync::Arc;

use axum::Router;
use forum_service::with_common_layers;

use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    let server = state.config.server.clone();
    with_common_layers(routes::router(state), &server)
}
