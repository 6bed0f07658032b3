pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use forum_service::{cors_layer, with_common_layers};

use crate::state::AppState;

/// Full storage API router with middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors);
    let server = state.config.server.clone();

    with_common_layers(routes::router(state), &server).layer(cors)
}
