//! Route definitions for the chat pipeline.
//!
//! Merged at the root of `/api/v1` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Chat routes.
///
/// ```text
/// POST   /chat              -> send_message
/// POST   /analyze           -> analyze_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::send_message))
        .route("/analyze", post(chat::analyze_message))
}
