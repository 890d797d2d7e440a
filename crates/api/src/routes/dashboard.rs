//! Route definitions for mood tracking analytics.
//!
//! Mounted at `/dashboard` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes.
///
/// ```text
/// GET    /summary           -> get_summary
/// GET    /stats             -> get_statistics
/// GET    /patterns          -> get_patterns
/// GET    /streaks           -> get_streaks
/// GET    /insights          -> get_insights
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(dashboard::get_summary))
        .route("/stats", get(dashboard::get_statistics))
        .route("/patterns", get(dashboard::get_patterns))
        .route("/streaks", get(dashboard::get_streaks))
        .route("/insights", get(dashboard::get_insights))
}
