//! Route definitions for data export.
//!
//! Mounted at `/export` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Export routes.
///
/// ```text
/// GET    /                  -> export_entries
/// GET    /summary           -> export_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(export::export_entries))
        .route("/summary", get(export::export_summary))
}
