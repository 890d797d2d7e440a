//! Route definitions for stored mood entries.
//!
//! Merged at the root of `/api/v1` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// Entry routes.
///
/// ```text
/// GET    /entries           -> list_entries
/// GET    /entries/{id}      -> get_entry
/// GET    /emotions          -> list_emotions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/entries", get(entries::list_entries))
        .route("/entries/{id}", get(entries::get_entry))
        .route("/emotions", get(entries::list_emotions))
}
