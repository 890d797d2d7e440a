//! Route definitions for support resources.
//!
//! Mounted at `/support` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::support;
use crate::state::AppState;

/// Support routes.
///
/// ```text
/// GET    /crisis            -> get_crisis_resources
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/crisis", get(support::get_crisis_resources))
}
