//! Route definitions for chart data.
//!
//! Mounted at `/charts` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::charts;
use crate::state::AppState;

/// Chart routes. All accept `?days&emotion`.
///
/// ```text
/// GET    /timeline          -> get_timeline
/// GET    /distribution      -> get_distribution
/// GET    /heatmap           -> get_heatmap
/// GET    /sentiment-trend   -> get_sentiment_trend
/// GET    /confidence        -> get_confidence
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/timeline", get(charts::get_timeline))
        .route("/distribution", get(charts::get_distribution))
        .route("/heatmap", get(charts::get_heatmap))
        .route("/sentiment-trend", get(charts::get_sentiment_trend))
        .route("/confidence", get(charts::get_confidence))
}
