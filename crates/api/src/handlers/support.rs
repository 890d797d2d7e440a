//! Handlers for support resources.

use axum::Json;
use moodlog_core::suggestions::CRISIS_RESOURCES;
use serde::Serialize;

use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct CrisisResources {
    pub resources: &'static [&'static str],
}

/// GET /support/crisis
pub async fn get_crisis_resources() -> Json<DataResponse<CrisisResources>> {
    Json(DataResponse {
        data: CrisisResources {
            resources: CRISIS_RESOURCES,
        },
    })
}
