//! The `{ "data": ... }` envelope wrapped around every JSON payload.
//!
//! Export downloads are the exception: they return the raw file body.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: entry }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
