//! Query-string parameter structs shared by several handlers.

use serde::Deserialize;

/// `?days=N`
#[derive(Debug, Default, Deserialize)]
pub struct DaysParams {
    pub days: Option<i64>,
}

/// `?days=N&emotion=label` for chart endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    pub days: Option<i64>,
    pub emotion: Option<String>,
}

/// `?emotion=label&days=N&limit=N&offset=N` for entry listings.
#[derive(Debug, Default, Deserialize)]
pub struct EntryListParams {
    pub emotion: Option<String>,
    pub days: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `?format=csv|json&include_text=bool`
#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
    pub include_text: Option<bool>,
}
