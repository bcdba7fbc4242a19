use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

/// Uniform error envelope returned on every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: NaiveDateTime,
    pub status: u16,
    /// HTTP reason phrase for the status code.
    pub error: String,
    pub path: String,
    /// One entry per validation failure, or a single business-rule message.
    pub messages: Vec<String>,
}
