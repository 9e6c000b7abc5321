use std::borrow::Cow;

use serde::Serialize;

/// Body of every response of the contact endpoint. The HTTP status always
/// equals `statusCode`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub message: Cow<'static, str>,
}

#[derive(Debug, Serialize)]
pub struct ApiHealth {
    pub http: bool,
    pub database: bool,
    pub email: bool,
}
