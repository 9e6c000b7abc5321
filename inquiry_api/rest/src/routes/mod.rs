use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResponse;

pub mod contact;
pub mod health;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    respond(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MESSAGE)
}

fn respond(status: StatusCode, message: impl Into<Cow<'static, str>>) -> Response {
    let body = ApiResponse {
        status_code: status.as_u16(),
        message: message.into(),
    };
    (status, Json(body)).into_response()
}
