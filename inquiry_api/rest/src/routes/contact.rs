use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response, routing, Router};
use inquiry_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use inquiry_models::contact::ContactFormFields;
use tracing::debug;

use super::{internal_server_error, respond, INTERNAL_SERVER_ERROR_MESSAGE};

pub const CONTACT_ROUTE: &str = "/website/contact_us";

pub const SUCCESS_MESSAGE: &str = "Your message has been received. We'll get back to you soon.";
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request format.";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            CONTACT_ROUTE,
            routing::post(submit).options(|| async { respond(StatusCode::OK, "OK") }),
        )
        .with_state(service)
}

async fn submit(service: State<Arc<impl ContactFeatureService>>, body: Bytes) -> Response {
    let fields = match serde_json::from_slice::<ContactFormFields>(&body) {
        Ok(fields) => fields,
        Err(err) => {
            debug!("rejecting malformed contact request: {err}");
            return respond(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE);
        }
    };

    match service.submit(fields).await {
        Ok(_) => respond(StatusCode::OK, SUCCESS_MESSAGE),
        Err(
            err @ (ContactSubmitError::MissingFields
            | ContactSubmitError::InvalidEmail
            | ContactSubmitError::FieldTooLong(_)),
        ) => respond(StatusCode::BAD_REQUEST, err.to_string()),
        Err(ContactSubmitError::Send) => {
            respond(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MESSAGE)
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
