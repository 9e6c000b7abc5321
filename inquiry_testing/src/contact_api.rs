//! Stub of the contact endpoint.
//!
//! Requests are validated like the real endpoint does. The message `fail`
//! is answered with a JSON rejection carrying an internal status code of 500
//! and the message `crash` with an HTTP 500 without JSON body.

use std::{
    net::{IpAddr, SocketAddr},
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use inquiry_models::contact::ContactFormFields;
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

pub const CONTACT_ROUTE: &str = "/website/contact_us";

pub const FAIL_MESSAGE: &str = "fail";
pub const CRASH_MESSAGE: &str = "crash";

pub const SUCCESS_RESPONSE_MESSAGE: &str =
    "Your message has been received. We'll get back to you soon.";
pub const FAIL_RESPONSE_MESSAGE: &str = "Simulated failure";
pub const MISSING_FIELDS_RESPONSE_MESSAGE: &str =
    "Missing required fields: name, email, and message are required.";

/// Submissions received by a running stub.
#[derive(Debug, Clone, Default)]
pub struct ContactApiStub {
    received: Arc<Mutex<Vec<ContactFormFields>>>,
}

impl ContactApiStub {
    pub fn received(&self) -> Vec<ContactFormFields> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn router(&self) -> Router<()> {
        Router::new()
            .route(CONTACT_ROUTE, routing::post(contact_us))
            .with_state(self.clone())
    }
}

/// Start the stub on an ephemeral port in the background and return the url
/// of its contact endpoint.
pub async fn spawn() -> anyhow::Result<(Url, ContactApiStub)> {
    let stub = ContactApiStub::default();
    let listener = TcpListener::bind(("127.0.0.1", 0))
        .await
        .context("Failed to bind to an ephemeral port")?;
    let addr = listener.local_addr()?;
    let router = stub.router();
    tokio::spawn(async move { axum::serve(listener, router).await });
    Ok((endpoint_url(addr)?, stub))
}

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::new(host, port);
    info!("Starting contact api testing server on {addr}");
    info!("Contact endpoint: {}", endpoint_url(addr)?);
    info!("Send the message {FAIL_MESSAGE:?} to get a rejection, {CRASH_MESSAGE:?} to get a server error");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    axum::serve(listener, ContactApiStub::default().router())
        .await
        .context("Failed to start HTTP server")
}

fn endpoint_url(addr: SocketAddr) -> anyhow::Result<Url> {
    format!("http://{addr}{CONTACT_ROUTE}")
        .parse()
        .context("Failed to build endpoint url")
}

#[derive(Serialize)]
struct ResponseBody {
    #[serde(rename = "statusCode")]
    status_code: u16,
    message: &'static str,
}

async fn contact_us(stub: State<ContactApiStub>, Json(fields): Json<ContactFormFields>) -> Response {
    stub.received
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(fields.clone());

    let (status, status_code, message) = if !fields.missing_required().is_empty() {
        (StatusCode::BAD_REQUEST, 400, MISSING_FIELDS_RESPONSE_MESSAGE)
    } else {
        match fields.message.trim() {
            CRASH_MESSAGE => {
                return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                    .into_response()
            }
            FAIL_MESSAGE => (StatusCode::OK, 500, FAIL_RESPONSE_MESSAGE),
            _ => (StatusCode::OK, 200, SUCCESS_RESPONSE_MESSAGE),
        }
    };

    (status, Json(ResponseBody { status_code, message })).into_response()
}
