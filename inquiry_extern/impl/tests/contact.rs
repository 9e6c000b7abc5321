use std::sync::Arc;

use axum::{http::StatusCode, routing, Json, Router};
use inquiry_extern_contracts::contact::{ContactApiError, ContactApiResponse, ContactApiService};
use inquiry_extern_impl::{
    contact::{ContactApiServiceConfig, ContactApiServiceImpl},
    http::HttpClient,
};
use inquiry_models::contact::ContactFormFields;
use inquiry_testing::contact_api::{self, FAIL_MESSAGE, FAIL_RESPONSE_MESSAGE, SUCCESS_RESPONSE_MESSAGE};
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;
use url::Url;

#[tokio::test]
async fn ok() {
    let (endpoint, stub) = contact_api::spawn().await.unwrap();
    let sut = make_sut(endpoint);

    let result = sut.submit(fields("Interested in data engineering services")).await;

    assert_eq!(
        result.unwrap(),
        ContactApiResponse::Ok {
            message: Some(SUCCESS_RESPONSE_MESSAGE.into())
        }
    );
    assert_eq!(
        stub.received(),
        [fields("Interested in data engineering services")]
    );
}

#[tokio::test]
async fn rejected_with_ok_transport() {
    let (endpoint, _) = contact_api::spawn().await.unwrap();
    let sut = make_sut(endpoint);

    let result = sut.submit(fields(FAIL_MESSAGE)).await;

    assert_eq!(
        result.unwrap(),
        ContactApiResponse::Rejected {
            message: Some(FAIL_RESPONSE_MESSAGE.into())
        }
    );
}

#[tokio::test]
async fn rejected_with_error_transport() {
    let (endpoint, _) = contact_api::spawn().await.unwrap();
    let sut = make_sut(endpoint);

    let result = sut.submit(fields("")).await;

    assert_eq!(
        result.unwrap(),
        ContactApiResponse::Rejected {
            message: Some(
                "Missing required fields: name, email, and message are required.".into()
            )
        }
    );
}

#[tokio::test]
async fn rejected_without_status_code() {
    let endpoint = serve(Router::new().route(
        "/contact",
        routing::post(|| async { (StatusCode::OK, Json(serde_json::json!({"ok": true}))) }),
    ))
    .await;
    let sut = make_sut(endpoint);

    let result = sut.submit(fields("Hello")).await;

    assert_eq!(
        result.unwrap(),
        ContactApiResponse::Rejected { message: None }
    );
}

#[tokio::test]
async fn invalid_response() {
    let (endpoint, _) = contact_api::spawn().await.unwrap();
    let sut = make_sut(endpoint);

    let result = sut.submit(fields(contact_api::CRASH_MESSAGE)).await;

    assert!(matches!(result, Err(ContactApiError::InvalidResponse(_))));
}

#[tokio::test]
async fn transport_error() {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let sut = make_sut(format!("http://{addr}/contact").parse().unwrap());

    let result = sut.submit(fields("Hello")).await;

    assert!(matches!(result, Err(ContactApiError::Transport(_))));
}

fn make_sut(endpoint: Url) -> ContactApiServiceImpl {
    ContactApiServiceImpl::new(
        ContactApiServiceConfig {
            endpoint: Arc::new(endpoint),
        },
        HttpClient::new(None).unwrap(),
    )
}

fn fields(message: &str) -> ContactFormFields {
    ContactFormFields {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        company: "".into(),
        interest: "".into(),
        message: message.into(),
    }
}

async fn serve(router: Router) -> Url {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    format!("http://{addr}/contact").parse().unwrap()
}
