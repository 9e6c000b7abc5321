use std::sync::Arc;

use inquiry_client::{ContactFormState, ContactSubmissionFlow, NETWORK_ERROR_MESSAGE};
use inquiry_extern_impl::{
    contact::{ContactApiServiceConfig, ContactApiServiceImpl},
    http::HttpClient,
};
use inquiry_models::contact::{ContactField, ContactFormFields, SubmissionStatus};
use inquiry_testing::contact_api::{self, FAIL_MESSAGE, FAIL_RESPONSE_MESSAGE};
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;
use url::Url;

#[tokio::test]
async fn submit_and_reset() {
    // Arrange
    let (endpoint, stub) = contact_api::spawn().await.unwrap();
    let sut = make_sut(endpoint);
    fill(&sut, "Interested in data engineering services");

    // Act
    let status = sut.submit().await.unwrap();

    // Assert
    assert_eq!(status, SubmissionStatus::Success);
    assert!(sut.fields().is_empty());
    assert_eq!(sut.error_message(), None);
    assert_eq!(
        stub.received(),
        [jane("Interested in data engineering services")]
    );

    sut.reset();
    assert_eq!(sut.state(), ContactFormState::default());
}

#[tokio::test]
async fn rejected_by_server() {
    // Arrange
    let (endpoint, stub) = contact_api::spawn().await.unwrap();
    let sut = make_sut(endpoint);
    fill(&sut, FAIL_MESSAGE);

    // Act
    let status = sut.submit().await.unwrap();

    // Assert
    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(sut.error_message().as_deref(), Some(FAIL_RESPONSE_MESSAGE));
    assert_eq!(sut.fields(), jane(FAIL_MESSAGE));
    assert_eq!(stub.received().len(), 1);
}

#[tokio::test]
async fn server_crash() {
    // Arrange
    let (endpoint, _) = contact_api::spawn().await.unwrap();
    let sut = make_sut(endpoint);
    fill(&sut, contact_api::CRASH_MESSAGE);

    // Act
    let status = sut.submit().await.unwrap();

    // Assert
    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(sut.error_message().as_deref(), Some(NETWORK_ERROR_MESSAGE));
    assert_eq!(sut.fields(), jane(contact_api::CRASH_MESSAGE));
}

#[tokio::test]
async fn endpoint_unreachable() {
    // Arrange
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let sut = make_sut(format!("http://{addr}/website/contact_us").parse().unwrap());
    fill(&sut, "Hello");

    // Act
    let status = sut.submit().await.unwrap();

    // Assert
    assert_eq!(
        sut.state(),
        ContactFormState {
            fields: jane("Hello"),
            status,
            error_message: Some(NETWORK_ERROR_MESSAGE.into()),
        }
    );
    assert_eq!(status, SubmissionStatus::Error);
}

fn make_sut(endpoint: Url) -> ContactSubmissionFlow<ContactApiServiceImpl> {
    ContactSubmissionFlow::new(ContactApiServiceImpl::new(
        ContactApiServiceConfig {
            endpoint: Arc::new(endpoint),
        },
        HttpClient::new(None).unwrap(),
    ))
}

fn fill(sut: &ContactSubmissionFlow<ContactApiServiceImpl>, message: &str) {
    sut.update_field(ContactField::Name, "Jane Doe");
    sut.update_field(ContactField::Email, "jane@example.com");
    sut.update_field(ContactField::Message, message);
}

fn jane(message: &str) -> ContactFormFields {
    ContactFormFields {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        company: "".into(),
        interest: "".into(),
        message: message.into(),
    }
}
