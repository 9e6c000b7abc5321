use inquiry::commands::submit::SubmitCommand;
use inquiry_testing::contact_api::{self, FAIL_MESSAGE, FAIL_RESPONSE_MESSAGE};
use pretty_assertions::assert_eq;
use url::Url;

fn command(endpoint: Url, message: &str) -> SubmitCommand {
    SubmitCommand {
        name: Some("Jane Doe".into()),
        email: Some("jane@example.com".into()),
        company: Some("ACME".into()),
        interest: Some("data-engineering".into()),
        message: Some(message.into()),
        endpoint: Some(endpoint),
    }
}

#[tokio::test]
async fn ok() {
    let (endpoint, stub) = contact_api::spawn().await.unwrap();
    let config = inquiry_config::load().unwrap();

    command(endpoint, "Interested in data engineering services")
        .invoke(config)
        .await
        .unwrap();

    let received = stub.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].company, "ACME");
    assert_eq!(received[0].interest, "data-engineering");
}

#[tokio::test]
async fn rejected() {
    let (endpoint, _) = contact_api::spawn().await.unwrap();
    let config = inquiry_config::load().unwrap();

    let result = command(endpoint, FAIL_MESSAGE).invoke(config).await;

    assert_eq!(result.unwrap_err().to_string(), FAIL_RESPONSE_MESSAGE);
}
