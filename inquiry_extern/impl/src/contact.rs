use std::sync::Arc;

use anyhow::anyhow;
use inquiry_extern_contracts::contact::{ContactApiError, ContactApiResponse, ContactApiService};
use inquiry_models::contact::ContactFormFields;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

/// Internal status code reported by the contact endpoint on success.
const SUCCESS_STATUS_CODE: f64 = 200.0;

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    pub endpoint: Arc<Url>,
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

impl ContactApiService for ContactApiServiceImpl {
    #[tracing::instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    async fn submit(
        &self,
        fields: ContactFormFields,
    ) -> Result<ContactApiResponse, ContactApiError> {
        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .json(&fields)
            .send()
            .await
            .map_err(|err| ContactApiError::Transport(err.into()))?;

        let status = response.status();
        debug!(%status, "received response from contact endpoint");

        let body = response
            .json::<Value>()
            .await
            .map_err(|err| ContactApiError::InvalidResponse(err.into()))?;

        classify(status.is_success(), &body)
    }
}

/// Map a decoded response to success or rejection. Success requires an OK
/// transport status and a numeric `statusCode` of exactly 200 in the body.
/// A `null` body has no fields to look at and is reported as invalid.
fn classify(transport_ok: bool, body: &Value) -> Result<ContactApiResponse, ContactApiError> {
    if body.is_null() {
        return Err(ContactApiError::InvalidResponse(anyhow!(
            "contact endpoint returned a null body"
        )));
    }

    let internal_ok = body.get("statusCode").and_then(Value::as_f64) == Some(SUCCESS_STATUS_CODE);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(Into::into);

    Ok(if transport_ok && internal_ok {
        ContactApiResponse::Ok { message }
    } else {
        ContactApiResponse::Rejected { message }
    })
}
