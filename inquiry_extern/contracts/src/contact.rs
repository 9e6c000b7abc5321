use std::future::Future;

use inquiry_models::contact::ContactFormFields;
use thiserror::Error;

/// Client of the remote contact endpoint.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Post the form fields to the contact endpoint and classify the answer.
    ///
    /// Exactly one request is issued; nothing is retried.
    fn submit(
        &self,
        fields: ContactFormFields,
    ) -> impl Future<Output = Result<ContactApiResponse, ContactApiError>> + Send;
}

/// A response that could be read from the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactApiResponse {
    /// The transport status was OK and the body reported `statusCode` 200.
    Ok { message: Option<String> },
    /// Anything else, with the message supplied by the server (if any).
    Rejected { message: Option<String> },
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    #[error("Failed to reach the contact endpoint: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("Failed to decode the response of the contact endpoint: {0}")]
    InvalidResponse(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(
        mut self,
        fields: ContactFormFields,
        result: Result<ContactApiResponse, ContactApiError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
