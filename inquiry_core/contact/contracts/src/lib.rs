use std::future::Future;

use inquiry_models::contact::{ContactField, ContactFormFields, ContactInquiry};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate and store a contact inquiry and notify the configured
    /// recipient about it.
    fn submit(
        &self,
        fields: ContactFormFields,
    ) -> impl Future<Output = Result<ContactInquiry, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Missing required fields: name, email, and message are required.")]
    MissingFields,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Field '{0}' is too long.")]
    FieldTooLong(ContactField),
    #[error("Failed to send notification.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        fields: ContactFormFields,
        result: Result<ContactInquiry, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
