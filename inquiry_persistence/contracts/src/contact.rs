use std::future::Future;

use inquiry_models::contact::{ContactInquiry, ContactInquiryId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the inquiry with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        id: ContactInquiryId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactInquiry>>> + Send;

    /// Store a new inquiry.
    fn create(
        &self,
        txn: &mut Txn,
        inquiry: &ContactInquiry,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactRepository<Txn> {
    pub fn with_create(mut self, inquiry: ContactInquiry, result: anyhow::Result<()>) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(inquiry))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
