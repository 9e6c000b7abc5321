use anyhow::Context;
use inquiry_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use inquiry_email_contracts::template::TemplateEmailService;
use inquiry_models::{
    contact::{
        ContactField, ContactFormFields, ContactInquiry, ContactInquiryCompany,
        ContactInquiryMessage, ContactInquiryName, ContactInterestTag,
    },
    email_address::{EmailAddress, EmailAddressWithName},
};
use inquiry_persistence_contracts::{contact::ContactRepository, Database, Transaction};
use inquiry_shared_contracts::{id::IdService, time::TimeService};
use inquiry_templates_contracts::ContactNotificationTemplate;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Db, Id, Time, ContactRepo, TemplateEmail> {
    db: Db,
    id: Id,
    time: Time,
    contact_repo: ContactRepo,
    template_email: TemplateEmail,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Inquiries are only stored if this is not set.
    pub notification_recipient: Option<EmailAddressWithName>,
    pub organization: String,
    pub website: String,
}

impl<Db, Id, Time, ContactRepo, TemplateEmail>
    ContactFeatureServiceImpl<Db, Id, Time, ContactRepo, TemplateEmail>
{
    pub fn new(
        db: Db,
        id: Id,
        time: Time,
        contact_repo: ContactRepo,
        template_email: TemplateEmail,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            db,
            id,
            time,
            contact_repo,
            template_email,
            config,
        }
    }
}

impl<Db, Id, Time, ContactRepo, TemplateEmail> ContactFeatureService
    for ContactFeatureServiceImpl<Db, Id, Time, ContactRepo, TemplateEmail>
where
    Db: Database,
    Id: IdService,
    Time: TimeService,
    ContactRepo: ContactRepository<Db::Transaction>,
    TemplateEmail: TemplateEmailService,
{
    #[tracing::instrument(skip_all)]
    async fn submit(&self, fields: ContactFormFields) -> Result<ContactInquiry, ContactSubmitError> {
        let inquiry = self.validate(fields)?;

        let mut txn = self.db.begin_transaction().await?;
        self.contact_repo
            .create(&mut txn, &inquiry)
            .await
            .context("Failed to save contact inquiry")?;
        txn.commit().await?;

        info!(id = %inquiry.id, "contact inquiry saved");

        if let Some(recipient) = &self.config.notification_recipient {
            self.notify(recipient.clone(), &inquiry).await?;
        }

        Ok(inquiry)
    }
}

impl<Db, Id, Time, ContactRepo, TemplateEmail>
    ContactFeatureServiceImpl<Db, Id, Time, ContactRepo, TemplateEmail>
where
    Id: IdService,
    Time: TimeService,
    TemplateEmail: TemplateEmailService,
{
    fn validate(&self, fields: ContactFormFields) -> Result<ContactInquiry, ContactSubmitError> {
        let ContactFormFields {
            name,
            email,
            company,
            interest,
            message,
        } = fields;
        let trimmed = ContactFormFields {
            name: name.trim().into(),
            email: email.trim().into(),
            company: company.trim().into(),
            interest: interest.trim().into(),
            message: message.trim().into(),
        };

        if !trimmed.missing_required().is_empty() {
            return Err(ContactSubmitError::MissingFields);
        }

        let email = parse_email(&trimmed.email).ok_or(ContactSubmitError::InvalidEmail)?;

        let name = ContactInquiryName::try_new(trimmed.name)
            .map_err(too_long(ContactField::Name))?;
        let company = non_empty(trimmed.company)
            .map(ContactInquiryCompany::try_new)
            .transpose()
            .map_err(too_long(ContactField::Company))?;
        let interest = non_empty(trimmed.interest)
            .map(ContactInterestTag::try_new)
            .transpose()
            .map_err(too_long(ContactField::Interest))?;
        let message = ContactInquiryMessage::try_new(trimmed.message)
            .map_err(too_long(ContactField::Message))?;

        Ok(ContactInquiry {
            id: self.id.generate(),
            name,
            email,
            company,
            interest,
            message,
            created_at: self.time.now(),
        })
    }

    async fn notify(
        &self,
        recipient: EmailAddressWithName,
        inquiry: &ContactInquiry,
    ) -> Result<(), ContactSubmitError> {
        let reply_to = inquiry.email.clone().with_name(String::clone(&inquiry.name));
        let data = ContactNotificationTemplate {
            name: String::clone(&inquiry.name),
            email: inquiry.email.to_string(),
            company: inquiry.company.as_deref().cloned(),
            interest: inquiry.interest_label().into_owned(),
            message: String::clone(&inquiry.message),
            organization: self.config.organization.clone(),
            website: self.config.website.clone(),
        };

        if !self
            .template_email
            .send_contact_notification_email(recipient, reply_to, &data)
            .await?
        {
            warn!(id = %inquiry.id, "contact notification was not accepted");
            return Err(ContactSubmitError::Send);
        }

        Ok(())
    }
}

fn parse_email(email: &str) -> Option<EmailAddress> {
    if !email.contains('@') || !email.contains('.') {
        return None;
    }
    email.parse().ok()
}

fn too_long<E>(field: ContactField) -> impl FnOnce(E) -> ContactSubmitError {
    move |_| ContactSubmitError::FieldTooLong(field)
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
