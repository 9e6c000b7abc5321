use inquiry_email_contracts::{template::TemplateEmailService, Email, EmailBody, EmailService};
use inquiry_models::email_address::EmailAddressWithName;
use inquiry_templates_contracts::{ContactNotificationTemplate, Template, TemplateService};

#[derive(Debug, Clone)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<Email, Template> TemplateEmailServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template) -> Self {
        Self { email, template }
    }
}

impl<EmailS, TemplateS> TemplateEmailService for TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactNotificationTemplate,
    ) -> anyhow::Result<bool> {
        let subject = match data.interest.as_str() {
            inquiry_models::contact::INTEREST_NOT_SPECIFIED => {
                format!("New Contact Inquiry - {}", data.name)
            }
            interest => format!("New Contact Inquiry - {} [{interest}]", data.name),
        };

        self.send_email(recipient, Some(reply_to), data, subject)
            .await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        reply_to: Option<EmailAddressWithName>,
        data: &T,
        subject: impl Into<String>,
    ) -> anyhow::Result<bool> {
        let rendered = self.template.render(data)?;

        self.email
            .send(Email {
                recipient,
                subject: subject.into(),
                body: EmailBody::Alternative {
                    text: rendered.text,
                    html: rendered.html,
                },
                reply_to,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use inquiry_email_contracts::MockEmailService;
    use inquiry_templates_contracts::{MockTemplateService, RenderedTemplate};

    use super::*;

    fn data(interest: &str) -> ContactNotificationTemplate {
        ContactNotificationTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: None,
            interest: interest.into(),
            message: "Hello".into(),
            organization: "PATHSDATA".into(),
            website: "https://www.pathsdata.com".into(),
        }
    }

    fn rendered() -> RenderedTemplate {
        RenderedTemplate {
            text: "text".into(),
            html: "<p>html</p>".into(),
        }
    }

    fn expected_email(subject: &str) -> Email {
        Email {
            recipient: "inquiries@example.com".parse().unwrap(),
            subject: subject.into(),
            body: EmailBody::Alternative {
                text: "text".into(),
                html: "<p>html</p>".into(),
            },
            reply_to: Some("jane@example.com".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn subject_with_interest() {
        // Arrange
        let data = data("Generative AI");
        let template = MockTemplateService::new().with_render(data.clone(), rendered());
        let email = MockEmailService::new().with_send(
            expected_email("New Contact Inquiry - Jane Doe [Generative AI]"),
            true,
        );
        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_notification_email(
                "inquiries@example.com".parse().unwrap(),
                "jane@example.com".parse().unwrap(),
                &data,
            )
            .await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn subject_without_interest() {
        // Arrange
        let data = data("Not specified");
        let template = MockTemplateService::new().with_render(data.clone(), rendered());
        let email = MockEmailService::new()
            .with_send(expected_email("New Contact Inquiry - Jane Doe"), false);
        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_notification_email(
                "inquiries@example.com".parse().unwrap(),
                "jane@example.com".parse().unwrap(),
                &data,
            )
            .await;

        // Assert
        assert!(!result.unwrap());
    }
}
