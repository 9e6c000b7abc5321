use anyhow::anyhow;
use inquiry_email_contracts::{Email, EmailBody, EmailService};
use inquiry_models::email_address::EmailAddressWithName;
use inquiry_utils::Apply;
use lettre::{
    message::{MessageBuilder, MultiPart, SinglePart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub mod template;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }

    #[cfg(feature = "dummy")]
    pub async fn dummy() -> Self {
        Self::new("smtp://dummy", "dummy@example.com".parse().unwrap())
            .await
            .unwrap()
    }
}

impl EmailService for EmailServiceImpl {
    #[tracing::instrument(skip_all, fields(recipient = %email.recipient, subject = email.subject))]
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = build_message(&self.from, email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(from: &EmailAddressWithName, email: Email) -> anyhow::Result<Message> {
    let builder = Message::builder()
        .from(from.0.clone())
        .to(email.recipient.0)
        .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
        .subject(email.subject);

    let message = match email.body {
        EmailBody::Text(text) => builder.singlepart(SinglePart::plain(text)),
        EmailBody::Html(html) => builder.singlepart(SinglePart::html(html)),
        EmailBody::Alternative { text, html } => {
            builder.multipart(MultiPart::alternative_plain_html(text, html))
        }
    }?;

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(body: EmailBody) -> Email {
        Email {
            recipient: "Inquiries <inquiries@example.com>".parse().unwrap(),
            subject: "New Contact Inquiry - Jane Doe".into(),
            body,
            reply_to: Some("jane@example.com".parse().unwrap()),
        }
    }

    fn formatted(email: Email) -> String {
        let from = "Contact Form <noreply@example.com>".parse().unwrap();
        let message = build_message(&from, email).unwrap();
        String::from_utf8(message.formatted()).unwrap()
    }

    #[test]
    fn text_message() {
        let message = formatted(email(EmailBody::Text("Hello World!".into())));

        assert!(message.contains("<inquiries@example.com>"));
        assert!(message.contains("Reply-To:"));
        assert!(message.contains("jane@example.com"));
        assert!(message.contains("Subject: New Contact Inquiry - Jane Doe"));
        assert!(message.contains("Content-Type: text/plain; charset=utf-8"));
        assert!(message.contains("Hello World!"));
    }

    #[test]
    fn alternative_message() {
        let message = formatted(email(EmailBody::Alternative {
            text: "Hello World!".into(),
            html: "<h1>Hello World!</h1>".into(),
        }));

        assert!(message.contains("multipart/alternative"));
        assert!(message.contains("Content-Type: text/plain; charset=utf-8"));
        assert!(message.contains("Content-Type: text/html; charset=utf-8"));
        assert!(message.contains("<h1>Hello World!</h1>"));
    }
}
