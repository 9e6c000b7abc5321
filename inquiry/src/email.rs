use anyhow::Context;
use inquiry_config::EmailConfig;
use inquiry_email_impl::EmailServiceImpl;

/// Prepare the SMTP transport. No connection is made until the first email is
/// sent or the server is pinged.
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&config.smtp_url, config.from.clone())
        .await
        .with_context(|| format!("Invalid SMTP url {:?}", config.smtp_url))
}
