use std::{io::Write, sync::Arc};

use anyhow::{bail, Context};
use clap::{builder::PossibleValuesParser, Args};
use inquiry_client::ContactSubmissionFlow;
use inquiry_config::Config;
use inquiry_extern_impl::{
    contact::{ContactApiServiceConfig, ContactApiServiceImpl},
    http::HttpClient,
};
use inquiry_models::contact::{ContactField, ContactInterest, SubmissionStatus};
use url::Url;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Your name, prompted for if omitted
    #[arg(long)]
    pub name: Option<String>,
    /// Your email address, prompted for if omitted
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    /// The service you are interested in
    #[arg(long, value_parser = PossibleValuesParser::new(ContactInterest::ALL.map(ContactInterest::tag)))]
    pub interest: Option<String>,
    /// Your message, prompted for if omitted
    #[arg(long)]
    pub message: Option<String>,
    /// Send the inquiry to this url instead of the configured endpoint
    #[arg(long)]
    pub endpoint: Option<Url>,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let endpoint = self.endpoint.clone().unwrap_or(config.client.endpoint);
        let client = HttpClient::new(config.client.timeout.map(Into::into))?;
        let api = ContactApiServiceImpl::new(
            ContactApiServiceConfig {
                endpoint: Arc::new(endpoint),
            },
            client,
        );

        let flow = ContactSubmissionFlow::new(api);
        for (field, value) in self.into_values(prompt)? {
            flow.update_field(field, value);
        }

        match flow.submit().await? {
            SubmissionStatus::Success => {
                println!("Your message has been sent.");
                Ok(())
            }
            _ => bail!("{}", flow.error_message().unwrap_or_default()),
        }
    }

    /// Values of all fields. Required fields which have not been passed on the
    /// command line are read using `prompt`.
    fn into_values(
        self,
        mut prompt: impl FnMut(ContactField) -> anyhow::Result<String>,
    ) -> anyhow::Result<Vec<(ContactField, String)>> {
        let Self {
            name,
            email,
            company,
            interest,
            message,
            endpoint: _,
        } = self;

        [
            (ContactField::Name, name),
            (ContactField::Email, email),
            (ContactField::Company, company),
            (ContactField::Interest, interest),
            (ContactField::Message, message),
        ]
        .into_iter()
        .map(|(field, value)| match value {
            Some(value) => Ok((field, value)),
            None if field.is_required() => prompt(field).map(|value| (field, value)),
            None => Ok((field, String::new())),
        })
        .collect()
    }
}

fn prompt(field: ContactField) -> anyhow::Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{field}: ")?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).into())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn command() -> SubmitCommand {
        SubmitCommand {
            name: None,
            email: Some("jane@example.com".into()),
            company: None,
            interest: Some("genai".into()),
            message: None,
            endpoint: None,
        }
    }

    #[test]
    fn prompts_for_missing_required_fields() {
        let mut prompted = Vec::new();

        let values = command()
            .into_values(|field| {
                prompted.push(field);
                Ok(format!("<{field}>"))
            })
            .unwrap();

        assert_eq!(prompted, [ContactField::Name, ContactField::Message]);
        assert_eq!(
            values,
            [
                (ContactField::Name, "<name>".into()),
                (ContactField::Email, "jane@example.com".into()),
                (ContactField::Company, "".into()),
                (ContactField::Interest, "genai".into()),
                (ContactField::Message, "<message>".into()),
            ]
        );
    }

    #[test]
    fn prompt_error() {
        let result = command().into_values(|_| Err(anyhow::anyhow!("stdin closed")));

        assert!(result.is_err());
    }
}
