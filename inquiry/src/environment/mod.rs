use inquiry_config::Config;
use inquiry_core_contact_impl::ContactFeatureConfig;
use inquiry_core_health_impl::HealthFeatureConfig;
use types::{
    ContactFeature, ContactRepo, Database, Email, HealthFeature, Id, RestServer, Template,
    TemplateEmail, Time,
};

pub mod types;

/// Wires the services of the REST API together.
#[derive(Debug, Clone)]
pub struct Environment {
    database: Database,
    email: Email,
    template: Template,
    contact_feature_config: ContactFeatureConfig,
    health_feature_config: HealthFeatureConfig,
}

impl Environment {
    pub fn new(config: &Config, database: Database, email: Email) -> anyhow::Result<Self> {
        let contact_feature_config = ContactFeatureConfig {
            notification_recipient: config.contact.notification_recipient.clone(),
            organization: config.contact.organization_name.clone(),
            website: config.contact.organization_website.to_string(),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
            check_email: config.contact.notification_recipient.is_some(),
        };

        Ok(Self {
            database,
            email,
            template: Template::new()?,
            contact_feature_config,
            health_feature_config,
        })
    }

    pub fn rest_server(self) -> RestServer {
        let health = HealthFeature::new(
            Time::default(),
            self.database.clone(),
            self.email.clone(),
            self.health_feature_config,
        );

        let contact = ContactFeature::new(
            self.database,
            Id::default(),
            Time::default(),
            ContactRepo::default(),
            TemplateEmail::new(self.email, self.template),
            self.contact_feature_config,
        );

        RestServer::new(health, contact)
    }
}

#[cfg(test)]
mod tests {
    use inquiry_email_impl::EmailServiceImpl;
    use inquiry_persistence_postgres::PostgresDatabase;

    use super::*;

    #[tokio::test]
    async fn rest_server() {
        let config = inquiry_config::load().unwrap();
        let env = Environment::new(
            &config,
            PostgresDatabase::dummy(),
            EmailServiceImpl::dummy().await,
        )
        .unwrap();

        let _server: RestServer = env.rest_server();
    }

    #[tokio::test]
    async fn email_health_follows_notification_recipient() {
        let mut config = inquiry_config::load().unwrap();
        config.contact.notification_recipient = None;

        let env = Environment::new(
            &config,
            PostgresDatabase::dummy(),
            EmailServiceImpl::dummy().await,
        )
        .unwrap();

        assert!(!env.health_feature_config.check_email);
    }
}
