use inquiry_config::Config;
use inquiry_email_contracts::EmailService;
use inquiry_persistence_contracts::Database;
use tracing::{info, warn};

use crate::{database, email, environment::Environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let applied = database.run_migrations(None).await?;
    for name in &applied {
        info!("Applied {name}");
    }
    if applied.is_empty() {
        info!("No migrations pending");
    }

    let email = email::connect(&config.email).await?;
    if config.contact.notification_recipient.is_some() {
        info!("Connecting to smtp server");
        email.ping().await?;
    } else {
        warn!("No notification recipient configured, inquiries will only be stored");
    }

    Environment::new(&config, database, email)?
        .rest_server()
        .serve(config.http.address)
        .await
}
