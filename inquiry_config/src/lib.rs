use std::{net::SocketAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use inquiry_models::email_address::EmailAddressWithName;
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable listing additional config files, separated by `:`.
pub const CONFIG_PATHS_ENV: &str = "INQUIRY_CONFIG";

/// Prefix of environment variables overriding single config keys, e.g.
/// `INQUIRY__CLIENT__ENDPOINT`.
pub const ENV_PREFIX: &str = "INQUIRY";

/// Load the default config file, followed by the files listed in
/// `INQUIRY_CONFIG` and the environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let extra = std::env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = std::iter::once(DEFAULT_CONFIG_PATH)
        .chain(extra.split(':').filter(|path| !path.is_empty()))
        .collect::<Vec<_>>();
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Load the given config files in order and apply the TOML snippets in
/// `overrides` on top of them.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub health: HealthConfig,
    pub contact: ContactConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub notification_recipient: Option<EmailAddressWithName>,
    pub organization_name: String,
    pub organization_website: Url,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[DEFAULT_CONFIG_PATH]).unwrap();
        assert!(config.client.timeout.is_none());
        assert!(config.contact.notification_recipient.is_some());
        assert_eq!(config.contact.organization_name, "PATHSDATA");
    }

    #[test]
    fn override_keys() {
        let config = load_with_override(
            &[DEFAULT_CONFIG_PATH],
            &[
                "client.endpoint = \"http://localhost:1234/contact\"",
                "client.timeout = \"5s\"",
            ],
        )
        .unwrap();
        assert_eq!(
            config.client.endpoint.as_str(),
            "http://localhost:1234/contact"
        );
        assert_eq!(
            config.client.timeout.map(Into::into),
            Some(std::time::Duration::from_secs(5))
        );
    }

    #[test]
    fn missing_file() {
        assert!(load_paths(&["/does/not/exist.toml"]).is_err());
    }
}
