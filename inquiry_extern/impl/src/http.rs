use std::{ops::Deref, sync::LazyLock, time::Duration};

use anyhow::Context;
use inquiry_utils::inquiry_version;

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let version = inquiry_version();

    format!("Inquiry Contact Client ({homepage}, Version {version})")
});

const _: () = {
    assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());
};

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    /// Build a client. Without `timeout` requests wait as long as the
    /// connection stays open.
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let builder = reqwest::Client::builder().user_agent(&*USER_AGENT);
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        builder
            .build()
            .map(Self)
            .context("Failed to build http client")
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
