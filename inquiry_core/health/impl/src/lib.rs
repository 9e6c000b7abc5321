use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use inquiry_core_health_contracts::{HealthFeatureService, HealthStatus};
use inquiry_email_contracts::EmailService;
use inquiry_persistence_contracts::Database;
use inquiry_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Time, Db, Email> {
    time: Time,
    db: Db,
    email: Email,
    config: HealthFeatureConfig,
    cache: Arc<RwLock<Option<CachedStatus>>>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
    /// Whether the smtp server is part of the status. If not, `email` is
    /// always reported as up.
    pub check_email: bool,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Db, Email> HealthFeatureServiceImpl<Time, Db, Email> {
    pub fn new(time: Time, db: Db, email: Email, config: HealthFeatureConfig) -> Self {
        Self {
            time,
            db,
            email,
            config,
            cache: Default::default(),
        }
    }

    fn fresh(&self, cached: &Option<CachedStatus>, now: DateTime<Utc>) -> Option<HealthStatus> {
        cached
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
            .map(|c| c.status)
    }
}

impl<Time, Db, Email> HealthFeatureService for HealthFeatureServiceImpl<Time, Db, Email>
where
    Time: TimeService,
    Db: Database,
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        if let Some(status) = self.fresh(&*self.cache.read().await, now) {
            return status;
        }

        let mut cache = self.cache.write().await;
        if let Some(status) = self.fresh(&cache, now) {
            return status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err:#}"))
            .is_ok();

        let email = !self.config.check_email
            || self
                .email
                .ping()
                .await
                .inspect_err(|err| error!("Failed to ping smtp server: {err:#}"))
                .is_ok();

        let status = HealthStatus { database, email };
        *cache = Some(CachedStatus {
            status,
            timestamp: now,
        });
        status
    }
}
