use inquiry_persistence_postgres::{PostgresDatabase, PostgresDatabaseConfig};

pub async fn setup() -> PostgresDatabase {
    let db = setup_clean().await;
    db.run_migrations(None).await.unwrap();
    db
}

pub async fn setup_clean() -> PostgresDatabase {
    let config = inquiry_config::load().unwrap();

    let db = PostgresDatabase::connect(&PostgresDatabaseConfig {
        url: config.database.url,
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        acquire_timeout: config.database.acquire_timeout.into(),
        idle_timeout: config.database.idle_timeout.map(Into::into),
        max_lifetime: config.database.max_lifetime.map(Into::into),
    })
    .await
    .unwrap();

    db.reset().await.unwrap();
    db
}
