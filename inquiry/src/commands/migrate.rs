use clap::Subcommand;
use inquiry_config::Config;
use inquiry_persistence_postgres::{MigrationStatus, PostgresDatabase};

use crate::database;

#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// List all pending and applied migrations
    #[command(aliases(["status", "s", "l"]))]
    List,
    /// Apply all pending migrations
    #[command(aliases(["u"]))]
    Up {
        /// Only apply the next `n` migrations
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Revert the last migration
    #[command(aliases(["d"]))]
    Down {
        /// Revert the last `n` migrations
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
        #[arg(long, required = true)]
        force: bool,
    },
}

impl MigrateCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let db = database::connect(&config.database).await?;
        match self {
            Self::List => list(db).await,
            Self::Up { count } => {
                print_names(&db.run_migrations(count).await?, "applied");
                Ok(())
            }
            Self::Down { count, force: _ } => {
                print_names(&db.revert_migrations(Some(count)).await?, "reverted");
                Ok(())
            }
        }
    }
}

async fn list(db: PostgresDatabase) -> anyhow::Result<()> {
    for MigrationStatus { migration, applied } in db.list_migrations().await? {
        let state = if applied { "applied" } else { "pending" };
        println!("[{state}] {}", migration.name);
    }
    Ok(())
}

fn print_names(names: &[&str], action: &str) {
    for name in names {
        println!("[{action}] {name}");
    }
    if names.is_empty() {
        println!("No migrations have been {action}.");
    }
}
