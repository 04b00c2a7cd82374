use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entities::ContactSubmission;

const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Local storage for contact submissions
#[derive(Clone)]
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the submission log. `None` keeps it in memory for the lifetime
    /// of the process.
    pub async fn new(path: Option<&Path>) -> Result<Self> {
        let database_url = match path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
                }
                format!("sqlite://{}?mode=rwc", path.display())
            }
            None => "sqlite::memory:".to_string(),
        };

        let mut options = ConnectOptions::new(database_url.clone());
        // A memory database lives and dies with its connection
        if path.is_none() {
            options
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(MEMORY_CONNECTION_LIFETIME)
                .max_lifetime(MEMORY_CONNECTION_LIFETIME);
        }
        options.sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open submission store at {}", database_url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Create tables from the entity definitions
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut statement = schema.create_table_from_entity(ContactSubmission);
        statement.if_not_exists();
        self.conn
            .execute(backend.build(&statement))
            .await
            .context("Failed to create contact_submissions table")?;

        Ok(())
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
