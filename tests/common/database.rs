//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database through SeaORM.

use super::fixtures::ItemFactory;
use items_rs::config::DatabaseConfig;
use items_rs::storage::ItemStore;
use items_rs::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Configuration for an in-memory database
    pub fn config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: 5,
            enabled: true,
        }
    }

    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let db = Database::new(&Self::config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a database holding `count` unprocessed items
    pub async fn seeded(count: usize) -> Self {
        let db = Self::new().await;
        for item in ItemFactory::many(count) {
            db.db().save(item).await.expect("Failed to seed item");
        }
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get the database as a shared item store
    pub fn store(&self) -> Arc<dyn ItemStore> {
        self.inner.clone()
    }
}
