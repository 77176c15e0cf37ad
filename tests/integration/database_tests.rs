//! Database integration tests
//!
//! Tests item persistence using a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{ItemFactory, TestDatabase};
    use items_rs::config::{DatabaseConfig, StorageConfig};
    use items_rs::storage::database::{Database, DatabaseBackendType};
    use items_rs::storage::{ItemStore, StorageLayer, StorageBackend};

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);

        let health = db.db().health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    /// Running migrations twice is a no-op
    #[tokio::test]
    async fn test_database_migration_is_repeatable() {
        let db = TestDatabase::new().await;
        let result = db.db().migrate().await;
        assert!(result.is_ok(), "Second migration failed: {:?}", result.err());
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let db = TestDatabase::seeded(3).await;

        let ids = assert_ok!(db.db().find_all_ids().await);
        assert_eq!(ids, vec![1, 2, 3]);

        let items = assert_ok!(db.db().find_all().await);
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| !item.is_processed()));
    }

    #[tokio::test]
    async fn test_save_updates_existing_row() {
        let db = TestDatabase::seeded(1).await;

        let mut item = assert_ok!(db.db().find_by_id(1).await).unwrap();
        item.mark_processed();
        item.email = "changed@example.com".to_string();
        assert_ok!(db.db().save(item).await);

        let stored = assert_ok!(db.db().find_by_id(1).await).unwrap();
        assert!(stored.is_processed());
        assert_eq!(stored.email, "changed@example.com");
        assert_eq!(assert_ok!(db.db().find_all_ids().await), vec![1]);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = TestDatabase::seeded(2).await;

        assert_ok!(db.db().delete_by_id(1).await);

        assert!(assert_ok!(db.db().find_by_id(1).await).is_none());
        assert_eq!(assert_ok!(db.db().find_all_ids().await), vec![2]);
    }

    #[tokio::test]
    async fn test_explicit_id_insert() {
        let db = TestDatabase::new().await;

        let saved = assert_ok!(db.db().save(ItemFactory::with_id(42)).await);
        assert_eq!(saved.id, Some(42));
        assert!(assert_ok!(db.db().find_by_id(42).await).is_some());
    }

    #[tokio::test]
    async fn test_storage_layer_uses_database_when_enabled() {
        let config = StorageConfig {
            database: TestDatabase::config(),
        };

        let storage = assert_ok!(StorageLayer::new(&config).await);
        assert_eq!(storage.backend(), StorageBackend::Database);

        let saved = assert_ok!(storage.items().save(ItemFactory::create()).await);
        assert_eq!(saved.id, Some(1));
        assert!(storage.health_check().await.healthy);
    }

    #[tokio::test]
    async fn test_invalid_url_fails_to_connect() {
        let config = DatabaseConfig {
            url: "sqlite:///nonexistent/dir/items.db".to_string(),
            connection_timeout: 1,
            ..TestDatabase::config()
        };

        assert!(Database::new(&config).await.is_err());
    }
}
