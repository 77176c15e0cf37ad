use crate::config::DatabaseConfig;
use crate::core::models::{Item, ItemId};
use crate::storage::ItemStore;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::entities::{self, item};
use super::migration::Migrator;

/// Database backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    /// PostgreSQL database
    PostgreSQL,
    /// SQLite database
    SQLite,
}

impl DatabaseBackendType {
    fn from_url(url: &str) -> Self {
        if url.starts_with("sqlite") {
            Self::SQLite
        } else {
            Self::PostgreSQL
        }
    }
}

/// SeaORM-based item store
#[derive(Debug)]
pub struct SeaOrmDatabase {
    db: DatabaseConnection,
    backend_type: DatabaseBackendType,
}

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = DatabaseBackendType::from_url(&config.url);
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        if is_in_memory(&config.url) {
            // Every pooled connection would open its own private database
            opt.max_connections(1);
        } else {
            opt.max_connections(config.max_connections)
                .idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(3600));
        }

        let db = Database::connect(opt)
            .await
            .map_err(ServiceError::Database)?;

        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            ServiceError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite") && url.contains(":memory:")
}

#[async_trait]
impl ItemStore for SeaOrmDatabase {
    async fn find_all(&self) -> Result<Vec<Item>> {
        debug!("Finding all items");

        let models = entities::Item::find()
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(models.iter().map(item::Model::to_domain_item).collect())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        debug!("Finding item by ID: {}", id);

        let model = entities::Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.map(|m| m.to_domain_item()))
    }

    async fn find_all_ids(&self) -> Result<Vec<ItemId>> {
        entities::Item::find()
            .select_only()
            .column(item::Column::Id)
            .order_by_asc(item::Column::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    async fn save(&self, item: Item) -> Result<Item> {
        let active = item::Model::from_domain_item(&item);

        let model = match item.id {
            Some(id) => {
                let exists = entities::Item::find_by_id(id)
                    .one(&self.db)
                    .await
                    .map_err(ServiceError::Database)?
                    .is_some();

                if exists {
                    debug!("Updating item: {}", id);
                    active.update(&self.db).await
                } else {
                    debug!("Inserting item with explicit ID: {}", id);
                    active.insert(&self.db).await
                }
            }
            None => {
                debug!("Inserting new item");
                active.insert(&self.db).await
            }
        }
        .map_err(ServiceError::Database)?;

        Ok(model.to_domain_item())
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<()> {
        debug!("Deleting item: {}", id);

        entities::Item::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        entities::Item::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        info!("Closing database connection ({:?})", self.backend_type);
        // Handles share one pool, closing a clone closes it for all of them
        self.db.clone().close().await.map_err(ServiceError::Database)
    }
}
