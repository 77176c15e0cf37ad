//! Health check endpoint

use crate::BuildInfo;
use crate::core::batch::PoolStats;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::StorageHealthStatus;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// "healthy" or "degraded"
    pub status: Cow<'static, str>,
    /// Check time
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Crate version
    pub version: Cow<'static, str>,
    /// Build metadata
    pub build: BuildInfo,
    /// Storage backend status
    pub storage: StorageHealthStatus,
    /// Worker pool counters
    pub pool: PoolStats,
    /// Items processed by batches since startup
    pub total_processed: u64,
}

/// Returns 200 when storage answers and the pool accepts work, 503 otherwise
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let storage = state.storage.health_check().await;
    let healthy = storage.healthy && !state.pool.is_shut_down();

    let health = HealthStatus {
        status: Cow::Borrowed(if healthy { "healthy" } else { "degraded" }),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build: crate::build_info(),
        storage,
        pool: state.pool.stats(),
        total_processed: state.items.processor().total_processed(),
    };

    if healthy {
        Ok(HttpResponse::Ok().json(ApiResponse::success(health)))
    } else {
        warn!("Health check reported degraded service");
        Ok(HttpResponse::ServiceUnavailable().json(ApiResponse::failure("Service degraded", health)))
    }
}
