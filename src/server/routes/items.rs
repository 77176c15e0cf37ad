//! Item endpoints
//!
//! CRUD over `/api/items` plus the batch endpoints. `/process` is registered
//! ahead of `/{id}` so it never reaches the id extractor.

use crate::core::models::{Item, ItemId};
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_web::{HttpResponse, web};
use tracing::info;

/// Configure item routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/items")
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/process", web::get().to(process_items))
            .route("/process/report", web::get().to(process_items_report))
            .route("/{id}", web::get().to(get_item))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}

/// GET /api/items
pub async fn list_items(state: web::Data<AppState>) -> Result<HttpResponse> {
    let items = state.items.find_all().await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/items/{id}
pub async fn get_item(state: web::Data<AppState>, path: web::Path<ItemId>) -> Result<HttpResponse> {
    let id = path.into_inner();

    match state.items.find_by_id(id).await? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(ServiceError::not_found(format!("Item {} not found", id))),
    }
}

/// POST /api/items
pub async fn create_item(
    state: web::Data<AppState>,
    payload: web::Json<Item>,
) -> Result<HttpResponse> {
    let mut item = payload.into_inner();
    // Identifiers are always assigned by storage
    item.id = None;

    let created = state.items.save(item).await?;
    info!(item_id = ?created.id, "Item created");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/items/{id}
pub async fn update_item(
    state: web::Data<AppState>,
    path: web::Path<ItemId>,
    payload: web::Json<Item>,
) -> Result<HttpResponse> {
    let updated = state
        .items
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    state: web::Data<AppState>,
    path: web::Path<ItemId>,
) -> Result<HttpResponse> {
    state.items.delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/items/process
///
/// Responds with every processed item, or with a `BATCH_FAILED` error if
/// any item could not be processed.
pub async fn process_items(state: web::Data<AppState>) -> Result<HttpResponse> {
    let items = state.items.process_all().await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/items/process/report
pub async fn process_items_report(state: web::Data<AppState>) -> Result<HttpResponse> {
    let report = state.items.process_all_report().await?;
    Ok(HttpResponse::Ok().json(report))
}
