//! HTTP API integration tests

#[cfg(test)]
mod tests {
    use crate::common::{CountingStore, ItemFactory};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use items_rs::config::{BatchConfig, Config};
    use items_rs::core::batch::WorkerPool;
    use items_rs::core::models::Item;
    use items_rs::server::{AppState, create_app};
    use items_rs::storage::{StorageBackend, StorageLayer};
    use items_rs::utils::error::ErrorResponse;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;

    fn state_with(store: Arc<CountingStore>) -> AppState {
        let mut config = Config::default();
        config.service.batch = BatchConfig::default()
            .with_pool_size(3)
            .with_processing_delay(Duration::from_millis(1));

        let pool = Arc::new(WorkerPool::from_config(config.batch()));
        AppState::new(
            config,
            StorageLayer::with_store(store, StorageBackend::Memory),
            pool,
        )
    }

    #[actix_web::test]
    async fn test_crud_round() {
        let store = Arc::new(CountingStore::default());
        let app = test::init_service(create_app(web::Data::new(state_with(store)))).await;

        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(json!({
                "id": 77,
                "name": "Widget",
                "description": "A widget",
                "status": "NEW",
                "email": "ops@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Item = test::read_body_json(resp).await;
        // Client-supplied ids are ignored on create
        assert_eq!(created.id, Some(1));

        let req = test::TestRequest::put()
            .uri("/api/items/1")
            .set_json(json!({
                "name": "Gadget",
                "description": "A gadget",
                "status": "NEW",
                "email": "ops@example.com"
            }))
            .to_request();
        let updated: Item = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.name, "Gadget");

        let req = test::TestRequest::get().uri("/api/items").to_request();
        let all: Vec<Item> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all, vec![updated]);

        let req = test::TestRequest::delete().uri("/api/items/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/api/items/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_missing_item_is_404() {
        let store = Arc::new(CountingStore::default());
        let app = test::init_service(create_app(web::Data::new(state_with(store)))).await;

        let req = test::TestRequest::put()
            .uri("/api/items/5")
            .set_json(json!({
                "name": "Ghost",
                "description": "",
                "status": "NEW",
                "email": "ghost@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_process_returns_every_item() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(6)));
        let app = test::init_service(create_app(web::Data::new(state_with(store.clone())))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let items: Vec<Item> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(items.len(), 6);
        assert!(items.iter().all(Item::is_processed));
        assert_eq!(store.save_count(), 6);
    }

    #[actix_web::test]
    async fn test_process_failure_is_batch_failed() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(3)));
        store.vanish(2);
        let app = test::init_service(create_app(web::Data::new(state_with(store.clone())))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "BATCH_FAILED");
        assert!(body.error.message.contains("Item not found: 2"));
        assert_eq!(store.save_count(), 2);
    }

    #[actix_web::test]
    async fn test_process_report_lists_failures() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(3)));
        store.vanish(1);
        let app = test::init_service(create_app(web::Data::new(state_with(store)))).await;

        let req = test::TestRequest::get()
            .uri("/api/items/process/report")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["total"], 3);
        assert_eq!(body["processed_count"], 2);
        assert_eq!(body["processed"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["failed"][0]["kind"], "not_found");
        assert_eq!(body["failed"][0]["id"], 1);
    }

    #[actix_web::test]
    async fn test_process_after_shutdown_is_unavailable() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(2)));
        let state = state_with(store);
        state.pool.shutdown().await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_empty_process_is_empty_list() {
        let store = Arc::new(CountingStore::default());
        let app = test::init_service(create_app(web::Data::new(state_with(store)))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let items: Vec<Item> = test::call_and_read_body_json(&app, req).await;
        assert!(items.is_empty());

        let req = test::TestRequest::get()
            .uri("/api/items/process/report")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 0);
        assert_eq!(body["failed"], json!([]));
    }
}
