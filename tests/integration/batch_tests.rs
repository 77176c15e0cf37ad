//! Batch processing integration tests

#[cfg(test)]
mod tests {
    use crate::common::{CountingStore, ItemFactory, TestDatabase};
    use crate::{assert_err, assert_ok};
    use items_rs::core::batch::{BatchError, BatchProcessor, TaskFailure, WorkerPool};
    use items_rs::core::models::{Item, ItemId};
    use items_rs::storage::ItemStore;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;

    fn processor(store: Arc<dyn ItemStore>, pool_size: usize) -> BatchProcessor {
        BatchProcessor::new(
            store,
            Arc::new(WorkerPool::new(pool_size)),
            Duration::from_millis(2),
        )
    }

    fn ids(items: &[Item]) -> Vec<ItemId> {
        items.iter().filter_map(|item| item.id).collect()
    }

    #[tokio::test]
    async fn test_every_item_is_processed_once() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(25)));
        let processor = processor(store.clone(), 5);

        let items = assert_ok!(processor.process_all().await);

        assert_eq!(ids(&items), (1..=25).collect::<Vec<_>>());
        assert!(items.iter().all(Item::is_processed));
        assert_eq!(store.fetch_count(), 25);
        assert_eq!(store.save_count(), 25);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_hundred_items_never_lose_or_duplicate_results() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(100)));
        let processor = processor(store.clone(), 10);

        for _ in 0..5 {
            let report = assert_ok!(processor.process_all_report().await);
            let distinct: HashSet<_> = ids(&report.processed).into_iter().collect();

            assert_eq!(report.processed.len(), 100);
            assert_eq!(distinct.len(), 100);
            assert_eq!(report.processed_count, 100);
            assert!(report.failed.is_empty());
        }
        assert_eq!(processor.total_processed(), 500);
    }

    #[tokio::test]
    async fn test_vanished_item_fails_batch_but_others_are_saved() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(5)));
        store.vanish(3);
        let processor = processor(store.clone(), 2);

        let err = assert_err!(processor.process_all().await);
        let BatchError::Aggregate {
            first,
            succeeded,
            total,
            ..
        } = err
        else {
            panic!("expected aggregate failure");
        };
        assert_eq!(first, TaskFailure::NotFound { id: 3 });
        assert_eq!((succeeded, total), (4, 5));

        // Completed tasks persisted their work
        let saved: HashSet<_> = ids(&store.saved_items()).into_iter().collect();
        assert_eq!(saved, HashSet::from([1, 2, 4, 5]));
        assert!(store.saved_items().iter().all(Item::is_processed));
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(8)));
        let processor = processor(store.clone(), 3);

        let first = assert_ok!(processor.process_all().await);
        store.reset_counts();
        let second = assert_ok!(processor.process_all().await);

        assert_eq!(first.len(), second.len());
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(store.save_count(), 8);

        let stored = assert_ok!(store.find_all().await);
        assert!(stored.iter().all(Item::is_processed));
    }

    #[tokio::test]
    async fn test_empty_store_returns_empty_list() {
        let store = Arc::new(CountingStore::default());
        let processor = processor(store.clone(), 3);

        let items = assert_ok!(processor.process_all().await);

        assert!(items.is_empty());
        assert_eq!(store.fetch_count(), 0);
        assert_eq!(processor.pool().stats().submitted, 0);
    }

    #[tokio::test]
    async fn test_items_added_after_snapshot_are_not_processed() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(3)));
        let pool = Arc::new(WorkerPool::new(1));
        let processor =
            BatchProcessor::new(store.clone(), pool, Duration::from_millis(20));

        let handle = assert_ok!(processor.start().await);
        assert_ok!(store.save(ItemFactory::create()).await);

        let items = assert_ok!(handle.join().await);
        assert_eq!(ids(&items), vec![1, 2, 3]);

        let late = assert_ok!(store.find_by_id(4).await).unwrap();
        assert!(!late.is_processed());
    }

    #[tokio::test]
    async fn test_shutdown_during_batch_interrupts_remaining_tasks() {
        let store = Arc::new(CountingStore::with_items(ItemFactory::many(4)));
        let pool = Arc::new(WorkerPool::new(2));
        let processor =
            BatchProcessor::new(store.clone(), Arc::clone(&pool), Duration::from_secs(60));

        let handle = assert_ok!(processor.start().await);
        tokio::time::sleep(Duration::from_millis(20)).await;
        pool.shutdown().await;

        let err = assert_err!(handle.join().await);
        let BatchError::Aggregate { failures, .. } = err else {
            panic!("expected aggregate failure");
        };
        assert_eq!(failures.len(), 4);
        assert!(failures.iter().all(TaskFailure::is_interrupted));
        assert_eq!(store.save_count(), 0);

        // Shutting down again is harmless
        pool.shutdown().await;
        assert_eq!(pool.stats().interrupted, 4);
    }

    #[tokio::test]
    async fn test_batch_over_database_store() {
        let db = TestDatabase::seeded(12).await;
        let processor = processor(db.store(), 4);

        let items = assert_ok!(processor.process_all().await);
        assert_eq!(items.len(), 12);

        let stored = assert_ok!(db.store().find_all().await);
        assert!(stored.iter().all(Item::is_processed));
    }
}
