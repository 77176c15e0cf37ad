//! Common test utilities for items-rs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{CountingStore, ItemFactory, TestDatabase};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::seeded(5).await;
//!     let store = CountingStore::with_items(ItemFactory::many(3));
//!     // ...
//! }
//! ```

pub mod database;
pub mod fixtures;
pub mod store;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::ItemFactory;
pub use store::CountingStore;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
