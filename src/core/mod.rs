//! Core functionality for the item service
//!
//! This module contains the item model, the item service, and the batch engine.

pub mod batch;
pub mod items;
pub mod models;

pub use items::ItemService;
