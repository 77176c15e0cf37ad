//! Core data models for the item service

pub mod item;

pub use item::{Item, ItemId, STATUS_PROCESSED};
