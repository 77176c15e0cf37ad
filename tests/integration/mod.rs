//! Integration tests for items-rs
//!
//! These tests exercise the batch processor, storage backends, HTTP API and
//! configuration together, without mocking.

pub mod api_tests;
pub mod batch_tests;
pub mod database_tests;
