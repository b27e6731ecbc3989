//! Catalog client for the FakeStore API.
//!
//! This crate provides:
//! - HTTP client construction from a [`CatalogClientConfig`]
//! - the catalog operations of [`ClientTrait`], including derived views
//!   (best rated, cheapest, most expensive, most voted, average price,
//!   category filter) computed from a fresh fetch on every call
//! - the pure folds behind those views in [`views`]
//! - an in-process snapshot server for tests and offline use
//! - re-exports of `fakestore-api` types for consumers
//!
//! ## Usage
//!
//! ```ignore
//! use fakestore_catalog::{CatalogClient, CatalogClientConfig, ClientTrait};
//!
//! let client = CatalogClient::new(CatalogClientConfig::default())?;
//! let cheapest = client.cheapest().await?;
//! let electronics = client.list_products_by_category("electronics").await?;
//! ```

mod client;
mod config;
mod error;
mod mock;
pub mod views;

// Public exports
// Re-export fakestore-api types so consumers only depend on this crate.
pub use client::{to_product_id, CatalogClient, ClientTrait};
pub use config::{CatalogClientConfig, CatalogMockMode, CatalogSnapshot, DEFAULT_STORE_URL};
pub use error::CatalogClientError;
pub use fakestore_api::{types, ApiError, Client as ApiClient, Route};
pub use mock::serve_snapshot;
