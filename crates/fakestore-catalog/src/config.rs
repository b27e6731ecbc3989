//! Configuration types for catalog client construction.

use std::collections::BTreeMap;
use std::time::Duration;

use fakestore_api::types::Product;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};

/// The public FakeStore deployment.
pub const DEFAULT_STORE_URL: &str = "https://fakestoreapi.com";

/// Configuration for catalog client construction.
///
/// Deserializable so an application can embed it in its own config file.
/// Timeouts are given in seconds there.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogClientConfig {
    /// Base URL for the store API.
    pub store_url: String,
    /// Additional headers to include in requests.
    pub extra_headers: BTreeMap<String, String>,
    /// Overrides the default `User-Agent` header.
    pub user_agent: Option<String>,
    /// Time allowed to establish a connection. Unbounded if `None`.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    pub connect_timeout: Option<Duration>,
    /// Time allowed for a whole request. Unbounded if `None`.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    pub request_timeout: Option<Duration>,
    /// Mock mode for testing and offline use.
    #[serde(skip)]
    pub mock_mode: CatalogMockMode,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            extra_headers: BTreeMap::new(),
            user_agent: None,
            connect_timeout: None,
            request_timeout: None,
            mock_mode: CatalogMockMode::None,
        }
    }
}

/// Where the client sends its requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogMockMode {
    /// Use the real server at `store_url`.
    #[default]
    None,
    /// Serve a fixed catalog from an in-process mock server.
    Snapshot(CatalogSnapshot),
}

/// A fixed catalog served in [`CatalogMockMode::Snapshot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

impl CatalogSnapshot {
    /// Snapshot of `products`, listing each category in order of first
    /// appearance.
    pub fn new(products: Vec<Product>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for product in &products {
            let label = product.category.as_str();
            if !categories.iter().any(|known| known == label) {
                categories.push(label.to_string());
            }
        }
        Self {
            products,
            categories,
        }
    }
}
