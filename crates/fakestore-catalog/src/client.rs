//! Catalog client wrapper around the typed API client.

use std::fmt::Debug;
use std::str::FromStr;

use fakestore_api::types::{Product, ProductId};
use fakestore_api::{Client as APIClient, Error as APIError};
use futures::future::try_join_all;
use reqwest::header::{self, HeaderMap};
use reqwest::StatusCode;
use tracing::{debug, instrument};
use url::Url;

use crate::config::CatalogClientConfig;
use crate::error::{is_missing_product, CatalogClientError};
use crate::mock::MockGuard;
use crate::views;

/// A client for the store catalog.
///
/// This is a wrapper around the typed API client that handles:
/// - HTTP client configuration (headers, user agent, optional timeouts)
/// - mapping API errors onto [`CatalogClientError`]
/// - serving a fixed catalog in-process when configured to
pub struct CatalogClient {
    client: APIClient,
    config: CatalogClientConfig,

    _mock_guard: Option<MockGuard>,
}

impl Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("store_url", &self.config.store_url)
            .field("mock", &self._mock_guard)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: CatalogClientConfig) -> Result<Self, CatalogClientError> {
        // serve a snapshot if configured
        let mock_guard = MockGuard::new(&config);
        let effective_url = match mock_guard {
            Some(ref mock) => mock.url(),
            None => config.store_url.clone(),
        };
        Url::parse(&effective_url)
            .map_err(|e| CatalogClientError::InvalidUrl(effective_url.clone(), e))?;

        let http_client = build_http_client(&config)?;
        let client = APIClient::new_with_client(&effective_url, http_client);

        Ok(Self {
            client,
            config,
            _mock_guard: mock_guard,
        })
    }

    /// Access the underlying API client for making requests.
    pub fn api(&self) -> &APIClient {
        &self.client
    }

    /// Get the configured store URL.
    pub fn store_url(&self) -> &str {
        &self.config.store_url
    }

    /// Update the client configuration and recreate the client.
    pub fn update_config(
        &mut self,
        update: impl FnOnce(&mut CatalogClientConfig),
    ) -> Result<(), CatalogClientError> {
        let mut modified_config = self.config.clone();
        update(&mut modified_config);
        *self = Self::new(modified_config)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Catalog trait
// ---------------------------------------------------------------------------

/// The catalog interface.
///
/// Implementors provide the three fetches. Every derived view is built on
/// [`ClientTrait::list_products`] and performs its own full fetch; nothing is
/// cached between calls.
#[allow(async_fn_in_trait)]
pub trait ClientTrait {
    /// Fetch the full product collection in server order.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogClientError>;

    /// Fetch a single product.
    ///
    /// Unknown ids fail with [`CatalogClientError::NotFound`].
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogClientError>;

    /// Fetch the category labels.
    async fn list_categories(&self) -> Result<Vec<String>, CatalogClientError>;

    /// Fetch several products concurrently, returned in the order of `ids`.
    ///
    /// Fails with the first error any lookup produces.
    async fn get_products(
        &self,
        ids: impl IntoIterator<Item = ProductId>,
    ) -> Result<Vec<Product>, CatalogClientError> {
        try_join_all(ids.into_iter().map(|id| self.get_product(id))).await
    }

    /// Products whose category label equals `category` exactly.
    async fn list_products_by_category(
        &self,
        category: impl AsRef<str>,
    ) -> Result<Vec<Product>, CatalogClientError> {
        let products = self.list_products().await?;
        let filtered = views::by_category(&products, category.as_ref());
        debug!(
            category = category.as_ref(),
            n_products = filtered.len(),
            "filtered products by category"
        );
        Ok(filtered.into_iter().cloned().collect())
    }

    /// Products rated above [`views::BEST_RATED_THRESHOLD`].
    async fn list_best_rated(&self) -> Result<Vec<Product>, CatalogClientError> {
        let products = self.list_products().await?;
        Ok(views::best_rated(&products).into_iter().cloned().collect())
    }

    /// The product with the most votes, first one on ties.
    async fn most_voted(&self) -> Result<Product, CatalogClientError> {
        let products = self.list_products().await?;
        views::most_voted(&products)
            .cloned()
            .ok_or(CatalogClientError::EmptyCatalog)
    }

    /// The mean price over the catalog.
    async fn average_price(&self) -> Result<f64, CatalogClientError> {
        let products = self.list_products().await?;
        views::average_price(&products).ok_or(CatalogClientError::EmptyCatalog)
    }

    /// The product with the lowest price, first one on ties.
    async fn cheapest(&self) -> Result<Product, CatalogClientError> {
        let products = self.list_products().await?;
        views::cheapest(&products)
            .cloned()
            .ok_or(CatalogClientError::EmptyCatalog)
    }

    /// The product with the highest price, first one on ties.
    async fn most_expensive(&self) -> Result<Product, CatalogClientError> {
        let products = self.list_products().await?;
        views::most_expensive(&products)
            .cloned()
            .ok_or(CatalogClientError::EmptyCatalog)
    }
}

// ---------------------------------------------------------------------------
// ClientTrait implementation for CatalogClient
// ---------------------------------------------------------------------------

impl ClientTrait for CatalogClient {
    #[instrument(skip_all)]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogClientError> {
        let response = self.client.list_products().await?;
        let products = response.into_inner();
        debug!(n_products = products.len(), "received products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogClientError> {
        let response = self.client.get_product(id).await.map_err(|e| match e {
            APIError::InvalidResponsePayload(ref body, _) if is_missing_product(body) => {
                CatalogClientError::NotFound(id)
            },
            APIError::UnexpectedResponse(ref response)
                if response.status() == StatusCode::NOT_FOUND =>
            {
                CatalogClientError::NotFound(id)
            },
            other => other.into(),
        })?;
        Ok(response.into_inner())
    }

    #[instrument(skip_all)]
    async fn list_categories(&self) -> Result<Vec<String>, CatalogClientError> {
        let response = self.client.list_categories().await?;
        let categories = response.into_inner();
        debug!(n_categories = categories.len(), "received categories");
        Ok(categories)
    }
}

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Converts a raw id to a [`ProductId`], rejecting `0`.
pub fn to_product_id(raw: u64) -> Result<ProductId, CatalogClientError> {
    ProductId::try_from(raw).map_err(|_e| CatalogClientError::InvalidProductId(raw))
}

// ---------------------------------------------------------------------------
// HTTP client builder
// ---------------------------------------------------------------------------

/// Build the HTTP client used for every store request.
fn build_http_client(config: &CatalogClientConfig) -> Result<reqwest::Client, CatalogClientError> {
    let mut headers = HeaderMap::new();

    for (key, value) in &config.extra_headers {
        headers.insert(
            header::HeaderName::from_str(key).map_err(
                |e: reqwest::header::InvalidHeaderName| CatalogClientError::Other(e.to_string()),
            )?,
            header::HeaderValue::from_str(value).map_err(
                |e: reqwest::header::InvalidHeaderValue| CatalogClientError::Other(e.to_string()),
            )?,
        );
    }

    debug!(
        store_url = %config.store_url,
        extra_headers = config.extra_headers.len(),
        connect_timeout = ?config.connect_timeout,
        request_timeout = ?config.request_timeout,
        "building store HTTP client"
    );

    let client_builder = reqwest::Client::builder().default_headers(headers);

    let client_builder = match config.connect_timeout {
        Some(timeout) => client_builder.connect_timeout(timeout),
        None => client_builder,
    };

    let client_builder = match config.request_timeout {
        Some(timeout) => client_builder.timeout(timeout),
        None => client_builder,
    };

    let client_builder = if let Some(ref user_agent) = config.user_agent {
        client_builder.user_agent(user_agent)
    } else {
        client_builder
    };

    client_builder
        .build()
        .map_err(|e| CatalogClientError::Other(e.to_string()))
}
