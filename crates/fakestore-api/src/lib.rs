//! Typed client for the FakeStore catalog API.
//!
//! The API is three `GET` routes (see [`Route`]) returning JSON.
//! Responses are decoded into the types in [`types`] and wrapped in a
//! [`ResponseValue`]; failures use the same [`Error`] type a generated
//! OpenAPI client would, so callers can treat this crate like one.

pub use progenitor_client::{Error, ResponseValue};
use reqwest::header::{self, HeaderValue};
use serde::de::DeserializeOwned;

mod route;
pub mod types;

pub use route::Route;

/// Typed `httpmock` wrappers for each operation.
#[cfg(feature = "mock-client")]
pub mod mock;

/// The API does not document an error body, so error responses carry none.
pub type ApiError = Error<()>;

/// Client for the FakeStore API.
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) baseurl: String,
    pub(crate) client: reqwest::Client,
}

impl Client {
    /// Create a new client.
    ///
    /// `baseurl` is the base URL provided to the internal
    /// `reqwest::Client`, and should include a scheme and hostname,
    /// as well as port and a path stem if applicable.
    pub fn new(baseurl: &str) -> Self {
        Self::new_with_client(baseurl, reqwest::Client::new())
    }

    /// Construct a new client with an existing `reqwest::Client`,
    /// allowing more control over its configuration.
    pub fn new_with_client(baseurl: &str, client: reqwest::Client) -> Self {
        Self {
            baseurl: baseurl.to_string(),
            client,
        }
    }

    /// Get the base URL to which requests are made.
    pub fn baseurl(&self) -> &String {
        &self.baseurl
    }

    /// Get the internal `reqwest::Client` used to make requests.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// List all products.
    ///
    /// Sends a `GET` request to `/products/`
    pub async fn list_products(&self) -> Result<ResponseValue<Vec<types::Product>>, ApiError> {
        self.get(Route::Products).await
    }

    /// Get a single product.
    ///
    /// Sends a `GET` request to `/products/{id}`.
    /// The service answers unknown ids with `200` and an empty body,
    /// which fails to decode as [`Error::InvalidResponsePayload`].
    pub async fn get_product(
        &self,
        id: types::ProductId,
    ) -> Result<ResponseValue<types::Product>, ApiError> {
        self.get(Route::Product(id)).await
    }

    /// List the category labels.
    ///
    /// Sends a `GET` request to `/products/categories/`
    pub async fn list_categories(&self) -> Result<ResponseValue<Vec<String>>, ApiError> {
        self.get(Route::Categories).await
    }

    async fn get<T: DeserializeOwned>(&self, route: Route) -> Result<ResponseValue<T>, ApiError> {
        let url = route.url(&self.baseurl);
        let request = self
            .client
            .get(url)
            .header(
                header::ACCEPT,
                HeaderValue::from_static("application/json"),
            )
            .build()?;
        let response = self.client.execute(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::types::{Category, ProductId};

    fn product_json() -> serde_json::Value {
        json!({
            "id": 3,
            "title": "Mens Cotton Jacket",
            "price": 55.99,
            "description": "great outerwear jackets for Spring/Autumn/Winter",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg",
            "rating": { "rate": 4.7, "count": 500 }
        })
    }

    #[tokio::test]
    async fn get_product_decodes_body() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET)
                .path("/products/3")
                .header("accept", "application/json");
            then.status(200).json_body(product_json());
        });

        let client = Client::new(&server.base_url());
        let product = client
            .get_product(ProductId::try_from(3).unwrap())
            .await
            .unwrap()
            .into_inner();

        assert_eq!(product.id.get(), 3);
        assert_eq!(product.category, Category::MensClothing);
        assert_eq!(product.rating.count, 500);
        mock.assert();
    }

    #[tokio::test]
    async fn empty_body_is_invalid_payload() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.path("/products/30");
            then.status(200).body("");
        });

        let client = Client::new(&server.base_url());
        let result = client.get_product(ProductId::try_from(30).unwrap()).await;

        assert!(
            matches!(result, Err(Error::InvalidResponsePayload(ref body, _)) if body.is_empty()),
            "expected InvalidResponsePayload, found: {result:?}"
        );
        mock.assert();
    }

    #[tokio::test]
    async fn non_success_status_is_unexpected_response() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.path("/products/categories/");
            then.status(503).body("upstream unavailable");
        });

        let client = Client::new(&server.base_url());
        let result = client.list_categories().await;

        match result {
            Err(Error::UnexpectedResponse(response)) => {
                assert_eq!(response.status().as_u16(), 503)
            },
            other => panic!("expected UnexpectedResponse, found: {other:?}"),
        }
        mock.assert();
    }

    #[tokio::test]
    async fn unreachable_server_is_communication_error() {
        // Nothing listens on the discard port.
        let client = Client::new("http://127.0.0.1:9");
        let result = client.list_products().await;

        assert!(
            matches!(result, Err(Error::CommunicationError(_))),
            "expected CommunicationError, found: {result:?}"
        );
    }
}
