//! Error handling for catalog operations.

use fakestore_api::types::ProductId;
use fakestore_api::{ApiError, Error as APIError};
use reqwest::StatusCode;
use thiserror::Error;

/// Common error type for catalog operations.
///
/// Errors from the underlying API client are mapped onto the two failure
/// kinds callers care about, [`Transport`](Self::Transport) and
/// [`Decode`](Self::Decode). Derived views propagate them unchanged.
#[derive(Debug, Error)]
pub enum CatalogClientError {
    #[error("failed to reach the store")]
    Transport(#[source] reqwest::Error),
    #[error("failed to decode store response")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("product {0} not found")]
    NotFound(ProductId),
    #[error("store responded with {0}")]
    UnexpectedStatus(StatusCode),
    #[error("invalid product id {0}, product ids start at 1")]
    InvalidProductId(u64),
    #[error("invalid store url '{0}'")]
    InvalidUrl(String, #[source] url::ParseError),
    #[error("catalog is empty")]
    EmptyCatalog,
    #[error("{}", .0)]
    Other(String),
}

impl From<ApiError> for CatalogClientError {
    fn from(err: ApiError) -> Self {
        match err {
            APIError::CommunicationError(err)
            | APIError::ResponseBodyError(err)
            | APIError::InvalidUpgrade(err) => CatalogClientError::Transport(err),
            APIError::InvalidResponsePayload(body, source) => CatalogClientError::Decode {
                body: String::from_utf8_lossy(&body).into_owned(),
                source,
            },
            APIError::UnexpectedResponse(response) => {
                CatalogClientError::UnexpectedStatus(response.status())
            },
            APIError::ErrorResponse(response) => {
                CatalogClientError::UnexpectedStatus(response.status())
            },
            other => CatalogClientError::Other(other.to_string()),
        }
    }
}

/// Whether a single-product response body is how the service says
/// "no such product".
///
/// The service answers unknown ids with `200` and an empty body,
/// some deployments send a literal `null` instead.
pub(crate) fn is_missing_product(body: &[u8]) -> bool {
    let body = body.trim_ascii();
    body.is_empty() || body == b"null"
}
