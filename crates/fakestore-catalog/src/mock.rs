//! In-process store serving a fixed catalog.
//!
//! Uses the typed `httpmock` wrappers from `fakestore-api`.

use std::fmt::Debug;

use fakestore_api::mock::MockServerExt;
use httpmock::MockServer;
use tracing::debug;

use crate::config::{CatalogClientConfig, CatalogMockMode, CatalogSnapshot};

/// Guard to keep a `MockServer` running until the `CatalogClient` is dropped.
pub(crate) enum MockGuard {
    Snapshot(MockServer),
}

impl MockGuard {
    pub(crate) fn new(config: &CatalogClientConfig) -> Option<Self> {
        match &config.mock_mode {
            CatalogMockMode::None => None,
            CatalogMockMode::Snapshot(snapshot) => {
                let server = MockServer::start();
                serve_snapshot(&server, snapshot);
                debug!(
                    server = server.base_url(),
                    n_products = snapshot.products.len(),
                    n_categories = snapshot.categories.len(),
                    "mock server serving catalog snapshot"
                );

                Some(MockGuard::Snapshot(server))
            },
        }
    }

    pub(crate) fn url(&self) -> String {
        match self {
            MockGuard::Snapshot(server) => server.base_url(),
        }
    }
}

impl Debug for MockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let url = self.url();
        let mode = match self {
            MockGuard::Snapshot(_) => "MockGuard::Snapshot",
        };
        write!(f, "{mode} url={url}")
    }
}

/// Register the routes of `snapshot` on `server`.
///
/// Mocks match in registration order, so the per-product routes go before
/// the catch-all that answers unknown ids like the live service does.
pub fn serve_snapshot(server: &MockServer, snapshot: &CatalogSnapshot) {
    server.list_products(|_when, then| {
        then.ok(&snapshot.products);
    });
    server.list_categories(|_when, then| {
        then.ok(&snapshot.categories);
    });
    for product in &snapshot.products {
        server.get_product(|when, then| {
            when.id(product.id);
            then.ok(product);
        });
    }
    server.get_product(|_when, then| {
        then.unknown_id();
    });
}
