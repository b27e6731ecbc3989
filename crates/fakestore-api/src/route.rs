use std::fmt::{self, Display};

use crate::types::ProductId;

/// The resources exposed by the FakeStore API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `GET /products/`
    Products,
    /// `GET /products/{id}`
    Product(ProductId),
    /// `GET /products/categories/`
    Categories,
}

impl Route {
    /// Path of the route relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Route::Products => "/products/".to_string(),
            Route::Product(id) => format!("/products/{id}"),
            Route::Categories => "/products/categories/".to_string(),
        }
    }

    /// Absolute URL of the route under `baseurl`.
    ///
    /// A trailing `/` on `baseurl` is ignored.
    pub fn url(&self, baseurl: &str) -> String {
        format!("{}{}", baseurl.trim_end_matches('/'), self.path())
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
