pub mod operations {
    //! [`When`](httpmock::When) and [`Then`](httpmock::Then)
    //! wrappers for each operation. Each can be converted to
    //! its inner type with a call to `into_inner()`. This can
    //! be used to explicitly deviate from permitted values.
    use crate::types;
    use crate::Route;

    pub struct ListProductsWhen(httpmock::When);
    impl ListProductsWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/products/?$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
    }
    pub struct ListProductsThen(httpmock::Then);
    impl ListProductsThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &[types::Product]) -> Self {
            Self(
                self.0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body(serde_json::to_value(value).unwrap()),
            )
        }
    }

    pub struct GetProductWhen(httpmock::When);
    impl GetProductWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/products/[0-9]+$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: types::ProductId) -> Self {
            Self(self.0.path(Route::Product(value).path()))
        }
    }
    pub struct GetProductThen(httpmock::Then);
    impl GetProductThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::Product) -> Self {
            Self(
                self.0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        /// What the live service sends for an id it does not know.
        pub fn unknown_id(self) -> Self {
            Self(
                self.0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .body(""),
            )
        }
    }

    pub struct ListCategoriesWhen(httpmock::When);
    impl ListCategoriesWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/products/categories/?$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
    }
    pub struct ListCategoriesThen(httpmock::Then);
    impl ListCategoriesThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &[String]) -> Self {
            Self(
                self.0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body(serde_json::to_value(value).unwrap()),
            )
        }
    }
}

/// An extension trait for [`MockServer`](httpmock::MockServer) that
/// adds a method for each operation. These are the equivalent of
/// type-checked [`mock()`](httpmock::MockServer::mock) calls.
pub trait MockServerExt {
    fn list_products<F>(&self, config_fn: F) -> httpmock::Mock<'_>
    where
        F: FnOnce(operations::ListProductsWhen, operations::ListProductsThen);
    fn get_product<F>(&self, config_fn: F) -> httpmock::Mock<'_>
    where
        F: FnOnce(operations::GetProductWhen, operations::GetProductThen);
    fn list_categories<F>(&self, config_fn: F) -> httpmock::Mock<'_>
    where
        F: FnOnce(operations::ListCategoriesWhen, operations::ListCategoriesThen);
}

impl MockServerExt for httpmock::MockServer {
    fn list_products<F>(&self, config_fn: F) -> httpmock::Mock<'_>
    where
        F: FnOnce(operations::ListProductsWhen, operations::ListProductsThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::ListProductsWhen::new(when),
                operations::ListProductsThen::new(then),
            )
        })
    }
    fn get_product<F>(&self, config_fn: F) -> httpmock::Mock<'_>
    where
        F: FnOnce(operations::GetProductWhen, operations::GetProductThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::GetProductWhen::new(when),
                operations::GetProductThen::new(then),
            )
        })
    }
    fn list_categories<F>(&self, config_fn: F) -> httpmock::Mock<'_>
    where
        F: FnOnce(operations::ListCategoriesWhen, operations::ListCategoriesThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::ListCategoriesWhen::new(when),
                operations::ListCategoriesThen::new(then),
            )
        })
    }
}
