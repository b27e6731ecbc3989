use fakestore_api::types::{Category, Product, ProductId, Rating};
use proptest::prelude::*;

/// Produces one of the known category labels, or occasionally an unknown one.
pub fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        8 => proptest::sample::select(Category::KNOWN.to_vec()),
        1 => "[a-z]{1,12}".prop_map(|label| Category::from(label.as_str())),
    ]
}

/// Produces ratings within the range the service uses.
pub fn rating() -> impl Strategy<Value = Rating> {
    (0u32..=50, 0u32..1000).prop_map(|(tenths, count)| Rating {
        rate: f64::from(tenths) / 10.0,
        count,
    })
}

/// Produces prices with cent precision, like the service's.
pub fn price() -> impl Strategy<Value = f64> {
    (0u32..100_000).prop_map(|cents| f64::from(cents) / 100.0)
}

/// Produces a product with the given id.
pub fn product_with_id(id: ProductId) -> impl Strategy<Value = Product> {
    ("[A-Za-z ]{1,24}", price(), category(), rating()).prop_map(
        move |(title, price, category, rating)| Product {
            id,
            description: format!("{title} description"),
            image: format!("https://fakestoreapi.com/img/{id}.jpg"),
            title,
            price,
            category,
            rating,
        },
    )
}

/// Produces catalogs with ids `1..=len` in order, like the service returns
/// them.
pub fn catalog(max_len: usize) -> impl Strategy<Value = Vec<Product>> {
    (0..=max_len as u64).prop_flat_map(|len| {
        (1..=len)
            .map(|id| product_with_id(ProductId::try_from(id).expect("ids start at 1")))
            .collect::<Vec<_>>()
    })
}

/// Like [`catalog`] but never empty.
pub fn non_empty_catalog(max_len: usize) -> impl Strategy<Value = Vec<Product>> {
    catalog(max_len).prop_filter("catalog must not be empty", |products| !products.is_empty())
}
