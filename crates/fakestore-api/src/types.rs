//! Payload types of the FakeStore API.
//!
//! Decoding is strict: a missing or mistyped field fails the whole response.
//! The one deliberate exception is [`Category`], which keeps labels it does not
//! know about in [`Category::Other`].

use std::fmt::{self, Display};
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error types.
pub mod error {
    use std::borrow::Cow;

    /// Error from a TryFrom or FromStr implementation.
    #[derive(Clone, PartialEq, Eq)]
    pub struct ConversionError(Cow<'static, str>);

    impl std::error::Error for ConversionError {}

    impl std::fmt::Display for ConversionError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            std::fmt::Display::fmt(&self.0, f)
        }
    }

    impl std::fmt::Debug for ConversionError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            std::fmt::Debug::fmt(&self.0, f)
        }
    }

    impl From<&'static str> for ConversionError {
        fn from(value: &'static str) -> Self {
            Self(value.into())
        }
    }

    impl From<String> for ConversionError {
        fn from(value: String) -> Self {
            Self(value.into())
        }
    }
}

/// Server assigned product identifier.
///
/// Identifiers start at `1`; `0` is not a valid id.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ProductId(NonZeroU64);

impl ProductId {
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for ProductId {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl TryFrom<u64> for ProductId {
    type Error = error::ConversionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or_else(|| "product ids start at 1".into())
    }
}

impl FromStr for ProductId {
    type Err = error::ConversionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let raw = value
            .parse::<u64>()
            .map_err(|e| error::ConversionError::from(format!("invalid product id '{value}': {e}")))?;
        Self::try_from(raw)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category label attached to every product.
///
/// The service exposes a fixed set of labels.
/// Labels outside that set deserialize into [`Category::Other`] verbatim,
/// so a catalog update on the server does not break decoding.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Category {
    #[serde(rename = "electronics")]
    Electronics,
    // sic, this is the spelling the service uses
    #[serde(rename = "jewelery")]
    Jewelery,
    #[serde(rename = "men's clothing")]
    MensClothing,
    #[serde(rename = "women's clothing")]
    WomensClothing,

    #[serde(untagged)]
    Other(String),
}

impl Category {
    /// The labels the service is known to use, in the order it lists them.
    pub const KNOWN: [Category; 4] = [
        Category::Electronics,
        Category::Jewelery,
        Category::MensClothing,
        Category::WomensClothing,
    ];

    /// The label as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Electronics => "electronics",
            Category::Jewelery => "jewelery",
            Category::MensClothing => "men's clothing",
            Category::WomensClothing => "women's clothing",
            Category::Other(label) => label,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::KNOWN
            .into_iter()
            .find(|known| known.as_str() == label)
            .unwrap_or_else(|| Category::Other(label.to_string()))
    }
}

/// Aggregate customer rating of a product.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Rating {
    /// Average score in `[0, 5]`.
    pub rate: f64,
    /// Number of votes the score is based on.
    pub count: u32,
}

/// A product as returned by `/products/` and `/products/{id}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: Category,
    pub image: String,
    pub rating: Rating,
}
