//! Derived views over an in-memory product list.
//!
//! The min/max folds start from a sentinel accumulator (`+∞`, `-∞`, a vote
//! count of `-1`) and only replace it on a strict comparison, so the first
//! product wins ties. An empty list never replaces the sentinel, which is
//! reported as `None` rather than leaked to the caller.

use fakestore_api::types::Product;

/// Products rated strictly above this are "best rated".
pub const BEST_RATED_THRESHOLD: f64 = 4.0;

const CHEAPEST_SEED: f64 = f64::INFINITY;
const MOST_EXPENSIVE_SEED: f64 = f64::NEG_INFINITY;
const MOST_VOTED_SEED: i64 = -1;

/// Products whose category label is exactly `category`, in input order.
pub fn by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| product.category.as_str() == category)
        .collect()
}

/// Products rated strictly above [`BEST_RATED_THRESHOLD`], in input order.
pub fn best_rated(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.rating.rate > BEST_RATED_THRESHOLD)
        .collect()
}

/// The product with the most votes.
pub fn most_voted(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .fold((MOST_VOTED_SEED, None), |(best_count, best), product| {
            let count = i64::from(product.rating.count);
            if count > best_count {
                (count, Some(product))
            } else {
                (best_count, best)
            }
        })
        .1
}

/// Mean price, accumulated as a running average.
pub fn average_price(products: &[Product]) -> Option<f64> {
    let (count, average) = products
        .iter()
        .fold((0u64, 0.0_f64), |(count, average), product| {
            let count = count + 1;
            (count, average + (product.price - average) / count as f64)
        });
    (count > 0).then_some(average)
}

/// The product with the lowest price.
pub fn cheapest(products: &[Product]) -> Option<&Product> {
    fold_by_price(products, CHEAPEST_SEED, |price, best| price < best)
}

/// The product with the highest price.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    fold_by_price(products, MOST_EXPENSIVE_SEED, |price, best| price > best)
}

fn fold_by_price(
    products: &[Product],
    seed: f64,
    replaces: impl Fn(f64, f64) -> bool,
) -> Option<&Product> {
    products
        .iter()
        .fold((seed, None), |(best_price, best), product| {
            if replaces(product.price, best_price) {
                (product.price, Some(product))
            } else {
                (best_price, best)
            }
        })
        .1
}

#[cfg(test)]
mod tests {
    use fakestore_api::types::{Category, ProductId, Rating};
    use fakestore_test_utils::fixtures::reference_catalog;
    use fakestore_test_utils::proptest::{catalog, non_empty_catalog};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|product| product.id.get()).collect()
    }

    fn product(id: u64, price: f64, count: u32) -> Product {
        Product {
            id: ProductId::try_from(id).unwrap(),
            title: format!("product {id}"),
            price,
            description: String::new(),
            category: Category::Electronics,
            image: String::new(),
            rating: Rating { rate: 3.0, count },
        }
    }

    #[test]
    fn reference_catalog_views() {
        let catalog = reference_catalog();

        assert_eq!(ids(&by_category(&catalog, "electronics")), vec![
            9, 10, 11, 12, 13, 14
        ]);
        assert_eq!(ids(&best_rated(&catalog)), vec![2, 3, 5, 11, 12, 18, 19]);
        assert_eq!(most_voted(&catalog).unwrap().id.get(), 17);
        assert_eq!(cheapest(&catalog).unwrap().id.get(), 19);
        assert_eq!(most_expensive(&catalog).unwrap().id.get(), 14);

        let mean = catalog.iter().map(|product| product.price).sum::<f64>() / catalog.len() as f64;
        assert!((average_price(&catalog).unwrap() - mean).abs() < 1e-9);
    }

    #[test]
    fn category_match_is_exact() {
        let catalog = reference_catalog();
        assert!(by_category(&catalog, "Electronics").is_empty());
        assert!(by_category(&catalog, "electronics ").is_empty());
        assert!(by_category(&catalog, "nothing").is_empty());
    }

    #[test]
    fn rating_threshold_is_strict() {
        let mut exactly_four = product(1, 10.0, 1);
        exactly_four.rating.rate = 4.0;
        let mut above_four = product(2, 10.0, 1);
        above_four.rating.rate = 4.1;

        let products = [exactly_four, above_four];
        assert_eq!(ids(&best_rated(&products)), vec![2]);
    }

    #[test]
    fn first_occurrence_wins_ties() {
        let products = [
            product(1, 5.0, 10),
            product(2, 1.0, 30),
            product(3, 9.0, 30),
            product(4, 1.0, 20),
            product(5, 9.0, 20),
        ];
        assert_eq!(cheapest(&products).unwrap().id.get(), 2);
        assert_eq!(most_expensive(&products).unwrap().id.get(), 3);
        assert_eq!(most_voted(&products).unwrap().id.get(), 2);
    }

    #[test]
    fn zero_votes_still_beat_the_seed() {
        let products = [product(1, 5.0, 0), product(2, 6.0, 0)];
        assert_eq!(most_voted(&products).unwrap().id.get(), 1);
    }

    #[test]
    fn empty_input_has_no_aggregate() {
        assert_eq!(most_voted(&[]), None);
        assert_eq!(average_price(&[]), None);
        assert_eq!(cheapest(&[]), None);
        assert_eq!(most_expensive(&[]), None);
        assert!(best_rated(&[]).is_empty());
        assert!(by_category(&[], "electronics").is_empty());
    }

    #[test]
    fn single_product_is_every_extreme() {
        let products = [product(1, 42.5, 7)];
        assert_eq!(cheapest(&products), Some(&products[0]));
        assert_eq!(most_expensive(&products), Some(&products[0]));
        assert_eq!(most_voted(&products), Some(&products[0]));
        assert_eq!(average_price(&products), Some(42.5));
    }

    proptest! {
        #[test]
        fn average_lies_between_extremes(products in non_empty_catalog(30)) {
            let average = average_price(&products).unwrap();
            let low = cheapest(&products).unwrap().price;
            let high = most_expensive(&products).unwrap().price;
            prop_assert!(low <= average, "{average} < {low}");
            prop_assert!(average <= high, "{average} > {high}");
        }

        #[test]
        fn average_matches_arithmetic_mean(products in non_empty_catalog(30)) {
            let mean = products.iter().map(|p| p.price).sum::<f64>() / products.len() as f64;
            let average = average_price(&products).unwrap();
            prop_assert!((average - mean).abs() <= 1e-6 * mean.max(1.0));
        }

        #[test]
        fn extremes_match_seeded_folds(products in non_empty_catalog(30)) {
            let seeded_min = products
                .iter()
                .fold(&products[0], |acc, p| if acc.price > p.price { p } else { acc });
            let seeded_max = products
                .iter()
                .fold(&products[0], |acc, p| if acc.price < p.price { p } else { acc });
            prop_assert_eq!(cheapest(&products), Some(seeded_min));
            prop_assert_eq!(most_expensive(&products), Some(seeded_max));
        }

        #[test]
        fn most_voted_is_first_maximum(products in non_empty_catalog(30)) {
            let max = products.iter().map(|p| p.rating.count).max().unwrap();
            let first = products.iter().find(|p| p.rating.count == max);
            prop_assert_eq!(most_voted(&products), first);
        }

        #[test]
        fn filters_are_ordered_subsets(products in catalog(30)) {
            let best = best_rated(&products);
            prop_assert!(best.iter().all(|p| p.rating.rate > BEST_RATED_THRESHOLD));
            prop_assert_eq!(
                best.len(),
                products.iter().filter(|p| p.rating.rate > 4.0).count()
            );
            prop_assert!(best.windows(2).all(|pair| pair[0].id < pair[1].id));

            for category in Category::KNOWN {
                let filtered = by_category(&products, category.as_str());
                prop_assert!(filtered.iter().all(|p| p.category == category));
                prop_assert!(filtered.windows(2).all(|pair| pair[0].id < pair[1].id));
            }
        }
    }
}
