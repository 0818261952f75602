//! Synthetic stock decoration.
//!
//! The catalog endpoint carries no inventory signal, so availability is
//! synthesized client-side for demonstration purposes only. The random
//! source is supplied by the caller, which lets tests drive decoration with
//! a deterministic generator and assert exact outputs.

use rand::Rng;

use crate::product::Product;

/// Probability that a decorated item is in stock.
pub const IN_STOCK_RATE: f64 = 0.8;

/// Fill in missing stock flags, one independent draw per item.
///
/// Flags already present on the wire are kept as-is. Items are otherwise
/// untouched; order is preserved.
pub fn decorate_stock<R: Rng>(items: &mut [Product], rng: &mut R) {
    for item in items {
        if item.in_stock.is_none() {
            item.in_stock = Some(rng.gen_bool(IN_STOCK_RATE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn bare_product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {id}"),
            price: "9.99".parse().unwrap(),
            image: format!("https://example.com/{id}.png"),
            in_stock: None,
        }
    }

    #[test]
    fn low_draws_decorate_as_in_stock() {
        // StepRng at zero always lands below the in-stock threshold.
        let mut items = vec![bare_product(1), bare_product(2)];
        let mut rng = StepRng::new(0, 0);
        decorate_stock(&mut items, &mut rng);
        assert!(items.iter().all(|p| p.in_stock == Some(true)));
    }

    #[test]
    fn high_draws_decorate_as_out_of_stock() {
        let mut items = vec![bare_product(1), bare_product(2)];
        let mut rng = StepRng::new(u64::MAX, 0);
        decorate_stock(&mut items, &mut rng);
        assert!(items.iter().all(|p| p.in_stock == Some(false)));
    }

    #[test]
    fn wire_flags_are_never_overwritten() {
        let mut items = vec![bare_product(1), bare_product(2)];
        items[0].in_stock = Some(false);
        // A generator that would otherwise force every flag to true.
        let mut rng = StepRng::new(0, 0);
        decorate_stock(&mut items, &mut rng);
        assert_eq!(items[0].in_stock, Some(false));
        assert_eq!(items[1].in_stock, Some(true));
    }

    #[test]
    fn in_stock_rate_converges_over_large_sample() {
        let mut items: Vec<Product> = (0..10_000).map(bare_product).collect();
        let mut rng = StdRng::seed_from_u64(42);
        decorate_stock(&mut items, &mut rng);

        let in_stock = items.iter().filter(|p| p.in_stock == Some(true)).count();
        let rate = in_stock as f64 / items.len() as f64;
        assert!(
            (rate - IN_STOCK_RATE).abs() < 0.02,
            "observed in-stock rate {rate} too far from {IN_STOCK_RATE}"
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use rust_decimal::Decimal;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                any::<u64>(),
                "[A-Za-z][A-Za-z0-9 ]{0,23}",
                0u32..=10_000_000,
                0u32..=2,
                proptest::option::of(any::<bool>()),
            )
                .prop_map(|(id, title, amount, scale, in_stock)| Product {
                    id: ProductId(id),
                    title,
                    price: Decimal::new(i64::from(amount), scale),
                    image: format!("https://example.com/{id}.png"),
                    in_stock,
                })
        }

        proptest! {
            /// Decoration publishes a complete listing: every item ends up
            /// with a concrete flag and nothing else about it changes.
            #[test]
            fn decoration_completes_and_preserves_items(
                items in proptest::collection::vec(arb_product(), 0..40),
                seed in any::<u64>(),
            ) {
                let mut decorated = items.clone();
                let mut rng = StdRng::seed_from_u64(seed);
                decorate_stock(&mut decorated, &mut rng);

                prop_assert_eq!(decorated.len(), items.len());
                for (before, after) in items.iter().zip(&decorated) {
                    prop_assert_eq!(before.id, after.id);
                    prop_assert_eq!(&before.title, &after.title);
                    prop_assert_eq!(before.price, after.price);
                    prop_assert_eq!(&before.image, &after.image);
                    prop_assert!(after.in_stock.is_some());
                    if before.in_stock.is_some() {
                        prop_assert_eq!(before.in_stock, after.in_stock);
                    }
                }
            }

            /// Same listing + same seed = same decoration.
            #[test]
            fn decoration_is_deterministic_per_source(
                items in proptest::collection::vec(arb_product(), 0..40),
                seed in any::<u64>(),
            ) {
                let mut first = items.clone();
                decorate_stock(&mut first, &mut StdRng::seed_from_u64(seed));

                let mut second = items;
                decorate_stock(&mut second, &mut StdRng::seed_from_u64(seed));

                prop_assert_eq!(first, second);
            }
        }
    }
}
