//! Property tests for cart aggregates and catalog filtering.

use proptest::prelude::*;
use shop_core::prelude::*;

const CATEGORIES: [&str; 3] = ["A", "B", "C"];

#[derive(Clone, Debug)]
enum Op {
    Add(u64),
    Remove(u64),
    SetQuantity(u64, i64),
}

fn arb_product_id() -> impl Strategy<Value = u64> {
    1u64..=5
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_product_id().prop_map(Op::Add),
        arb_product_id().prop_map(Op::Remove),
        (arb_product_id(), 0i64..6).prop_map(|(id, qty)| Op::SetQuantity(id, qty)),
    ]
}

fn arb_catalog() -> impl Strategy<Value = ProductCatalog> {
    prop::collection::vec((0usize..CATEGORIES.len(), 1i64..1_000_000), 0..12).prop_map(|rows| {
        let products = rows
            .into_iter()
            .enumerate()
            .map(|(i, (cat, price))| {
                let id = i as u64 + 1;
                Product::new(
                    ProductId::new(id),
                    format!("Product {id}"),
                    Money::new(price, Currency::RUB),
                    CATEGORIES[cat],
                    format!("{id}.png"),
                )
            })
            .collect();
        ProductCatalog::new(
            Currency::RUB,
            CATEGORIES.iter().map(|c| c.to_string()).collect(),
            products,
        )
        .unwrap()
    })
}

fn product(id: u64) -> Product {
    Product::new(
        ProductId::new(id),
        format!("Product {id}"),
        Money::new(id as i64 * 1_000, Currency::RUB),
        "A",
        format!("{id}.png"),
    )
}

fn apply(cart: &mut CartStore, op: &Op) {
    match *op {
        Op::Add(id) => cart.add_item(&product(id)),
        Op::Remove(id) => {
            cart.remove_item(ProductId::new(id));
        }
        Op::SetQuantity(id, qty) => {
            cart.set_quantity(ProductId::new(id), qty).unwrap();
        }
    }
}

proptest! {
    #[test]
    fn repeated_adds_accumulate_on_one_line(n in 1u32..200) {
        let mut cart = CartStore::new(Currency::RUB);
        let p = product(1);
        for _ in 0..n {
            cart.add_item(&p);
        }
        prop_assert_eq!(cart.len(), 1);
        prop_assert_eq!(cart.items()[0].quantity, n);
        prop_assert_eq!(cart.total_items(), u64::from(n));
    }

    #[test]
    fn add_then_remove_restores_cart(ops in prop::collection::vec(arb_op(), 0..20), id in 6u64..10) {
        let mut cart = CartStore::new(Currency::RUB);
        for op in &ops {
            apply(&mut cart, op);
        }
        let before = cart.clone();

        cart.add_item(&product(id));
        cart.remove_item(ProductId::new(id));
        prop_assert_eq!(cart, before);
    }

    #[test]
    fn zero_quantity_matches_remove(ops in prop::collection::vec(arb_op(), 0..20), id in 1u64..10) {
        let mut cart = CartStore::new(Currency::RUB);
        for op in &ops {
            apply(&mut cart, op);
        }

        let mut via_set = cart.clone();
        let mut via_remove = cart;
        via_set.set_quantity(ProductId::new(id), 0).unwrap();
        via_remove.remove_item(ProductId::new(id));
        prop_assert_eq!(via_set, via_remove);
    }

    #[test]
    fn totals_match_items(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut cart = CartStore::new(Currency::RUB);
        for op in &ops {
            apply(&mut cart, op);
        }

        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| i.product.price.amount_minor * i64::from(i.quantity))
            .sum();
        let total = cart.total_price();
        prop_assert_eq!(total.amount_minor, expected);
        prop_assert!(!total.is_negative());
        prop_assert_eq!(total.is_zero(), cart.is_empty());
        prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));

        let summary = cart.summary();
        prop_assert_eq!(summary.total_items, cart.total_items());
        prop_assert_eq!(summary.total_price, total);
    }

    #[test]
    fn filter_all_is_identity(catalog in arb_catalog()) {
        let all = filter_by_category(catalog.products(), ALL_CATEGORIES);
        let expected: Vec<&Product> = catalog.products().iter().collect();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn filter_by_category_selects_exactly(catalog in arb_catalog()) {
        for category in CATEGORIES {
            let filtered = catalog.filter_by_category(category);
            let expected: Vec<&Product> = catalog
                .products()
                .iter()
                .filter(|p| p.category == category)
                .collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
