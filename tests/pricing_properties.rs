use proptest::prelude::*;
use small_menu::{Crust, MenuItem, Topping};

fn build_chain(base_price: f64, toppings: &[(f64, String)]) -> Box<dyn MenuItem> {
    let mut item: Box<dyn MenuItem> = Box::new(Crust::new(base_price, vec!["wheat".to_string()]));
    for (price, label) in toppings {
        item = Box::new(Topping::new(item, *price, label.clone()));
    }
    item
}

proptest! {
    #[test]
    fn total_is_base_plus_every_increment(
        base_price in 0.0f64..1000.0,
        toppings in prop::collection::vec((0.0f64..500.0, "[a-z]{1,8}"), 0..8),
    ) {
        let expected: f64 = base_price + toppings.iter().map(|(price, _)| price).sum::<f64>();
        let item = build_chain(base_price, &toppings);

        prop_assert!((item.price() - expected).abs() < 1e-6);
    }

    #[test]
    fn ingredient_count_is_base_count_plus_chain_length(
        base_price in 0.0f64..1000.0,
        toppings in prop::collection::vec((0.0f64..500.0, "[a-z]{1,8}"), 0..8),
    ) {
        let item = build_chain(base_price, &toppings);

        prop_assert_eq!(item.ingredients().len(), 1 + toppings.len());
    }

    #[test]
    fn price_is_independent_of_wrap_order(
        base_price in 0.0f64..1000.0,
        toppings in prop::collection::vec((0.0f64..500.0, "[a-z]{1,8}"), 1..8),
    ) {
        let forward = build_chain(base_price, &toppings);

        let mut reversed = toppings.clone();
        reversed.reverse();
        let backward = build_chain(base_price, &reversed);

        prop_assert!((forward.price() - backward.price()).abs() < 1e-6);
    }

    #[test]
    fn ingredients_follow_wrap_order(
        base_price in 0.0f64..1000.0,
        toppings in prop::collection::vec((0.0f64..500.0, "[a-z]{1,8}"), 0..8),
    ) {
        let item = build_chain(base_price, &toppings);
        let ingredients = item.ingredients();

        prop_assert_eq!(&ingredients[0], "wheat");
        for (index, (_, label)) in toppings.iter().enumerate() {
            prop_assert_eq!(&ingredients[index + 1], label);
        }
    }

    #[test]
    fn repeated_calls_are_stable(
        base_price in 0.0f64..1000.0,
        toppings in prop::collection::vec((0.0f64..500.0, "[a-z]{1,8}"), 0..8),
    ) {
        let item = build_chain(base_price, &toppings);

        prop_assert_eq!(item.price(), item.price());
        prop_assert_eq!(item.ingredients(), item.ingredients());
    }
}
