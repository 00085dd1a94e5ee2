use crate::domain::model::{Crust, CrustSpec, Order, Topping, ToppingSpec};
use crate::domain::ports::{MenuItem, MenuSource};
use crate::utils::error::{MenuError, Result};
use std::collections::HashMap;

/// The catalog: crust and topping specs keyed by name. Orders reference
/// entries by name and are assembled into item chains here.
#[derive(Debug, Clone)]
pub struct Menu {
    crusts: HashMap<String, CrustSpec>,
    toppings: HashMap<String, ToppingSpec>,
}

impl Menu {
    pub fn from_source<S: MenuSource>(source: &S) -> Self {
        let crusts = source
            .crusts()
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();
        let toppings = source
            .toppings()
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();
        Self { crusts, toppings }
    }

    /// The built-in crusts offered when no catalog is configured.
    pub fn builtin_crusts() -> Vec<CrustSpec> {
        vec![
            CrustSpec {
                name: "thin".to_string(),
                price: 200.0,
                ingredients: vec!["wheat".to_string()],
            },
            CrustSpec {
                name: "thick".to_string(),
                price: 250.0,
                ingredients: vec!["wheat".to_string(), "extra wheat".to_string()],
            },
        ]
    }

    /// The built-in toppings offered when no catalog is configured.
    pub fn builtin_toppings() -> Vec<ToppingSpec> {
        vec![
            ToppingSpec {
                name: "onion".to_string(),
                price: 100.0,
                ingredient: "onion".to_string(),
            },
            ToppingSpec {
                name: "cheese".to_string(),
                price: 100.0,
                ingredient: "cheese".to_string(),
            },
        ]
    }

    pub fn has_crust(&self, name: &str) -> bool {
        self.crusts.contains_key(name)
    }

    pub fn has_topping(&self, name: &str) -> bool {
        self.toppings.contains_key(name)
    }

    pub fn crust_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.crusts.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn topping_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.toppings.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolve an order into an item chain. Name resolution happens up
    /// front, so an unknown crust or topping fails before any wrapping.
    /// Toppings wrap in list order: the first entry sits closest to the
    /// crust.
    pub fn build(&self, order: &Order) -> Result<Box<dyn MenuItem>> {
        let crust = self
            .crusts
            .get(&order.crust)
            .ok_or_else(|| MenuError::UnknownCrustError {
                name: order.crust.clone(),
            })?;

        for name in &order.toppings {
            if !self.toppings.contains_key(name) {
                return Err(MenuError::UnknownToppingError { name: name.clone() });
            }
        }

        tracing::debug!(
            "Building {} crust with {} toppings",
            crust.name,
            order.toppings.len()
        );

        let mut item: Box<dyn MenuItem> =
            Box::new(Crust::new(crust.price, crust.ingredients.clone()));

        for name in &order.toppings {
            let spec = &self.toppings[name];
            item = Box::new(Topping::new(item, spec.price, spec.ingredient.clone()));
        }

        Ok(item)
    }
}

impl Default for Menu {
    fn default() -> Self {
        let crusts = Self::builtin_crusts()
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();
        let toppings = Self::builtin_toppings()
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();
        Self { crusts, toppings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(crust: &str, toppings: &[&str]) -> Order {
        Order {
            crust: crust.to_string(),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
            gender_code: None,
        }
    }

    #[test]
    fn test_default_menu_builds_seed_orders() {
        let menu = Menu::default();

        let item = menu.build(&order("thin", &["onion", "cheese"])).unwrap();
        assert_eq!(item.price(), 400.0);
        assert_eq!(item.ingredients(), vec!["wheat", "onion", "cheese"]);

        let item = menu.build(&order("thick", &["onion", "cheese"])).unwrap();
        assert_eq!(item.price(), 450.0);
        assert_eq!(
            item.ingredients(),
            vec!["wheat", "extra wheat", "onion", "cheese"]
        );
    }

    #[test]
    fn test_topping_list_order_is_wrap_order() {
        let menu = Menu::default();

        let item = menu.build(&order("thin", &["cheese", "onion"])).unwrap();
        assert_eq!(item.price(), 400.0);
        assert_eq!(item.ingredients(), vec!["wheat", "cheese", "onion"]);
    }

    #[test]
    fn test_bare_crust_order() {
        let menu = Menu::default();

        let item = menu.build(&order("thick", &[])).unwrap();
        assert_eq!(item.price(), 250.0);
        assert_eq!(item.ingredients(), vec!["wheat", "extra wheat"]);
    }

    #[test]
    fn test_unknown_crust_fails_before_building() {
        let menu = Menu::default();

        let err = menu.build(&order("stuffed", &["onion"])).unwrap_err();
        assert!(matches!(err, MenuError::UnknownCrustError { name } if name == "stuffed"));
    }

    #[test]
    fn test_unknown_topping_fails_before_building() {
        let menu = Menu::default();

        let err = menu
            .build(&order("thin", &["onion", "pineapple"]))
            .unwrap_err();
        assert!(matches!(err, MenuError::UnknownToppingError { name } if name == "pineapple"));
    }

    #[test]
    fn test_repeated_topping_is_allowed() {
        let menu = Menu::default();

        let item = menu.build(&order("thin", &["cheese", "cheese"])).unwrap();
        assert_eq!(item.price(), 400.0);
        assert_eq!(item.ingredients(), vec!["wheat", "cheese", "cheese"]);
    }

    #[test]
    fn test_menu_from_custom_source() {
        struct FixedSource;

        impl MenuSource for FixedSource {
            fn crusts(&self) -> Vec<CrustSpec> {
                vec![CrustSpec {
                    name: "gluten-free".to_string(),
                    price: 300.0,
                    ingredients: vec!["rice flour".to_string()],
                }]
            }

            fn toppings(&self) -> Vec<ToppingSpec> {
                vec![ToppingSpec {
                    name: "basil".to_string(),
                    price: 50.0,
                    ingredient: "basil".to_string(),
                }]
            }
        }

        let menu = Menu::from_source(&FixedSource);
        assert!(menu.has_crust("gluten-free"));
        assert!(!menu.has_crust("thin"));

        let item = menu.build(&order("gluten-free", &["basil"])).unwrap();
        assert_eq!(item.price(), 350.0);
        assert_eq!(item.ingredients(), vec!["rice flour", "basil"]);
    }
}
