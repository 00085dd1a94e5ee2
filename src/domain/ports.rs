use crate::domain::model::{CrustSpec, ToppingSpec};

/// A priced, ingredient-bearing entry: a crust on its own, or a crust
/// wrapped in any number of toppings.
pub trait MenuItem: std::fmt::Debug {
    fn price(&self) -> f64;

    /// Ingredients in wrap order, innermost first. Returns a fresh vector
    /// on every call; callers may mutate the result freely.
    fn ingredients(&self) -> Vec<String>;
}

impl<T: MenuItem + ?Sized> MenuItem for &T {
    fn price(&self) -> f64 {
        (**self).price()
    }

    fn ingredients(&self) -> Vec<String> {
        (**self).ingredients()
    }
}

impl<T: MenuItem + ?Sized> MenuItem for Box<T> {
    fn price(&self) -> f64 {
        (**self).price()
    }

    fn ingredients(&self) -> Vec<String> {
        (**self).ingredients()
    }
}

/// Provider of the menu catalog. Implemented by the configuration types so
/// the core stays agnostic of where the catalog came from.
pub trait MenuSource {
    fn crusts(&self) -> Vec<CrustSpec>;
    fn toppings(&self) -> Vec<ToppingSpec>;
}
