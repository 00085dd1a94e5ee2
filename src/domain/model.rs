use crate::domain::ports::MenuItem;
use serde::{Deserialize, Serialize};

/// Leaf item of a chain. Fixed price and ingredient list, immutable after
/// construction. The constructor does not validate either value.
#[derive(Debug, Clone)]
pub struct Crust {
    price: f64,
    ingredients: Vec<String>,
}

impl Crust {
    pub fn new(price: f64, ingredients: Vec<String>) -> Self {
        Self { price, ingredients }
    }
}

impl MenuItem for Crust {
    fn price(&self) -> f64 {
        self.price
    }

    fn ingredients(&self) -> Vec<String> {
        self.ingredients.clone()
    }
}

/// Wrapper item. Holds exactly one inner item, fixed at construction, plus
/// a price increment and the ingredient it contributes. The inner item may
/// be owned, borrowed or boxed; a chain is built by nesting constructors.
#[derive(Debug, Clone)]
pub struct Topping<I> {
    inner: I,
    price: f64,
    ingredient: String,
}

impl<I: MenuItem> Topping<I> {
    pub fn new(inner: I, price: f64, ingredient: impl Into<String>) -> Self {
        Self {
            inner,
            price,
            ingredient: ingredient.into(),
        }
    }
}

impl<I: MenuItem> MenuItem for Topping<I> {
    fn price(&self) -> f64 {
        self.price + self.inner.price()
    }

    fn ingredients(&self) -> Vec<String> {
        let mut ingredients = self.inner.ingredients();
        ingredients.push(self.ingredient.clone());
        ingredients
    }
}

/// Catalog entry for a crust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrustSpec {
    pub name: String,
    pub price: f64,
    pub ingredients: Vec<String>,
}

/// Catalog entry for a topping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToppingSpec {
    pub name: String,
    pub price: f64,
    pub ingredient: String,
}

/// One order: a crust name, topping names in wrap order and an optional
/// numeric gender code from the customer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub crust: String,
    #[serde(default)]
    pub toppings: Vec<String>,
    #[serde(default)]
    pub gender_code: Option<i64>,
}

/// Pricing summary for one order.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub total: f64,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_gender: Option<String>,
}
