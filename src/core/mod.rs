pub mod classifier;
pub mod engine;
pub mod menu;

pub use crate::domain::model::{Crust, CrustSpec, Order, Receipt, Topping, ToppingSpec};
pub use crate::domain::ports::{MenuItem, MenuSource};
pub use crate::utils::error::Result;
