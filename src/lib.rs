pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::classifier::{classify, Gender};
pub use core::engine::OrderEngine;
pub use core::menu::Menu;
pub use domain::model::{Crust, Order, Receipt, Topping};
pub use domain::ports::{MenuItem, MenuSource};
pub use utils::error::{MenuError, Result};
