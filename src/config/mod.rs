pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::menu::Menu;
#[cfg(feature = "cli")]
use crate::domain::model::{CrustSpec, Order, ToppingSpec};
#[cfg(feature = "cli")]
use crate::domain::ports::MenuSource;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-menu")]
#[command(about = "A small pricing tool for pizza orders")]
pub struct CliConfig {
    /// Crust to start from
    #[arg(long, default_value = "thin")]
    pub crust: String,

    /// Toppings in wrap order, closest to the crust first
    #[arg(long, value_delimiter = ',')]
    pub toppings: Vec<String>,

    /// Numeric customer gender code (0 = male, 1 = female)
    #[arg(long)]
    pub gender_code: Option<i64>,

    /// Print the receipt as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn order(&self) -> Order {
        Order {
            crust: self.crust.clone(),
            toppings: self.toppings.clone(),
            gender_code: self.gender_code,
        }
    }
}

#[cfg(feature = "cli")]
impl MenuSource for CliConfig {
    fn crusts(&self) -> Vec<CrustSpec> {
        Menu::builtin_crusts()
    }

    fn toppings(&self) -> Vec<ToppingSpec> {
        Menu::builtin_toppings()
    }
}
