use crate::core::menu::Menu;
use crate::domain::model::{CrustSpec, Order, ToppingSpec};
use crate::domain::ports::MenuSource;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative_price, validate_path, validate_unique_names,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub shop: ShopConfig,
    pub menu: Option<MenuConfig>,
    #[serde(default)]
    pub orders: Vec<Order>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub crusts: Vec<CrustSpec>,
    #[serde(default)]
    pub toppings: Vec<ToppingSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入訂單檔
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析訂單檔
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RECEIPTS_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證訂單檔的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("shop.name", &self.shop.name)?;

        if let Some(menu) = &self.menu {
            validate_unique_names(
                "menu.crusts",
                menu.crusts.iter().map(|c| c.name.as_str()),
            )?;
            validate_unique_names(
                "menu.toppings",
                menu.toppings.iter().map(|t| t.name.as_str()),
            )?;

            for crust in &menu.crusts {
                validate_non_empty_string("menu.crusts.name", &crust.name)?;
                validate_non_negative_price("menu.crusts.price", crust.price)?;
                for ingredient in &crust.ingredients {
                    validate_non_empty_string("menu.crusts.ingredients", ingredient)?;
                }
            }

            for topping in &menu.toppings {
                validate_non_empty_string("menu.toppings.name", &topping.name)?;
                validate_non_negative_price("menu.toppings.price", topping.price)?;
                validate_non_empty_string("menu.toppings.ingredient", &topping.ingredient)?;
            }
        }

        for order in &self.orders {
            validate_non_empty_string("orders.crust", &order.crust)?;
        }

        if let Some(output) = &self.output {
            validate_path("output.path", &output.path)?;
        }

        Ok(())
    }

    /// 取得收據輸出路徑
    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.path.as_str())
    }
}

impl MenuSource for TomlConfig {
    fn crusts(&self) -> Vec<CrustSpec> {
        match &self.menu {
            Some(menu) if !menu.crusts.is_empty() => menu.crusts.clone(),
            // 訂單檔未定義菜單時使用內建菜單
            _ => Menu::builtin_crusts(),
        }
    }

    fn toppings(&self) -> Vec<ToppingSpec> {
        match &self.menu {
            Some(menu) if !menu.toppings.is_empty() => menu.toppings.clone(),
            _ => Menu::builtin_toppings(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
