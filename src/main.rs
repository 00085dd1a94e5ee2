use clap::Parser;
use small_menu::utils::logger;
use small_menu::{CliConfig, Menu, OrderEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-menu CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 創建菜單和訂單引擎
    let menu = Menu::from_source(&config);
    let engine = OrderEngine::new(menu);
    let order = config.order();

    match engine.price_order(&order) {
        Ok(receipt) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            } else {
                println!("✅ Order priced successfully!");
                println!("💰 Total: {}", receipt.total);
                println!("🧾 Ingredients: {}", receipt.ingredients.join(", "));
                if let Some(gender) = &receipt.customer_gender {
                    println!("👤 Customer gender: {}", gender);
                }
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Order pricing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                small_menu::utils::error::ErrorSeverity::Low => 0,
                small_menu::utils::error::ErrorSeverity::Medium => 2,
                small_menu::utils::error::ErrorSeverity::High => 1,
                small_menu::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
