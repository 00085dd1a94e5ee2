use clap::Parser;
use small_menu::config::toml_config::TomlConfig;
use small_menu::utils::{logger, validation::Validate};
use small_menu::{Menu, OrderEngine};

#[derive(Parser)]
#[command(name = "toml-orders")]
#[command(about = "Price a batch of pizza orders from a TOML order file")]
struct Args {
    /// Path to TOML order file
    #[arg(short, long, default_value = "orders.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override receipts output path from config
    #[arg(long)]
    output: Option<String>,

    /// Dry run - show what would be priced without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based order pricing");
    tracing::info!("📁 Loading order file from: {}", args.config);

    // 載入 TOML 訂單檔
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load order file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證訂單檔
    if let Err(e) = config.validate() {
        tracing::error!("❌ Order file validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Order file loaded and validated successfully");

    let menu = Menu::from_source(&config);

    // 顯示訂單檔摘要
    display_config_summary(&config, &menu, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No orders will be priced");
        perform_dry_run(&config, &menu);
        return Ok(());
    }

    // 創建訂單引擎並計價
    let engine = OrderEngine::new(menu);

    match engine.run(&config.orders) {
        Ok(receipts) => {
            println!("✅ Priced {} orders successfully!", receipts.len());
            for (index, receipt) in receipts.iter().enumerate() {
                println!(
                    "🧾 Order {}: total {} ({})",
                    index + 1,
                    receipt.total,
                    receipt.ingredients.join(", ")
                );
                if let Some(gender) = &receipt.customer_gender {
                    println!("   👤 Customer gender: {}", gender);
                }
            }

            // 寫出收據 JSON（命令列參數優先於訂單檔設定）
            let output_path = args
                .output
                .or_else(|| config.output_path().map(|p| p.to_string()));

            if let Some(path) = output_path {
                let json = serde_json::to_string_pretty(&receipts)?;
                std::fs::write(&path, json)?;
                tracing::info!("📁 Receipts saved to: {}", path);
                println!("📁 Receipts saved to: {}", path);
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

fn display_config_summary(config: &TomlConfig, menu: &Menu, args: &Args) {
    println!("📋 Order File Summary:");
    println!("  Shop: {} v{}", config.shop.name, config.shop.version);
    println!("  Orders: {}", config.orders.len());
    println!("  Crusts: {}", menu.crust_names().join(", "));
    println!("  Toppings: {}", menu.topping_names().join(", "));

    if let Some(path) = config.output_path() {
        println!("  Receipts output: {}", path);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig, menu: &Menu) {
    println!("🔍 Dry Run Analysis:");
    println!();

    for (index, order) in config.orders.iter().enumerate() {
        println!("📦 Order {}:", index + 1);

        if menu.has_crust(&order.crust) {
            println!("  ✅ Crust: {}", order.crust);
        } else {
            println!("  ❌ Crust: {} (not on the menu)", order.crust);
        }

        for topping in &order.toppings {
            if menu.has_topping(topping) {
                println!("  ✅ Topping: {}", topping);
            } else {
                println!("  ❌ Topping: {} (not on the menu)", topping);
            }
        }

        if let Some(code) = order.gender_code {
            println!(
                "  👤 Customer gender code: {} -> {}",
                code,
                small_menu::classify(code)
            );
        }
    }

    println!();
    println!("✅ Dry run analysis complete. Remove --dry-run to price the orders.");
}
