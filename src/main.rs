use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use rust_gradebook::config::AppConfig;
use rust_gradebook::runtime::lifetime;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting integrity check...
        Project: {}
        Version: {}
        Data dir: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.data_dir().display()
    );

    let code = run(&config, start_datetime).await;

    // 退出前刷新日志
    drop(guard);
    std::process::exit(code);
}

/// 执行完整性检查，返回进程退出码
async fn run(config: &AppConfig, start_datetime: chrono::DateTime<chrono::Utc>) -> i32 {
    let context = match lifetime::startup::prepare_startup(config).await {
        Ok(context) => context,
        Err(e) => {
            error!("{}", e.format_simple());
            return 2;
        }
    };

    let report = match context.integrity.check().await {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e.format_simple());
            return 2;
        }
    };

    debug!(
        "Integrity check completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize report: {}", e);
            return 2;
        }
    }

    if report.is_clean() { 0 } else { 1 }
}
