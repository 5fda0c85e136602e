/// 日志工具模块
///
/// 提供日志初始化和启动横幅输出
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化全局日志订阅器
///
/// 默认 info 级别，可通过 RUST_LOG 覆盖。重复调用安全。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 考试答案生成与核查服务");
    info!("🤖 模型: {} @ {}", config.model_name, config.ollama_base_url);
    info!("🔍 搜索后端: {}", config.searxng_base_url);
    info!("📁 单题目录: {} | 输出目录: {}", config.md_dir, config.out_dir);
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}
