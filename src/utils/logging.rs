/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::{CopyOutcome, CopyRequest};

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则默认 `info`（`verbose` 时为 `debug`）。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `site_url`: 当前站点
/// - `template`: 模板位置描述
pub fn log_startup(site_url: &str, template: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 页面复制启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 当前站点: {}", site_url);
    info!("📋 模板: {}", template);
    info!("{}", "=".repeat(60));
}

/// 记录一次复制的结果
pub fn log_copy_summary(request: &CopyRequest, outcome: &CopyOutcome) {
    info!("{}", "─".repeat(60));
    match outcome {
        CopyOutcome::Copied(page) => {
            info!("✅ {} 复制完成 (ID: {})", request, page.page_id);
            info!("🔗 {}", page.page_url);
        }
        CopyOutcome::TemplateNotFound => {
            info!("⚠️ {} 模板不存在，页面已创建但未复制内容", request);
        }
        CopyOutcome::DestinationNotFound => {
            info!("⚠️ {} 创建后未能读取到目标页面，未复制内容", request);
        }
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
