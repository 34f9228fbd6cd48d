//! # Spec Reporter Library / Spec Reporter 库
//!
//! This library provides a streaming, incremental formatter for test-execution
//! results. It receives discrete events from a test-execution host (a spec
//! result, a browser console line, a run-completion summary) and renders a
//! hierarchically indented transcript plus an end-of-run failure digest.
//!
//! 此库为测试执行结果提供流式、增量的格式化器。它从测试执行宿主接收离散事件
//! （规格结果、浏览器控制台行、运行完成摘要），并渲染分层缩进的记录以及
//! 运行结束时的失败摘要。
//!
//! ## Modules / 模块
//!
//! - `core` - Data model, configuration, error taxonomy and run-scoped state
//! - `infra` - Output sink, error-text formatter, diagnostic channel and i18n
//! - `reporting` - Spec blocks, failure digest, run summary and the reporter session
//! - `cli` - Command-line interface that replays host event streams
//!
//! - `core` - 数据模型、配置、错误分类和运行期状态
//! - `infra` - 输出接收器、错误文本格式化器、诊断通道和国际化
//! - `reporting` - 规格块、失败摘要、运行摘要和报告器会话
//! - `cli` - 回放宿主事件流的命令行接口

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::models;
pub use reporting::SpecReporter;

/// Detects the system locale and returns the closest available one.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
pub fn detect_locale() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        return locale;
    }
    locale
        .split('-')
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
