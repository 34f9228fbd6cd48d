//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a commented
//! default reporter configuration file.
//!
//! 此模块实现了 `init` 命令，用于写入带注释的默认报告器配置文件。

use anyhow::{Context, Result, bail};
use colored::*;
use std::fs;
use std::path::Path;

use crate::infra::t;

/// The config written by `init`. Parses to [`crate::core::ReporterConfig::default`]
/// apart from `language`.
pub const DEFAULT_CONFIG: &str = r#"# Spec Reporter Configuration / 规格报告器配置

# Language for summary lines / 摘要行的语言
language = "en"

# Color the output / 彩色输出
colors = false

# Hide passed, failed or skipped specs / 隐藏通过、失败或跳过的规格
suppress_passed = false
suppress_failed = false
suppress_skipped = false

# Skip the numbered failure digest / 跳过编号的失败摘要
suppress_error_summary = false

# Append the elapsed time to every spec / 在每个规格后附加耗时
show_spec_timing = false

# Abort at the first failing spec / 在第一个失败的规格处中止
fail_fast = false

# Echo browser console output / 回显浏览器控制台输出
browser_console_log = true

# Keep only the first N lines of each log entry / 每个日志条目只保留前 N 行
# max_log_lines = 5

# Status marker overrides / 状态标记覆盖
[prefixes]
# success = "PASS "
# failure = "FAIL "
# skipped = "SKIP "
"#;

/// Executes the init command with the provided arguments.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file
/// * `locale` - Language written into the file and used for messages
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(output: &Path, force: bool, locale: &str) -> Result<()> {
    if output.exists() && !force {
        bail!(t!("init.config_exists", locale = locale, path = output.display()).to_string());
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let content = DEFAULT_CONFIG.replace(
        "language = \"en\"",
        &format!("language = \"{locale}\""),
    );
    fs::write(output, content)
        .with_context(|| format!("Failed to write config file: {}", output.display()))?;

    println!(
        "{}",
        t!("init.config_written", locale = locale, path = output.display()).green()
    );
    Ok(())
}
