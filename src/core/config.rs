//! # Configuration Module / 配置模块
//!
//! Reporter options, loaded from a TOML file (default `SpecReporter.toml`).
//! Every field is optional; a missing file section falls back to defaults.
//!
//! 报告器选项，从 TOML 文件（默认 `SpecReporter.toml`）加载。
//! 所有字段均为可选；缺失时使用默认值。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

/// Default config file name looked up in the working directory.
/// 在工作目录中查找的默认配置文件名。
pub const DEFAULT_CONFIG_FILE: &str = "SpecReporter.toml";

/// Status marker glyph overrides. Each one replaces only its own glyph.
/// 状态标记字形的覆盖。每项只替换其对应的字形。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrefixOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
}

/// The resolved status marker glyphs.
/// 解析后的状态标记字形。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixes {
    pub success: String,
    pub failure: String,
    pub skipped: String,
}

impl Prefixes {
    /// Default glyphs for the given operating system (`std::env::consts::OS`).
    /// Windows consoles get glyphs that render in legacy code pages.
    ///
    /// 给定操作系统的默认字形。Windows 控制台使用可在旧代码页中显示的字形。
    pub fn for_platform(os: &str) -> Self {
        if os == "windows" {
            Self {
                success: "\u{221A} ".to_string(),
                failure: "\u{00D7} ".to_string(),
                skipped: "- ".to_string(),
            }
        } else {
            Self {
                success: "✓ ".to_string(),
                failure: "✗ ".to_string(),
                skipped: "- ".to_string(),
            }
        }
    }

    /// Applies `overrides` on top of the defaults for `os`.
    pub fn resolve(overrides: &PrefixOverrides, os: &str) -> Self {
        let defaults = Self::for_platform(os);
        Self {
            success: overrides.success.clone().unwrap_or(defaults.success),
            failure: overrides.failure.clone().unwrap_or(defaults.failure),
            skipped: overrides.skipped.clone().unwrap_or(defaults.skipped),
        }
    }
}

/// All reporter options.
///
/// 所有报告器选项。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// The language for summary lines and CLI messages (e.g., "en", "zh-CN").
    /// 摘要行和 CLI 消息使用的语言（例如 "en"、"zh-CN"）。
    pub language: String,
    /// Global color switch. / 全局颜色开关。
    pub colors: bool,
    pub prefixes: PrefixOverrides,
    pub suppress_passed: bool,
    pub suppress_failed: bool,
    pub suppress_skipped: bool,
    /// Skip the numbered failure digest at the end of a run.
    /// 跳过运行结束时的编号失败摘要。
    pub suppress_error_summary: bool,
    /// Append ` (<n>ms)` to every spec block.
    pub show_spec_timing: bool,
    /// Keep only the first N lines of each log entry. Absent means unlimited.
    /// 每个日志条目只保留前 N 行。缺省表示不限制。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_log_lines: Option<NonZeroUsize>,
    /// Abort the run at the first failing spec.
    /// 在第一个失败的规格处中止运行。
    pub fail_fast: bool,
    /// Echo browser console output to the terminal.
    /// 将浏览器控制台输出回显到终端。
    pub browser_console_log: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            colors: false,
            prefixes: PrefixOverrides::default(),
            suppress_passed: false,
            suppress_failed: false,
            suppress_skipped: false,
            suppress_error_summary: false,
            show_spec_timing: false,
            max_log_lines: None,
            fail_fast: false,
            browser_console_log: true,
        }
    }
}

impl ReporterConfig {
    /// The marker glyphs for the current platform with overrides applied.
    pub fn resolved_prefixes(&self) -> Prefixes {
        Prefixes::resolve(&self.prefixes, std::env::consts::OS)
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Reads and parses a reporter config file.
///
/// 读取并解析报告器配置文件。
///
/// # Arguments
/// * `path` - Path to the TOML file
///
/// # Returns
/// The parsed config, or an error naming the file that failed
pub fn load_config(path: &Path) -> Result<ReporterConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reporter config: {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Failed to parse reporter config: {}", path.display()))
}

/// Parses reporter config from TOML text.
pub fn parse_config(content: &str) -> Result<ReporterConfig> {
    Ok(toml::from_str(content)?)
}
