//! # Data Models Module / 数据模型模块
//!
//! This module defines the data delivered by the test-execution host: spec
//! results, browser descriptors and the end-of-run result. Field names on the
//! wire follow the host's JSON shape (`suite`, `time`, `log`, ...).
//!
//! 此模块定义测试执行宿主传递的数据：规格结果、浏览器描述和运行结束结果。
//! 序列化字段名遵循宿主的 JSON 结构（`suite`、`time`、`log` 等）。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root-to-leaf names of the nested groups a spec lives in.
/// 规格所在嵌套分组的名称序列（从根到叶）。
pub type SuitePath = Vec<String>;

/// The status category a spec result is reported under.
/// 规格结果的状态类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecStatus {
    /// The spec passed. / 规格通过。
    Success,
    /// The spec failed. / 规格失败。
    Failure,
    /// The spec was skipped. / 规格被跳过。
    Skipped,
}

impl fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecStatus::Success => "success",
            SpecStatus::Failure => "failure",
            SpecStatus::Skipped => "skipped",
        };
        f.write_str(name)
    }
}

/// The result of one spec, as delivered by the host. Immutable once delivered.
///
/// 宿主传递的单个规格的结果。传递后不可变。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecResult {
    /// Names of the enclosing suites, outermost first.
    /// 外层套件名称，最外层在前。
    #[serde(rename = "suite", default)]
    pub suite_path: SuitePath,
    /// Human-readable description; may span several lines.
    /// 可读描述，可能包含多行。
    pub description: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub skipped: bool,
    /// Elapsed time in milliseconds. / 耗时（毫秒）。
    #[serde(rename = "time", default)]
    pub elapsed_millis: u64,
    /// Log entries attached to the spec, usually failure messages and stacks.
    /// 附加到规格的日志条目，通常是失败消息和堆栈。
    #[serde(rename = "log", default)]
    pub log_lines: Vec<String>,
}

impl SpecResult {
    /// Creates a result with the given suite path and description and no log.
    pub fn new<I, S>(suite_path: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suite_path: suite_path.into_iter().map(Into::into).collect(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Derives the status category the host would report this result under:
    /// skipped wins over success, anything else is a failure.
    ///
    /// 推导宿主报告此结果时的状态类别：跳过优先于成功，其余视为失败。
    pub fn status(&self) -> SpecStatus {
        if self.skipped {
            SpecStatus::Skipped
        } else if self.success {
            SpecStatus::Success
        } else {
            SpecStatus::Failure
        }
    }
}

/// Per-browser counters from the browser's most recent run.
/// 浏览器最近一次运行的计数器。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserResult {
    pub total: u64,
    pub success: u64,
    pub failed: u64,
    pub skipped: u64,
    pub disconnected: bool,
    pub error: bool,
    /// Wall-clock time of the run in milliseconds. / 运行的总耗时（毫秒）。
    #[serde(rename = "totalTime")]
    pub total_time_millis: u64,
    /// Time spent inside specs in milliseconds. / 规格内部耗时（毫秒）。
    #[serde(rename = "netTime")]
    pub net_time_millis: u64,
}

/// A browser (or other execution target) attached to the host.
/// 连接到宿主的浏览器（或其他执行目标）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "isConnected", default = "default_connected")]
    pub is_connected: bool,
    #[serde(rename = "lastResult", default)]
    pub last_result: BrowserResult,
}

impl BrowserInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_connected: true,
            last_result: BrowserResult::default(),
        }
    }
}

impl fmt::Display for BrowserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn default_connected() -> bool {
    true
}

/// The aggregate result of a run, delivered with the run-complete event.
///
/// 运行完成事件附带的汇总结果。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunResult {
    #[serde(rename = "browserIds")]
    pub browser_ids: Vec<String>,
    pub success: u64,
    pub failed: u64,
    pub disconnected: bool,
    pub error: bool,
}

impl RunResult {
    /// Whether the run should be considered unsuccessful by a host.
    /// 宿主是否应将此次运行视为不成功。
    pub fn is_failure(&self) -> bool {
        self.failed > 0 || self.error || self.disconnected
    }
}
