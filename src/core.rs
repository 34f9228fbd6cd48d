//! # Core Module / 核心模块
//!
//! This module contains the core of the spec reporter: the host event data
//! model, reporter configuration, the error taxonomy and the run-scoped state
//! (suite tree tracking and the failure list).
//!
//! 此模块包含规格报告器的核心：宿主事件数据模型、报告器配置、
//! 错误分类以及运行期状态（套件树跟踪和失败列表）。

pub mod config;
pub mod errors;
pub mod failures;
pub mod models;
pub mod suite_tree;

// Re-exports
pub use config::ReporterConfig;
pub use errors::ReporterError;
pub use failures::FailureAggregator;
pub use models::{BrowserInfo, RunResult, SpecResult, SpecStatus};
pub use suite_tree::SuiteTreePrinter;
