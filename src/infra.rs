//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the seams the reporter talks to: the output sink,
//! the error-text formatter, the diagnostic channel and i18n lookup.
//!
//! 此模块提供报告器所依赖的接口：输出接收器、错误文本格式化器、
//! 诊断通道以及国际化查找。

pub mod diagnostics;
pub mod error_text;
pub mod output;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
