//! # Diagnostic Channel / 诊断通道
//!
//! Out-of-band reporting for internal faults that must not crash the host's
//! run. The default channel emits `tracing` events.
//!
//! 用于报告不得使宿主运行崩溃的内部故障的带外通道。默认通道发出 `tracing` 事件。

use std::error::Error;

use crate::core::errors::ReporterError;

pub trait Diagnostics {
    fn report(&self, fault: &ReporterError);
}

/// Reports faults as `tracing` error events, with the full source chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, fault: &ReporterError) {
        tracing::error!(cause = %source_chain(fault), "{fault}");
    }
}

/// Joins the `source()` chain of an error with `": "`.
/// 用 `": "` 连接错误的 `source()` 链。
pub fn source_chain(err: &dyn Error) -> String {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes.join(": ")
}
