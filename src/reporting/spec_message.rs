//! # Spec Message Module / 规格消息模块
//!
//! Builds the printable block for one spec result and routes it to the
//! output sink, after any newly entered suite headers.
//!
//! 为单个规格结果构建可打印块，并在新进入的套件标题之后写入输出。
//!
//! ## Output Format / 输出格式
//! ```text
//!
//!   Calculator
//!     addition
//!
//!       ✓ adds two numbers (3ms)
//!
//!       ✗ carries the overflow
//!         into the next digit
//! 	Expected 10 to be 11.
//! ```

use std::fmt::Write as _;
use std::io;
use std::num::NonZeroUsize;

use crate::core::config::ReporterConfig;
use crate::core::errors::ReporterError;
use crate::core::failures::FailureAggregator;
use crate::core::models::{SpecResult, SpecStatus};
use crate::core::suite_tree::SuiteTreePrinter;
use crate::infra::diagnostics::Diagnostics;
use crate::infra::error_text::ErrorTextFormatter;
use crate::infra::output::OutputSink;
use crate::reporting::log_lines::truncate_entry;
use crate::reporting::palette::{Palette, Tint};

/// Indent marker handed to the error-text formatter for spec log entries.
pub const LOG_INDENT_MARKER: &str = "\t";

/// Formats spec blocks. Built once from the reporter config.
///
/// 格式化规格块。根据报告器配置构建一次。
#[derive(Debug, Clone)]
pub struct SpecMessageFormatter {
    palette: Palette,
    show_spec_timing: bool,
    max_log_lines: Option<NonZeroUsize>,
    fail_fast: bool,
}

impl SpecMessageFormatter {
    pub fn new(config: &ReporterConfig, palette: Palette) -> Self {
        Self {
            palette,
            show_spec_timing: config.show_spec_timing,
            max_log_lines: config.max_log_lines,
            fail_fast: config.fail_fast,
        }
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Builds the block for one result: marker and description lines,
    /// optional timing, then the (truncated) log entries. The block starts
    /// with a line break, so a blank line separates it from the previous
    /// output, and ends with exactly one line break.
    ///
    /// 为单个结果构建输出块：标记和描述行、可选的耗时，以及（截断后的）日志条目。
    pub fn format_block(
        &self,
        status: SpecStatus,
        marker: &str,
        result: &SpecResult,
        error_formatter: &dyn ErrorTextFormatter,
    ) -> String {
        let indent = "  ".repeat(result.suite_path.len() + 1);

        // Every line, the first included, opens with a line break.
        let mut description = String::new();
        for (i, line) in result.description.split('\n').enumerate() {
            let marker = if i == 0 { marker } else { "" };
            let _ = write!(description, "\n{indent}{marker}{}", line.trim());
        }

        let mut block = match block_tint(status) {
            Some(tint) => self.palette.paint(tint, &description),
            None => description,
        };

        if self.show_spec_timing {
            let _ = write!(block, " ({}ms)", result.elapsed_millis);
        }

        for entry in &result.log_lines {
            let text = truncate_entry(entry, self.max_log_lines);
            block.push('\n');
            block.push_str(&error_formatter.format_error(&text, LOG_INDENT_MARKER));
        }

        block.push('\n');
        block
    }

    /// Writes newly entered suite headers, then the block, as one sink call.
    pub fn write_spec(
        &self,
        status: SpecStatus,
        marker: &str,
        result: &SpecResult,
        tree: &mut SuiteTreePrinter,
        sink: &mut dyn OutputSink,
        error_formatter: &dyn ErrorTextFormatter,
    ) -> io::Result<()> {
        tree.emit_headers(&result.suite_path).write_to(sink)?;
        sink.write_common_msg(&self.format_block(status, marker, result, error_formatter))
    }
}

/// Color used for the marker glyph itself.
fn marker_tint(status: SpecStatus) -> Tint {
    match status {
        SpecStatus::Success => Tint::Green,
        SpecStatus::Failure => Tint::Red,
        SpecStatus::Skipped => Tint::Cyan,
    }
}

/// Color the description lines are wrapped in. Passing specs stay unwrapped.
fn block_tint(status: SpecStatus) -> Option<Tint> {
    match status {
        SpecStatus::Success => None,
        SpecStatus::Failure => Some(Tint::Red),
        SpecStatus::Skipped => Some(Tint::Cyan),
    }
}

/// Everything a [`StatusEmitter`] touches while handling one result.
/// 处理单个结果时 [`StatusEmitter`] 会用到的所有内容。
pub struct EmitContext<'a> {
    pub formatter: &'a SpecMessageFormatter,
    pub tree: &'a mut SuiteTreePrinter,
    pub failures: &'a mut FailureAggregator,
    pub sink: &'a mut dyn OutputSink,
    pub error_formatter: &'a dyn ErrorTextFormatter,
    pub diagnostics: &'a dyn Diagnostics,
}

/// The handler for one status category, selected once at construction.
/// A suppressed category is a concrete no-op: no headers, no aggregation,
/// no output.
///
/// 单个状态类别的处理器，在构建时选定一次。被抑制的类别是一个具体的空操作：
/// 不输出标题、不聚合、不输出内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEmitter {
    Print {
        status: SpecStatus,
        /// Marker glyph, pre-colored when colors are on.
        marker: String,
    },
    Suppressed,
}

impl StatusEmitter {
    pub fn new(status: SpecStatus, suppressed: bool, prefix: &str, palette: Palette) -> Self {
        if suppressed {
            return StatusEmitter::Suppressed;
        }
        StatusEmitter::Print {
            status,
            marker: palette.paint(marker_tint(status), prefix),
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, StatusEmitter::Suppressed)
    }

    /// Handles one result. Failures are recorded before anything is written;
    /// a write fault is reported and swallowed. In fail-fast mode a failure
    /// returns [`ReporterError::FatalAbort`] once it has been recorded and
    /// printed.
    ///
    /// 处理单个结果。失败在写入前被记录；写入故障会被报告并吞掉。
    /// 快速失败模式下，失败在记录并打印后返回 `FatalAbort`。
    pub fn emit(&self, ctx: &mut EmitContext<'_>, result: &SpecResult) -> Result<(), ReporterError> {
        let StatusEmitter::Print { status, marker } = self else {
            return Ok(());
        };

        if *status == SpecStatus::Failure {
            ctx.failures.record(result.clone());
        }

        if let Err(source) = ctx.formatter.write_spec(
            *status,
            marker,
            result,
            ctx.tree,
            ctx.sink,
            ctx.error_formatter,
        ) {
            ctx.diagnostics.report(&ReporterError::Rendering {
                description: result.description.clone(),
                source,
            });
        }

        if *status == SpecStatus::Failure && ctx.formatter.fail_fast() {
            return Err(ReporterError::fatal_abort(result.description.clone()));
        }
        Ok(())
    }
}

/// One emitter per status category.
#[derive(Debug, Clone)]
pub struct StatusEmitters {
    success: StatusEmitter,
    failure: StatusEmitter,
    skipped: StatusEmitter,
}

impl StatusEmitters {
    pub fn new(config: &ReporterConfig, palette: Palette) -> Self {
        let prefixes = config.resolved_prefixes();
        Self {
            success: StatusEmitter::new(
                SpecStatus::Success,
                config.suppress_passed,
                &prefixes.success,
                palette,
            ),
            failure: StatusEmitter::new(
                SpecStatus::Failure,
                config.suppress_failed,
                &prefixes.failure,
                palette,
            ),
            skipped: StatusEmitter::new(
                SpecStatus::Skipped,
                config.suppress_skipped,
                &prefixes.skipped,
                palette,
            ),
        }
    }

    pub fn get(&self, status: SpecStatus) -> &StatusEmitter {
        match status {
            SpecStatus::Success => &self.success,
            SpecStatus::Failure => &self.failure,
            SpecStatus::Skipped => &self.skipped,
        }
    }
}
