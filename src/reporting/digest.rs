//! # Failure Digest Module / 失败摘要模块
//!
//! Renders the numbered end-of-run digest of every failure recorded during
//! the run, in the order the failures occurred.
//!
//! 按失败发生的顺序，渲染运行结束时所有已记录失败的编号摘要。
//!
//! ## Output Format / 输出格式
//! ```text
//!
//!
//! 1) should do stuff
//!      A B
//!      The Error!
//!
//!
//! 2) should do more stuff
//!      C D
//!      Another error!
//!
//! ```

use std::io;
use std::num::NonZeroUsize;

use crate::core::errors::ReporterError;
use crate::core::models::SpecResult;
use crate::infra::diagnostics::Diagnostics;
use crate::infra::error_text::ErrorTextFormatter;
use crate::infra::output::OutputSink;
use crate::reporting::log_lines::truncate_entry;
use crate::reporting::palette::{Palette, Tint};

/// Indent of the suite line and log lines under each numbered entry.
pub const DIGEST_INDENT: &str = "     ";

pub struct DigestRenderer<'a> {
    pub palette: Palette,
    pub max_log_lines: Option<NonZeroUsize>,
    pub error_formatter: &'a dyn ErrorTextFormatter,
    pub diagnostics: &'a dyn Diagnostics,
}

impl DigestRenderer<'_> {
    /// Writes the digest. A fault inside one entry is reported to the
    /// diagnostic channel and rendering moves on to the next entry; only a
    /// failure to write the leading separator is returned.
    ///
    /// 写出摘要。单个条目内的故障会报告给诊断通道并继续渲染下一个条目；
    /// 只有写入开头分隔符失败时才会返回错误。
    pub fn render(&self, records: &[SpecResult], sink: &mut dyn OutputSink) -> io::Result<()> {
        sink.write_common_msg("\n\n")?;

        for (i, record) in records.iter().enumerate() {
            let index = i + 1;
            if let Err(source) = self.render_record(index, record, sink) {
                self.diagnostics
                    .report(&ReporterError::Digest { index, source });
            }
        }
        Ok(())
    }

    fn render_record(
        &self,
        index: usize,
        record: &SpecResult,
        sink: &mut dyn OutputSink,
    ) -> io::Result<()> {
        if index > 1 {
            sink.write_common_msg("\n")?;
        }

        let description = record
            .description
            .split('\n')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n");
        sink.write_common_msg(
            &self
                .palette
                .paint(Tint::Red, &format!("{index}) {description}\n")),
        )?;

        sink.write_common_msg(&self.palette.paint(
            Tint::Red,
            &format!("{DIGEST_INDENT}{}\n", record.suite_path.join(" ")),
        ))?;

        for entry in &record.log_lines {
            let text = truncate_entry(entry, self.max_log_lines);
            let formatted = self.error_formatter.format_error(&text, "");
            sink.write_common_msg(&format!(
                "{DIGEST_INDENT}{}\n",
                self.palette.paint(Tint::Grey, &formatted)
            ))?;
        }

        sink.write_common_msg("\n")
    }
}
