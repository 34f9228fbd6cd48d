//! # Run Summary Module / 运行摘要模块
//!
//! End-of-run output: browser descriptors, the aggregate totals line and,
//! when there were failures, the failure digest.
//!
//! 运行结束时的输出：浏览器描述、汇总行，以及存在失败时的失败摘要。

use std::io;

use crate::core::models::{BrowserInfo, RunResult, SpecResult};
use crate::infra::output::OutputSink;
use crate::infra::t;
use crate::reporting::browser::BrowserRenderer;
use crate::reporting::digest::DigestRenderer;
use crate::reporting::palette::{Palette, Tint};

pub struct RunSummaryWriter<'a> {
    pub palette: Palette,
    pub locale: &'a str,
    pub suppress_error_summary: bool,
    pub browser_renderer: &'a dyn BrowserRenderer,
    pub digest: DigestRenderer<'a>,
}

impl RunSummaryWriter<'_> {
    /// Writes the run summary. Totals (and the digest) are only printed when
    /// at least one browser ran and the run neither disconnected nor errored.
    /// A trailing blank line is always written.
    ///
    /// 写出运行摘要。仅当至少一个浏览器运行过且运行未断开、未出错时才打印汇总
    /// （以及失败摘要）。末尾总是写入一个空行。
    pub fn write(
        &self,
        browsers: &[BrowserInfo],
        run: &RunResult,
        failures: &[SpecResult],
        sink: &mut dyn OutputSink,
    ) -> io::Result<()> {
        let descriptors = browsers
            .iter()
            .map(|browser| self.browser_renderer.render_browser(browser))
            .collect::<Vec<_>>()
            .join("\n");
        sink.write_common_msg(&format!("\n{descriptors}\n"))?;

        if !browsers.is_empty() && !run.disconnected && !run.error {
            if run.failed == 0 {
                let line = t!(
                    "summary.total_success",
                    locale = self.locale,
                    success = run.success
                );
                sink.write(&format!("{}\n", self.palette.paint(Tint::Green, &line)))?;
            } else {
                let line = t!(
                    "summary.total_failed",
                    locale = self.locale,
                    failed = run.failed,
                    success = run.success
                );
                sink.write(&format!("{}\n", self.palette.paint(Tint::Red, &line)))?;
                if !self.suppress_error_summary {
                    self.digest.render(failures, sink)?;
                }
            }
        }

        sink.write("\n")
    }
}
