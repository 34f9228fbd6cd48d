//! # Reporter Session Module / 报告器会话模块
//!
//! [`SpecReporter`] is the long-lived session object the host drives with
//! events. It owns the run-scoped state (the suite tree tracker and the
//! failure list) and resets both when a run completes.
//!
//! [`SpecReporter`] 是宿主通过事件驱动的长期会话对象。它拥有运行期状态
//! （套件树跟踪器和失败列表），并在运行完成时重置二者。
//!
//! Events are handled serially; no handler runs concurrently with another.
//! 事件按顺序处理；处理器之间不会并发执行。

use crate::core::config::ReporterConfig;
use crate::core::errors::ReporterError;
use crate::core::failures::FailureAggregator;
use crate::core::models::{BrowserInfo, RunResult, SpecResult, SpecStatus};
use crate::core::suite_tree::SuiteTreePrinter;
use crate::infra::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::infra::error_text::{DefaultErrorFormatter, ErrorTextFormatter};
use crate::infra::output::OutputSink;
use crate::infra::t;
use crate::reporting::browser::{BrowserRenderer, DefaultBrowserRenderer};
use crate::reporting::digest::DigestRenderer;
use crate::reporting::palette::{Palette, Tint};
use crate::reporting::spec_message::{
    EmitContext, LOG_INDENT_MARKER, SpecMessageFormatter, StatusEmitters,
};
use crate::reporting::summary::RunSummaryWriter;

pub struct SpecReporter<S: OutputSink> {
    config: ReporterConfig,
    palette: Palette,
    formatter: SpecMessageFormatter,
    emitters: StatusEmitters,
    tree: SuiteTreePrinter,
    failures: FailureAggregator,
    browsers: Vec<String>,
    sink: S,
    error_formatter: Box<dyn ErrorTextFormatter>,
    browser_renderer: Box<dyn BrowserRenderer>,
    diagnostics: Box<dyn Diagnostics>,
}

impl<S: OutputSink> SpecReporter<S> {
    /// Creates a session with the default collaborators: the default error
    /// text formatter, the default browser descriptor and `tracing`
    /// diagnostics.
    ///
    /// 使用默认协作者创建会话。
    pub fn new(config: ReporterConfig, sink: S) -> Self {
        let palette = Palette::new(config.colors);
        Self {
            formatter: SpecMessageFormatter::new(&config, palette),
            emitters: StatusEmitters::new(&config, palette),
            browser_renderer: Box::new(DefaultBrowserRenderer::new(
                palette,
                config.language.clone(),
            )),
            palette,
            config,
            tree: SuiteTreePrinter::new(),
            failures: FailureAggregator::new(),
            browsers: Vec::new(),
            sink,
            error_formatter: Box::new(DefaultErrorFormatter),
            diagnostics: Box::new(TracingDiagnostics),
        }
    }

    pub fn with_error_formatter(mut self, formatter: impl ErrorTextFormatter + 'static) -> Self {
        self.error_formatter = Box::new(formatter);
        self
    }

    pub fn with_browser_renderer(mut self, renderer: impl BrowserRenderer + 'static) -> Self {
        self.browser_renderer = Box::new(renderer);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    pub fn emitters(&self) -> &StatusEmitters {
        &self.emitters
    }

    /// Failures recorded so far in the current run, in order.
    pub fn failures(&self) -> &[SpecResult] {
        self.failures.records()
    }

    pub fn last_printed_suite(&self) -> &[String] {
        self.tree.last_printed()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Remembers the attached browsers; console log lines name the browser
    /// only when more than one is attached.
    pub fn on_run_start(&mut self, browsers: &[BrowserInfo]) {
        self.browsers = browsers.iter().map(|b| b.name.clone()).collect();
    }

    /// Routes a result to the skipped, success or failure handler.
    /// 将结果分派到跳过、成功或失败处理器。
    pub fn on_spec_complete(&mut self, result: &SpecResult) -> Result<(), ReporterError> {
        self.dispatch(result.status(), result)
    }

    pub fn on_spec_success(&mut self, result: &SpecResult) -> Result<(), ReporterError> {
        self.dispatch(SpecStatus::Success, result)
    }

    /// Records and prints a failing spec. Returns
    /// [`ReporterError::FatalAbort`] when fail-fast is on; the caller must stop
    /// delivering events and pass the error on.
    ///
    /// 记录并打印失败的规格。启用快速失败时返回 `FatalAbort`；
    /// 调用方必须停止传递事件并向上传递该错误。
    pub fn on_spec_failure(&mut self, result: &SpecResult) -> Result<(), ReporterError> {
        self.dispatch(SpecStatus::Failure, result)
    }

    pub fn on_spec_skipped(&mut self, result: &SpecResult) -> Result<(), ReporterError> {
        self.dispatch(SpecStatus::Skipped, result)
    }

    fn dispatch(&mut self, status: SpecStatus, result: &SpecResult) -> Result<(), ReporterError> {
        let mut ctx = EmitContext {
            formatter: &self.formatter,
            tree: &mut self.tree,
            failures: &mut self.failures,
            sink: &mut self.sink,
            error_formatter: self.error_formatter.as_ref(),
            diagnostics: self.diagnostics.as_ref(),
        };
        self.emitters.get(status).emit(&mut ctx, result)
    }

    /// Echoes one browser console message when console echo is enabled.
    pub fn on_browser_log(&mut self, browser: &str, message: &str, level: &str) {
        if !self.config.browser_console_log {
            return;
        }
        let locale = self.config.language.as_str();
        let level = level.to_uppercase();
        let message = self.palette.paint(Tint::Cyan, message);
        let line = if self.browsers.len() == 1 {
            t!("browser.log_single", locale = locale, level = &level, message = &message)
        } else {
            t!(
                "browser.log_multi",
                locale = locale,
                browser = browser,
                level = &level,
                message = &message
            )
        };
        if let Err(source) = self.sink.write(&format!("{line}\n")) {
            self.diagnostics.report(&ReporterError::BrowserOutput {
                browser: browser.to_string(),
                source,
            });
        }
    }

    /// Prints an error raised by a browser outside of any spec.
    pub fn on_browser_error(&mut self, browser: &str, error: &str) {
        let header = t!("browser.error", locale = self.config.language.as_str(), browser = browser);
        let msg = format!(
            "{}\n{}\n",
            self.palette.paint(Tint::Red, &header),
            self.error_formatter.format_error(error, LOG_INDENT_MARKER)
        );
        if let Err(source) = self.sink.write_common_msg(&msg) {
            self.diagnostics.report(&ReporterError::BrowserOutput {
                browser: browser.to_string(),
                source,
            });
        }
    }

    /// Writes the run summary and digest, then clears the failure list and
    /// the suite tracker. Never fails: any fault is reported to the
    /// diagnostic channel and the reset still happens.
    ///
    /// 写出运行摘要和失败摘要，然后清空失败列表和套件跟踪器。
    /// 永不失败：任何故障都会报告给诊断通道，重置仍会执行。
    pub fn on_run_complete(&mut self, browsers: &[BrowserInfo], run: &RunResult) {
        let writer = RunSummaryWriter {
            palette: self.palette,
            locale: &self.config.language,
            suppress_error_summary: self.config.suppress_error_summary,
            browser_renderer: self.browser_renderer.as_ref(),
            digest: DigestRenderer {
                palette: self.palette,
                max_log_lines: self.config.max_log_lines,
                error_formatter: self.error_formatter.as_ref(),
                diagnostics: self.diagnostics.as_ref(),
            },
        };

        if let Err(source) = writer.write(browsers, run, self.failures.records(), &mut self.sink) {
            self.diagnostics
                .report(&ReporterError::RunCompletion { source });
        }

        self.failures.clear();
        self.tree.reset();
    }
}
