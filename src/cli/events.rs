//! # Host Events Module / 宿主事件模块
//!
//! The newline-delimited JSON events the `replay` command understands, and
//! their dispatch onto a reporter session.
//!
//! `replay` 命令可识别的以换行分隔的 JSON 事件，以及它们到报告器会话的分派。
//!
//! ```text
//! {"event":"run_start","browsers":[{"id":"1","name":"Chrome"}]}
//! {"event":"spec_complete","result":{"suite":["A","B"],"description":"works","success":true,"time":3}}
//! {"event":"browser_log","browser":"Chrome","type":"warn","message":"deprecated"}
//! {"event":"run_complete","browsers":[...],"result":{"success":1,"failed":0}}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::errors::ReporterError;
use crate::core::models::{BrowserInfo, RunResult, SpecResult};
use crate::infra::output::OutputSink;
use crate::reporting::SpecReporter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    RunStart {
        #[serde(default)]
        browsers: Vec<BrowserInfo>,
    },
    SpecComplete {
        result: SpecResult,
    },
    BrowserLog {
        browser: String,
        #[serde(rename = "type", default = "default_log_level")]
        level: String,
        message: String,
    },
    BrowserError {
        browser: String,
        error: String,
    },
    RunComplete {
        #[serde(default)]
        browsers: Vec<BrowserInfo>,
        result: RunResult,
    },
}

fn default_log_level() -> String {
    "log".to_string()
}

/// Delivers one event to the reporter. Returns the run result when the event
/// completed a run; the only error is a fail-fast abort.
///
/// 将一个事件传递给报告器。事件完成一次运行时返回运行结果；唯一的错误是快速失败中止。
pub fn dispatch<S: OutputSink>(
    reporter: &mut SpecReporter<S>,
    event: HostEvent,
) -> Result<Option<RunResult>, ReporterError> {
    match event {
        HostEvent::RunStart { browsers } => reporter.on_run_start(&browsers),
        HostEvent::SpecComplete { result } => reporter.on_spec_complete(&result)?,
        HostEvent::BrowserLog {
            browser,
            level,
            message,
        } => reporter.on_browser_log(&browser, &message, &level),
        HostEvent::BrowserError { browser, error } => reporter.on_browser_error(&browser, &error),
        HostEvent::RunComplete { browsers, result } => {
            reporter.on_run_complete(&browsers, &result);
            return Ok(Some(result));
        }
    }
    Ok(None)
}
