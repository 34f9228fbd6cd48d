//! # Error Taxonomy / 错误分类
//!
//! `FatalAbort` is the only error a spec handler ever returns; the other
//! variants describe faults that are reported to the diagnostic channel and
//! swallowed at the smallest enclosing scope.
//!
//! `FatalAbort` 是规格处理器唯一会返回的错误；其他变体描述的故障
//! 会报告给诊断通道，并在最小的封闭范围内被吞掉。

use std::io;
use thiserror::Error;

/// The marker carried by every fail-fast abort message.
/// 每条快速失败中止消息都携带的标记。
pub const FAIL_FAST_MARKER: &str = "failFast";

#[derive(Debug, Error)]
pub enum ReporterError {
    /// Fail-fast mode saw a failing spec; the host should stop the run.
    /// 快速失败模式遇到失败的规格；宿主应停止运行。
    #[error("Fail fast active for tests, exiting(failFast option is enabled)")]
    FatalAbort {
        /// Description of the spec that triggered the abort.
        description: String,
    },

    /// Writing one spec block failed.
    #[error("failed to render spec `{description}`")]
    Rendering {
        description: String,
        #[source]
        source: io::Error,
    },

    /// Writing one numbered entry of the failure digest failed.
    #[error("failed to render failure #{index} of the digest")]
    Digest {
        index: usize,
        #[source]
        source: io::Error,
    },

    /// The run-complete sequence failed somewhere outside a digest entry.
    #[error("failed to write the run summary")]
    RunCompletion {
        #[source]
        source: io::Error,
    },

    /// Writing a browser console line or browser error failed.
    #[error("failed to write output for browser `{browser}`")]
    BrowserOutput {
        browser: String,
        #[source]
        source: io::Error,
    },
}

impl ReporterError {
    pub fn fatal_abort(description: impl Into<String>) -> Self {
        ReporterError::FatalAbort {
            description: description.into(),
        }
    }

    /// Whether this is the intentional fail-fast signal rather than a fault.
    /// 是否为有意的快速失败信号，而非故障。
    pub fn is_fatal_abort(&self) -> bool {
        matches!(self, ReporterError::FatalAbort { .. })
    }
}
