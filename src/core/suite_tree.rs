//! # Suite Tree Module / 套件树模块
//!
//! Tracks the last fully printed suite path so that each spec only prints the
//! suite headers it newly enters.
//!
//! 跟踪最后完整打印的套件路径，使每个规格只打印新进入的套件标题。

use std::io;

use crate::infra::output::OutputSink;

/// One newly entered suite header. `depth` is the nesting level (index + 1).
/// 一个新进入的套件标题。`depth` 为嵌套层级（索引 + 1）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteHeader {
    pub depth: usize,
    pub name: String,
}

/// The headers emitted for one spec.
/// 为单个规格输出的标题。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    /// Set when the path diverged at the root; a blank line precedes the headers.
    /// 路径在根处分叉时设置；标题前输出一个空行。
    pub leading_separator: bool,
    pub headers: Vec<SuiteHeader>,
}

impl HeaderBlock {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Writes the separator and each header as its own sink call.
    /// 将分隔行和每个标题分别写入输出。
    pub fn write_to(&self, sink: &mut dyn OutputSink) -> io::Result<()> {
        if self.leading_separator {
            sink.write_common_msg("\n")?;
        }
        for header in &self.headers {
            sink.write_common_msg(&format!(
                "{}{}\n",
                "  ".repeat(header.depth),
                header.name
            ))?;
        }
        Ok(())
    }
}

/// Run-scoped tracker of the most recently printed suite path.
///
/// 运行期内最近打印的套件路径的跟踪器。
#[derive(Debug, Clone, Default)]
pub struct SuiteTreePrinter {
    last_printed: Vec<String>,
}

impl SuiteTreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the headers `suite_path` newly enters and records it as the
    /// last printed path.
    ///
    /// Everything from the first index where the path diverges from the last
    /// printed one (or runs past its end) is emitted again, even if deeper
    /// names happen to match. The tracker is always replaced by the full path.
    ///
    /// 返回 `suite_path` 新进入的标题，并将其记录为最后打印的路径。
    /// 从第一个分叉（或超出原路径长度）的索引开始的所有条目都会重新输出。
    pub fn emit_headers(&mut self, suite_path: &[String]) -> HeaderBlock {
        let divergence = suite_path
            .iter()
            .zip(&self.last_printed)
            .take_while(|(entered, printed)| entered == printed)
            .count();

        let headers: Vec<SuiteHeader> = suite_path[divergence..]
            .iter()
            .enumerate()
            .map(|(offset, name)| SuiteHeader {
                depth: divergence + offset + 1,
                name: name.clone(),
            })
            .collect();

        self.last_printed = suite_path.to_vec();

        HeaderBlock {
            leading_separator: divergence == 0 && !headers.is_empty(),
            headers,
        }
    }

    /// The suite path recorded by the last call to [`Self::emit_headers`].
    pub fn last_printed(&self) -> &[String] {
        &self.last_printed
    }

    /// Forgets the tracked path. Called only at run completion.
    /// 清除跟踪的路径。仅在运行完成时调用。
    pub fn reset(&mut self) {
        self.last_printed.clear();
    }
}
