//! # Output Sink Module / 输出接收器模块
//!
//! The low-level output the reporter writes to. `write` carries formatted
//! summary lines; `write_common_msg` carries everything else. A console
//! implementation writes both to an `io::Write` target.
//!
//! 报告器写入的底层输出。`write` 用于格式化的摘要行；
//! `write_common_msg` 用于其他所有内容。

use std::io::{self, Write};

pub trait OutputSink {
    /// Writes an already formatted template line.
    fn write(&mut self, msg: &str) -> io::Result<()>;

    /// Writes a message shared by all attached browsers.
    fn write_common_msg(&mut self, msg: &str) -> io::Result<()>;
}

/// An [`OutputSink`] over any `io::Write`, stdout by default.
///
/// 基于任意 `io::Write` 的输出接收器，默认为标准输出。
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    target: W,
}

impl Default for ConsoleSink<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(target: W) -> Self {
        Self { target }
    }

    pub fn into_inner(self) -> W {
        self.target
    }

    fn emit(&mut self, msg: &str) -> io::Result<()> {
        self.target.write_all(msg.as_bytes())?;
        self.target.flush()
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn write(&mut self, msg: &str) -> io::Result<()> {
        self.emit(msg)
    }

    fn write_common_msg(&mut self, msg: &str) -> io::Result<()> {
        self.emit(msg)
    }
}
