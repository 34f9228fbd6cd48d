//! # Reporting Module / 报告模块
//!
//! This module renders host events as console output: per-spec blocks under
//! incrementally printed suite headers, browser descriptors, the run summary
//! and the numbered failure digest. [`SpecReporter`] ties them together into
//! one session object that lives for the duration of a run.
//!
//! 此模块将宿主事件渲染为控制台输出：增量打印的套件标题下的规格块、
//! 浏览器描述、运行摘要以及编号的失败摘要。[`SpecReporter`] 将它们组合为
//! 一个贯穿整个运行的会话对象。

pub mod browser;
pub mod digest;
pub mod log_lines;
pub mod palette;
pub mod reporter;
pub mod spec_message;
pub mod summary;

// Re-export common reporting types
pub use browser::{BrowserRenderer, DefaultBrowserRenderer};
pub use digest::DigestRenderer;
pub use palette::{Palette, Tint};
pub use reporter::SpecReporter;
pub use spec_message::{SpecMessageFormatter, StatusEmitter};
pub use summary::RunSummaryWriter;
