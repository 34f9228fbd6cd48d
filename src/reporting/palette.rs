//! Color wrapping keyed by tint, inert when colors are disabled.

use colored::Colorize;

/// The tints the reporter paints with.
/// 报告器使用的颜色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Green,
    Cyan,
    /// Muted text, used for log entries in the digest.
    Grey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `text` in the escape codes for `tint`, or returns it unchanged
    /// when colors are off.
    ///
    /// 用 `tint` 的转义码包裹 `text`；颜色关闭时原样返回。
    pub fn paint(&self, tint: Tint, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let painted = match tint {
            Tint::Red => text.red(),
            Tint::Green => text.green(),
            Tint::Cyan => text.cyan(),
            Tint::Grey => text.bright_black(),
        };
        painted.to_string()
    }
}
