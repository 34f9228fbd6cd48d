//! # Browser Descriptor Module / 浏览器描述模块
//!
//! One-line descriptors of each attached browser, printed at run completion.
//!
//! 每个已连接浏览器的单行描述，在运行完成时打印。
//!
//! ## Output Format / 输出格式
//! ```text
//! Chrome 126: Executed 9 of 10 (1 FAILED) (skipped 1) (0.412 secs / 0.198 secs)
//! Firefox 127: Executed 10 of 10 SUCCESS (1 min 2.5 secs / 58.1 secs)
//! ```

use std::fmt::Write as _;

use crate::core::models::BrowserInfo;
use crate::infra::t;
use crate::reporting::palette::{Palette, Tint};

pub trait BrowserRenderer {
    fn render_browser(&self, browser: &BrowserInfo) -> String;
}

impl<F> BrowserRenderer for F
where
    F: Fn(&BrowserInfo) -> String,
{
    fn render_browser(&self, browser: &BrowserInfo) -> String {
        self(browser)
    }
}

/// Renders the executed/total counts, failure and skip counts, the finish
/// state and the run timings of a browser.
#[derive(Debug, Clone)]
pub struct DefaultBrowserRenderer {
    palette: Palette,
    locale: String,
}

impl DefaultBrowserRenderer {
    pub fn new(palette: Palette, locale: impl Into<String>) -> Self {
        Self {
            palette,
            locale: locale.into(),
        }
    }
}

impl BrowserRenderer for DefaultBrowserRenderer {
    fn render_browser(&self, browser: &BrowserInfo) -> String {
        let locale = self.locale.as_str();
        let results = &browser.last_result;

        let mut msg = t!(
            "browser.executed",
            locale = locale,
            browser = &browser.name,
            executed = results.success + results.failed,
            total = results.total
        )
        .to_string();

        if results.failed > 0 {
            msg.push_str(&self.palette.paint(
                Tint::Red,
                &t!("browser.x_failed", locale = locale, failed = results.failed),
            ));
        }
        if results.skipped > 0 {
            msg.push_str(&t!(
                "browser.x_skipped",
                locale = locale,
                skipped = results.skipped
            ));
        }

        if browser.is_connected {
            if results.disconnected {
                msg.push_str(
                    &self
                        .palette
                        .paint(Tint::Red, &t!("browser.finished_disconnected", locale = locale)),
                );
            } else if results.error {
                msg.push_str(
                    &self
                        .palette
                        .paint(Tint::Red, &t!("browser.finished_error", locale = locale)),
                );
            } else if results.failed == 0 {
                msg.push_str(
                    &self
                        .palette
                        .paint(Tint::Green, &t!("browser.finished_success", locale = locale)),
                );
            }
            let _ = write!(
                msg,
                "{}",
                t!(
                    "browser.total_time",
                    locale = locale,
                    total = format_time_interval(results.total_time_millis, locale),
                    net = format_time_interval(results.net_time_millis, locale)
                )
            );
        }

        msg
    }
}

/// Formats a duration in milliseconds as `"<s> sec(s)"`, prefixed with
/// `"<m> min(s) "` once it reaches a minute.
///
/// 将毫秒时长格式化为 `"<s> sec(s)"`，满一分钟时加上 `"<m> min(s) "` 前缀。
pub fn format_time_interval(millis: u64, locale: &str) -> String {
    let mins = millis / 60_000;
    let secs = (millis % 60_000) as f64 / 1000.0;

    let mut out = String::new();
    match mins {
        0 => {}
        1 => out.push_str(&t!("time.min", locale = locale, count = mins)),
        _ => out.push_str(&t!("time.mins", locale = locale, count = mins)),
    }
    if secs == 1.0 {
        out.push_str(&t!("time.sec", locale = locale, count = secs));
    } else {
        out.push_str(&t!("time.secs", locale = locale, count = secs));
    }
    out
}
