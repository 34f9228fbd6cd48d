//! Formatting of log and error text before it is appended to the output.

/// Turns raw error text into printable text, indenting every line with
/// `indent`. Used for per-spec log entries, the failure digest and browser
/// errors. The result must not end with a line break: every caller appends
/// its own terminator.
///
/// 将原始错误文本转换为可打印文本，每行以 `indent` 缩进。结果不应以换行结尾，
/// 调用方会自行追加。
pub trait ErrorTextFormatter {
    fn format_error(&self, text: &str, indent: &str) -> String;
}

impl<F> ErrorTextFormatter for F
where
    F: Fn(&str, &str) -> String,
{
    fn format_error(&self, text: &str, indent: &str) -> String {
        self(text, indent)
    }
}

/// Replaces literal `\n` escape sequences with real line breaks and prefixes
/// each resulting line with the indent marker.
/// No trailing line break is added; callers terminate the text themselves.
///
/// 将字面量 `\n` 转义序列替换为真实换行，并在每行前加缩进标记。
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultErrorFormatter;

impl ErrorTextFormatter for DefaultErrorFormatter {
    fn format_error(&self, text: &str, indent: &str) -> String {
        let normalized = text.replace("\\n", "\n");
        if indent.is_empty() {
            return normalized;
        }
        normalized
            .split('\n')
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
