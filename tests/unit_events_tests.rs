//! # Host Event Unit Tests / 宿主事件单元测试
//!
//! Tests for decoding host events, dispatching them onto a reporter session
//! and replaying a newline-delimited event stream.
//!
//! 测试宿主事件的解码、到报告器会话的分派以及以换行分隔的事件流回放。

mod common;

use common::{RecordingSink, plain_config};
use spec_reporter::cli::commands::replay::replay_events;
use spec_reporter::cli::events::{HostEvent, dispatch};
use spec_reporter::SpecReporter;

const PASSING_STREAM: &str = r#"{"event":"run_start","browsers":[{"id":"1","name":"Chrome"}]}
{"event":"spec_complete","result":{"suite":["Calculator"],"description":"adds","success":true,"time":3}}

{"event":"spec_complete","result":{"suite":["Calculator"],"description":"subtracts","success":true}}
{"event":"run_complete","browsers":[{"id":"1","name":"Chrome","lastResult":{"total":2,"success":2}}],"result":{"success":2,"failed":0}}
"#;

const FAILING_STREAM: &str = r#"{"event":"spec_complete","result":{"suite":["A"],"description":"first","log":["boom"]}}
{"event":"spec_complete","result":{"suite":["A"],"description":"second","log":["bang"]}}
{"event":"run_complete","result":{"success":0,"failed":2}}
"#;

#[cfg(test)]
mod decoding_tests {
    use super::*;

    #[test]
    fn test_spec_complete_uses_host_field_names() {
        let event: HostEvent = serde_json::from_str(
            r#"{"event":"spec_complete","result":{"suite":["A","B"],"description":"works","success":true,"time":7,"log":["x"]}}"#,
        )
        .unwrap();

        match event {
            HostEvent::SpecComplete { result } => {
                assert_eq!(result.suite_path, vec!["A", "B"]);
                assert_eq!(result.description, "works");
                assert!(result.success);
                assert!(!result.skipped);
                assert_eq!(result.elapsed_millis, 7);
                assert_eq!(result.log_lines, vec!["x"]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_browser_log_level_defaults_to_log() {
        let event: HostEvent =
            serde_json::from_str(r#"{"event":"browser_log","browser":"Chrome","message":"hi"}"#)
                .unwrap();

        assert_eq!(
            event,
            HostEvent::BrowserLog {
                browser: "Chrome".to_string(),
                level: "log".to_string(),
                message: "hi".to_string(),
            }
        );
    }

    #[test]
    fn test_browser_defaults_to_connected() {
        let event: HostEvent = serde_json::from_str(
            r#"{"event":"run_start","browsers":[{"id":"1","name":"Chrome"}]}"#,
        )
        .unwrap();

        match event {
            HostEvent::RunStart { browsers } => {
                assert_eq!(browsers.len(), 1);
                assert!(browsers[0].is_connected);
                assert_eq!(browsers[0].last_result.total, 0);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let decoded = serde_json::from_str::<HostEvent>(r#"{"event":"coffee_break"}"#);
        assert!(decoded.is_err());
    }
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_run_complete_returns_the_run_result() {
        let mut reporter = SpecReporter::new(plain_config(), RecordingSink::default());
        let event: HostEvent =
            serde_json::from_str(r#"{"event":"run_complete","result":{"success":3,"failed":1}}"#)
                .unwrap();

        let run = dispatch(&mut reporter, event).unwrap().unwrap();

        assert_eq!(run.success, 3);
        assert!(run.is_failure());
    }

    #[test]
    fn test_other_events_return_none() {
        let mut reporter = SpecReporter::new(plain_config(), RecordingSink::default());
        let event = HostEvent::BrowserError {
            browser: "Chrome".to_string(),
            error: "oops".to_string(),
        };

        assert_eq!(dispatch(&mut reporter, event).unwrap(), None);
        assert!(reporter.sink().transcript().contains("Chrome ERROR"));
    }
}

#[cfg(test)]
mod replay_tests {
    use super::*;

    #[tokio::test]
    async fn test_replay_skips_blank_lines_and_keeps_last_run() {
        let mut reporter = SpecReporter::new(plain_config(), RecordingSink::default());

        let outcome = replay_events(&mut reporter, PASSING_STREAM.as_bytes())
            .await
            .unwrap();

        assert_eq!(outcome.events, 4);
        assert!(outcome.aborted.is_none());
        assert!(!outcome.last_run.unwrap().is_failure());
        let transcript = reporter.sink().transcript();
        assert!(transcript.contains("  Calculator\n\n    + adds\n\n    + subtracts\n"));
        assert!(transcript.contains("TOTAL: 2 SUCCESS\n"));
    }

    #[tokio::test]
    async fn test_replay_reports_the_invalid_line_number() {
        let mut reporter = SpecReporter::new(plain_config(), RecordingSink::default());
        let stream = "\n{\"event\":\"run_start\"}\nnot json\n";

        let err = replay_events(&mut reporter, stream.as_bytes())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("line 3"));
    }

    #[tokio::test]
    async fn test_fail_fast_stops_reading_events() {
        let mut config = plain_config();
        config.fail_fast = true;
        let mut reporter = SpecReporter::new(config, RecordingSink::default());

        let outcome = replay_events(&mut reporter, FAILING_STREAM.as_bytes())
            .await
            .unwrap();

        assert_eq!(outcome.events, 1);
        assert!(outcome.last_run.is_none());
        assert!(outcome.aborted.unwrap().is_fatal_abort());
        assert_eq!(reporter.failures().len(), 1);
        assert!(!reporter.sink().transcript().contains("second"));
    }

    #[tokio::test]
    async fn test_run_without_browsers_skips_digest_but_resets() {
        let mut reporter = SpecReporter::new(plain_config(), RecordingSink::default());

        let outcome = replay_events(&mut reporter, FAILING_STREAM.as_bytes())
            .await
            .unwrap();

        assert_eq!(outcome.events, 3);
        assert!(outcome.last_run.unwrap().is_failure());
        // No browsers were attached, so the totals and digest are not printed.
        let transcript = reporter.sink().transcript();
        assert!(!transcript.contains("1) first"));
        assert!(reporter.failures().is_empty());
    }
}
