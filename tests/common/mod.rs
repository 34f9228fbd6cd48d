// Shared test helpers for integration tests
#![allow(dead_code)]

use spec_reporter::core::config::ReporterConfig;
use spec_reporter::core::errors::ReporterError;
use spec_reporter::core::models::{BrowserInfo, BrowserResult, SpecResult};
use spec_reporter::infra::diagnostics::Diagnostics;
use spec_reporter::infra::output::OutputSink;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Which sink method received a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Write,
    Common,
}

/// A sink that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<(Channel, String)>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.calls.iter().map(|(_, msg)| msg.clone()).collect()
    }

    pub fn common_messages(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter(|(channel, _)| *channel == Channel::Common)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn written(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter(|(channel, _)| *channel == Channel::Write)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn transcript(&self) -> String {
        self.messages().concat()
    }
}

impl OutputSink for RecordingSink {
    fn write(&mut self, msg: &str) -> io::Result<()> {
        self.calls.push((Channel::Write, msg.to_string()));
        Ok(())
    }

    fn write_common_msg(&mut self, msg: &str) -> io::Result<()> {
        self.calls.push((Channel::Common, msg.to_string()));
        Ok(())
    }
}

/// A sink that refuses any message containing `poison` and records the rest.
#[derive(Debug)]
pub struct FailingSink {
    pub poison: String,
    pub inner: RecordingSink,
}

impl FailingSink {
    pub fn new(poison: &str) -> Self {
        Self {
            poison: poison.to_string(),
            inner: RecordingSink::default(),
        }
    }

    fn check(&self, msg: &str) -> io::Result<()> {
        if msg.contains(&self.poison) {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        } else {
            Ok(())
        }
    }
}

impl OutputSink for FailingSink {
    fn write(&mut self, msg: &str) -> io::Result<()> {
        self.check(msg)?;
        self.inner.write(msg)
    }

    fn write_common_msg(&mut self, msg: &str) -> io::Result<()> {
        self.check(msg)?;
        self.inner.write_common_msg(msg)
    }
}

/// A diagnostic channel that keeps every reported fault's message.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    pub faults: Rc<RefCell<Vec<String>>>,
}

impl RecordingDiagnostics {
    pub fn reported(&self) -> Vec<String> {
        self.faults.borrow().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, fault: &ReporterError) {
        self.faults.borrow_mut().push(fault.to_string());
    }
}

/// Returns the error text unchanged, ignoring the indent marker.
pub fn pass_through(text: &str, _indent: &str) -> String {
    text.to_string()
}

/// Plain (uncolored) config with ASCII markers, for exact output checks.
pub fn plain_config() -> ReporterConfig {
    let mut config = ReporterConfig::default();
    config.prefixes.success = Some("+ ".to_string());
    config.prefixes.failure = Some("x ".to_string());
    config.prefixes.skipped = Some("- ".to_string());
    config
}

pub fn passing(suite: &[&str], description: &str) -> SpecResult {
    let mut result = SpecResult::new(suite.iter().copied(), description);
    result.success = true;
    result
}

pub fn failing(suite: &[&str], description: &str, log: &[&str]) -> SpecResult {
    let mut result = SpecResult::new(suite.iter().copied(), description);
    result.log_lines = log.iter().map(|line| line.to_string()).collect();
    result
}

pub fn skipped(suite: &[&str], description: &str) -> SpecResult {
    let mut result = SpecResult::new(suite.iter().copied(), description);
    result.skipped = true;
    result
}

pub fn browser(name: &str, total: u64, success: u64, failed: u64) -> BrowserInfo {
    let mut info = BrowserInfo::new(format!("{name}-id"), name);
    info.last_result = BrowserResult {
        total,
        success,
        failed,
        total_time_millis: 412,
        net_time_millis: 198,
        ..BrowserResult::default()
    };
    info
}
