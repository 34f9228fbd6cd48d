//! # Replay Command Module / 回放命令模块
//!
//! This module implements the `replay` command, which reads host events
//! (newline-delimited JSON) from a file or stdin and drives one reporter
//! session with them, writing the transcript to stdout.
//!
//! 此模块实现了 `replay` 命令，从文件或标准输入读取宿主事件
//! （以换行分隔的 JSON），用它们驱动一个报告器会话，并将记录写入标准输出。

use anyhow::{Context, Result, bail};
use colored::*;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::cli::events::{self, HostEvent};
use crate::core::config::{self, DEFAULT_CONFIG_FILE, ReporterConfig};
use crate::core::errors::ReporterError;
use crate::core::models::RunResult;
use crate::infra::output::{ConsoleSink, OutputSink};
use crate::infra::t;
use crate::reporting::SpecReporter;

/// Options for one replay.
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    /// Explicit config file. When absent, `SpecReporter.toml` is used if present.
    pub config: Option<PathBuf>,
    /// Event file. When absent, events are read from stdin.
    pub input: Option<PathBuf>,
    pub colors: bool,
    pub fail_fast: bool,
    pub language: Option<String>,
}

/// What a replay saw.
/// 回放的结果。
#[derive(Debug, Default)]
pub struct ReplayOutcome {
    /// Number of events delivered to the reporter.
    pub events: usize,
    /// The result of the most recently completed run.
    pub last_run: Option<RunResult>,
    /// Set when a fail-fast abort stopped the replay.
    pub aborted: Option<ReporterError>,
}

/// Executes the replay command.
///
/// # Returns
/// An error when a fail-fast abort occurred, when the last run reported
/// failures, or when the input could not be read or decoded
pub async fn execute(options: ReplayOptions) -> Result<()> {
    let mut config = setup_config(options.config.as_deref())?;
    if let Some(language) = options.language {
        config.language = language;
    }
    config.colors |= options.colors;
    config.fail_fast |= options.fail_fast;
    colored::control::set_override(config.colors);

    let locale = config.language.clone();
    let reader: Box<dyn AsyncRead + Unpin> = match &options.input {
        Some(path) => Box::new(
            File::open(path)
                .await
                .with_context(|| format!("Failed to open event stream: {}", path.display()))?,
        ),
        None => Box::new(tokio::io::stdin()),
    };

    let mut reporter = SpecReporter::new(config, ConsoleSink::default());
    let outcome = replay_events(&mut reporter, reader).await?;

    if let Some(abort) = outcome.aborted {
        let description = match &abort {
            ReporterError::FatalAbort { description } => description.clone(),
            other => other.to_string(),
        };
        return Err(anyhow::Error::new(abort).context(
            t!("replay.aborted", locale = &locale, description = &description).to_string(),
        ));
    }

    if outcome.last_run.as_ref().is_some_and(RunResult::is_failure) {
        bail!(t!("replay.run_failed", locale = &locale).to_string());
    }
    Ok(())
}

/// Reads events line by line and delivers them to `reporter`. Blank lines
/// are skipped; a line that is not a valid event is an error naming its line
/// number. A fail-fast abort stops reading and is returned in the outcome.
///
/// 逐行读取事件并传递给 `reporter`。跳过空行；无效事件行会返回带行号的错误。
/// 快速失败中止会停止读取，并在结果中返回。
pub async fn replay_events<S, R>(reporter: &mut SpecReporter<S>, reader: R) -> Result<ReplayOutcome>
where
    S: OutputSink,
    R: AsyncRead + Unpin,
{
    let locale = reporter.config().language.clone();
    let mut lines = BufReader::new(reader).lines();
    let mut outcome = ReplayOutcome::default();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await.context("Failed to read event stream")? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let event: HostEvent = serde_json::from_str(&line).with_context(|| {
            t!("replay.invalid_event", locale = &locale, line = line_number).to_string()
        })?;
        outcome.events += 1;

        match events::dispatch(reporter, event) {
            Ok(Some(run)) => outcome.last_run = Some(run),
            Ok(None) => {}
            Err(abort) if abort.is_fatal_abort() => {
                outcome.aborted = Some(abort);
                break;
            }
            Err(other) => return Err(other.into()),
        }
    }

    Ok(outcome)
}

/// Loads the explicit config file, or `SpecReporter.toml` when it exists,
/// or the defaults.
fn setup_config(explicit: Option<&Path>) -> Result<ReporterConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default_path.exists() {
                return Ok(ReporterConfig::default());
            }
            default_path
        }
    };

    let config = config::load_config(&path)?;
    eprintln!(
        "{}",
        t!("replay.config_loaded", locale = &config.language, path = path.display()).dimmed()
    );
    Ok(config)
}
