// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

use crate::core::config::DEFAULT_CONFIG_FILE;
use crate::infra::t;

pub mod commands;
pub mod events;

use commands::replay::ReplayOptions;

/// Environment variable that controls diagnostic log filtering.
pub const LOG_ENV: &str = "SPEC_REPORTER_LOG";

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("spec-reporter")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("replay")
                .about(t!("cli.cmd_replay_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("cli.arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help(t!("cli.arg_input", locale = locale).to_string())
                        .value_name("INPUT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("colors")
                        .long("colors")
                        .help(t!("cli.arg_colors", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("fail-fast")
                        .long("fail-fast")
                        .help(t!("cli.arg_fail_fast", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("cli.arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("cli.arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Installs the stderr diagnostic subscriber. Safe to call more than once.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub async fn run() -> Result<()> {
    init_tracing();

    // Pre-parse language first; fall back to the system language.
    let explicit_language = pre_parse_language();
    let language = explicit_language
        .clone()
        .unwrap_or_else(crate::detect_locale);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("replay", replay_matches)) => {
            let options = ReplayOptions {
                config: replay_matches.get_one::<PathBuf>("config").cloned(),
                input: replay_matches.get_one::<PathBuf>("input").cloned(),
                colors: replay_matches.get_flag("colors"),
                fail_fast: replay_matches.get_flag("fail-fast"),
                language: explicit_language,
            };
            commands::replay::execute(options).await?;
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("config")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let force = init_matches.get_flag("force");

            if explicit_language.is_none() {
                println!(
                    "{}",
                    t!("cli.system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::execute(&output, force, &language)?;
        }
        _ => {
            // No subcommand given; print help.
            build_cli(&language).print_help()?;
        }
    }
    Ok(())
}
