//! Wiring between the pure panel state machine, the engine and the terminal.
pub mod config;

mod app;
mod effects;
mod logging;
mod oneshot;
mod persistence;
mod ui;

use std::process::ExitCode;

use anyhow::Context;
use engine_logging::engine_info;
use outreach_engine::ensure_state_dir;

use config::{Cli, Command};
use effects::EffectRunner;
use logging::LogDestination;

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    ensure_state_dir(&cli.state_dir).context("prepare state directory")?;

    // The full-screen panel owns the terminal, so it logs to a file by default.
    let default_destination = match cli.command {
        Some(_) => LogDestination::Terminal,
        None => LogDestination::File,
    };
    logging::initialize(cli.log.unwrap_or(default_destination), &cli.state_dir);
    engine_info!("outreach_app starting, service {}", cli.service_url);

    let runner = EffectRunner::new(cli.service_settings(), cli.state_dir.clone())
        .context("start engine")?;
    let request_timeout = cli.request_timeout();

    match cli.command {
        Some(Command::Start { query, max_pages }) => {
            oneshot::run_start(&runner, query, max_pages, request_timeout)
        }
        None => {
            app::run(&runner, &cli.service_url, &cli.state_dir)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
