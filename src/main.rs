//! Rewind - unified CLI.

use anyhow::Result;
use clap::Parser;
use rewind::cli::{Cli, Command};
use rewind::script::{parse_script, run_script};
use rewind::{text, tui, AppConfig};
use rewind_tictactoe::GameHistory;
use std::path::PathBuf;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => run_play(config, descending),
        Command::Replay {
            config,
            descending,
            json,
            commands,
        } => run_replay(config, descending, json, commands),
    }
}

/// Run the interactive terminal UI
fn run_play(config: Option<PathBuf>, descending: bool) -> Result<()> {
    let config = AppConfig::load(config.as_deref())?.with_descending(descending);
    tui::run_tui(&config)
}

/// Run a script headlessly and print the final view
#[instrument(skip_all, fields(steps = commands.len(), json = json))]
fn run_replay(
    config: Option<PathBuf>,
    descending: bool,
    json: bool,
    commands: Vec<String>,
) -> Result<()> {
    let config = AppConfig::load(config.as_deref())?.with_descending(descending);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = parse_script(&Command::script_tokens(&commands))?;
    let mut game = GameHistory::with_sort_order(*config.ascending());
    let rejections = run_script(&mut game, &script)?;
    for rejection in &rejections {
        warn!(%rejection, "Move ignored");
        eprintln!("warning: {}", rejection);
    }

    let view = game.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", text::render_view(&view));
    }
    info!(len = game.len(), "Replay complete");
    Ok(())
}
