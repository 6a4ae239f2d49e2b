use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::GameState;
use connect_four::ui::{App, TerminalSession};
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override player one's name
    #[arg(long)]
    p1_name: Option<String>,

    /// Override player two's name
    #[arg(long)]
    p2_name: Option<String>,

    /// Override player one's color (name or #rrggbb)
    #[arg(long)]
    p1_color: Option<String>,

    /// Override player two's color (name or #rrggbb)
    #[arg(long)]
    p2_color: Option<String>,

    /// Write logs to this file (RUST_LOG sets the level, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    apply_overrides(&mut config, &cli);

    let game_state = GameState::from_config(&config).context("invalid game settings")?;
    tracing::info!(
        rows = config.board.rows,
        cols = config.board.cols,
        player_one = %config.player_one.name,
        player_two = %config.player_two.name,
        "starting game"
    );

    run_tui(App::new(game_state)).context("terminal error")
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(name) = &cli.p1_name {
        config.player_one.name = name.clone();
    }
    if let Some(name) = &cli.p2_name {
        config.player_two.name = name.clone();
    }
    if let Some(color) = &cli.p1_color {
        config.player_one.color = color.clone();
    }
    if let Some(color) = &cli.p2_color {
        config.player_two.color = color.clone();
    }
}

/// Send tracing output to a file; stderr belongs to the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    app.run(session.terminal_mut())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_apply_on_top_of_config() {
        let cli = Cli::parse_from([
            "connect-four",
            "--rows",
            "8",
            "--p2-name",
            "Grace",
            "--p1-color",
            "#00ff00",
        ]);
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.player_two.name, "Grace");
        assert_eq!(config.player_one.color, "#00ff00");
        assert_eq!(config.player_one.name, "Player 1");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["connect-four"]);
        assert_eq!(cli.config, PathBuf::from("connect_four.toml"));
        assert!(cli.log_file.is_none());
        assert!(!cli.print_default_config);
    }
}
