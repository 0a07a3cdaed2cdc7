use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_k::ai::{play_match, AgentKind};
use connect_k::config::AppConfig;
use connect_k::game::GameOutcome;

/// Play one M x N, K-in-a-row game between two agents.
#[derive(Parser)]
#[command(name = "connect_k", about = "Play a K-in-a-row game between two agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_k.toml")]
    config: PathBuf,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override run length needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Force gravity on
    #[arg(long, conflicts_with = "no_gravity")]
    gravity: bool,

    /// Force gravity off
    #[arg(long)]
    no_gravity: bool,

    /// Agent playing X
    #[arg(long, value_enum)]
    agent_a: Option<AgentKind>,

    /// Agent playing O
    #[arg(long, value_enum)]
    agent_b: Option<AgentKind>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Per-move deadline in milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        let toml = AppConfig::default_toml().context("default config")?;
        print!("{toml}");
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        app_config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        app_config.board.cols = cols;
    }
    if let Some(k) = cli.win_length {
        app_config.board.win_length = k;
    }
    if cli.gravity {
        app_config.board.gravity = true;
    }
    if cli.no_gravity {
        app_config.board.gravity = false;
    }
    if let Some(kind) = cli.agent_a {
        app_config.game.agent_a = kind;
    }
    if let Some(kind) = cli.agent_b {
        app_config.game.agent_b = kind;
    }
    if cli.seed.is_some() {
        app_config.game.seed = cli.seed;
    }
    if let Some(ms) = cli.deadline_ms {
        app_config.game.move_deadline_ms = ms;
    }
    app_config.validate().context("invalid configuration")?;

    let board_config = app_config.board_config()?;
    let seed = app_config.game.seed;
    let mut agent_a = app_config.game.agent_a.build(seed);
    let seed_b = seed.map(|s| s.wrapping_add(1));
    let mut agent_b = app_config.game.agent_b.build(seed_b);

    println!(
        "{}x{} board, {} in a row, gravity {} | X: {} vs O: {}",
        board_config.rows(),
        board_config.cols(),
        board_config.win_length(),
        if board_config.gravity() { "on" } else { "off" },
        agent_a.name(),
        agent_b.name(),
    );

    let record = play_match(
        board_config,
        app_config.game.first_player,
        agent_a.as_mut(),
        agent_b.as_mut(),
        app_config.game.move_deadline(),
        |session| {
            if let Some(cell) = session.last_move() {
                println!("{} -> {}", session.current_player().other().name(), cell);
            }
            println!("{}", session.board());
        },
    )?;

    match record.outcome {
        GameOutcome::Winner(player) => {
            println!("{} wins after {} moves", player.name(), record.moves.len())
        }
        GameOutcome::Draw => println!("Draw after {} moves", record.moves.len()),
    }

    Ok(())
}
