//! Whack-a-Mole - Entry Point
//!
//! Builds the arena from config and flags, then plays on stdin/stdout.
//! Logs go to stderr so they never mix with the game text.

use std::path::PathBuf;

use clap::Parser;
use whack_a_mole::core::config::GameConfig;
use whack_a_mole::core::error::Result;
use whack_a_mole::game::{spawn_console_reader, Game};

/// Whack-a-Mole - swing at holes before the moles get away
#[derive(Parser, Debug)]
#[command(name = "whack-a-mole")]
#[command(about = "Whack every mole in the arena to win")]
struct Args {
    /// Arena config file (e.g. data/arena.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of holes
    #[arg(long)]
    holes: Option<usize>,

    /// Number of moles, which is also how many kills win the game
    #[arg(long)]
    moles: Option<usize>,

    /// Percent chance per tick for each mole move
    #[arg(long)]
    entropy: Option<u8>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Random seed for reproducible mole behavior
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    /// Flags override the config file, which overrides the defaults
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(holes) = self.holes {
            config.holes = holes;
        }
        if let Some(moles) = self.moles {
            config.moles = moles;
        }
        if let Some(entropy) = self.entropy {
            config.entropy = entropy;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = Args::parse().into_config()?;
    tracing::info!(?config, "Whack-a-Mole starting...");

    let mut game = Game::from_config(&config);
    game.init(config.holes, config.moles)?;

    let commands = spawn_console_reader();
    let mut stdout = tokio::io::stdout();
    game.play(commands, &mut stdout, config.tick_period(), config.entropy)
        .await?;

    tracing::info!(
        dead = game.moles().dead_count(),
        alive = game.moles().alive_count(),
        "Whack-a-Mole shutting down"
    );
    Ok(())
}
