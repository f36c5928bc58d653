use anyhow::Result;
use clap::Parser;
use snake_tui::game::GameConfig;
use snake_tui::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Single-player grid snake for the terminal")]
struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value = "20")]
    grid_size: usize,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "150")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // The TUI draws on stderr, so logs on stdout never corrupt the screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stdout)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.grid_size, cli.tick_ms);

    let mut mode = HumanMode::new(config)?;
    mode.run().await?;

    Ok(())
}
