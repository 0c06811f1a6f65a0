use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use rust_shedding::deck::{read_tokens, Deal};
use rust_shedding::{play, transcript, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "shedding")]
#[command(author, version, about = "Play a beat-or-pass shedding game between independent agents")]
struct Args {
    /// Number of agents (1-52)
    players: usize,

    /// File of whitespace-separated card tokens such as D3 ST HA (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Shuffle the cards before dealing
    #[arg(long)]
    shuffle: bool,

    /// Seed for the shuffle (implies --shuffle)
    #[arg(long)]
    seed: Option<u64>,

    /// Print events as JSON lines instead of a transcript
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GameConfig {
        let config = GameConfig::new(self.players).with_shuffle(self.shuffle);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        })
        .with_writer(io::stderr)
        .init();

    let config = args.config();
    config.validate().context("Invalid configuration")?;

    let tokens = read_tokens(args.input.as_deref()).await.with_context(|| match &args.input {
        Some(path) => format!("Failed to read cards from {}", path.display()),
        None => "Failed to read cards from standard input".to_string(),
    })?;
    info!(tokens = tokens.len(), "read card tokens");

    let deal = Deal::from_tokens(&tokens, &config).context("Failed to deal cards")?;
    let outcome = play(deal).await.context("Game aborted")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        transcript::write_json(&mut out, outcome.events())?;
    } else {
        transcript::write_text(&mut out, outcome.events())?;
    }
    out.flush()?;

    Ok(())
}
