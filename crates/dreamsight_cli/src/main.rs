use anyhow::Context;
use clap::{Parser, Subcommand};
use dreamsight_core::{parse_emotions, DreamsightConfig, EmotionSelection};
use dreamsight_expression::{DreamAnalyzer, ThinkingDelay};
use dreamsight_journal::{submit_dream, DreamArchive, JournalError};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;
mod session;

use session::Session;

#[derive(Parser, Debug)]
#[command(name = "dreamsight", author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = "dreamsight.toml")]
    config: String,

    /// Seed the analyzer for reproducible readings
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the "analyzing" pause
    #[arg(long, global = true)]
    no_delay: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single dream and print the reading
    Analyze {
        /// Emotion felt in the dream (repeat up to 3 times)
        #[arg(short, long = "emotion", required = true)]
        emotions: Vec<String>,

        /// Mark the entry as shared with the community
        #[arg(long)]
        share: bool,

        /// Print the saved entry as JSON
        #[arg(long)]
        json: bool,

        /// The dream description
        text: String,
    },
    /// List every dream symbol and its meaning
    Symbols,
    /// Interactive journal session (default)
    Session,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn analyze(
    config: &DreamsightConfig,
    delay: &ThinkingDelay,
    labels: &[String],
    text: &str,
    share: bool,
    json: bool,
) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        return Err(JournalError::EmptyDescription.into());
    }
    let emotions = parse_emotions(labels)?;
    let selection = EmotionSelection::try_from_slice(&emotions)?;

    let wait = delay.delay();
    if !wait.is_zero() {
        eprintln!("Analyzing dream...");
        tokio::time::sleep(wait).await;
    }

    let mut analyzer = DreamAnalyzer::new(config.analysis.clone());
    let mut archive = DreamArchive::new(config.community.comment_author.clone());
    let entry = submit_dream(&mut analyzer, &mut archive, text, selection, share)?;

    if json {
        let out = serde_json::to_string_pretty(entry).context("Failed to serialize entry")?;
        println!("{}", out);
    } else {
        println!("{}", render::entry_detail(entry));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = DreamsightConfig::load_or_default(&args.config);
    if args.seed.is_some() {
        config.analysis.seed = args.seed;
    }
    let delay = if args.no_delay {
        ThinkingDelay::none()
    } else {
        ThinkingDelay::from_config(&config.pacing)
    };
    info!(config = %args.config, seed = ?config.analysis.seed, "DreamSight starting");

    match args.command.unwrap_or(Command::Session) {
        Command::Analyze {
            emotions,
            share,
            json,
            text,
        } => analyze(&config, &delay, &emotions, &text, share, json).await,
        Command::Symbols => {
            print!("{}", render::symbol_table());
            Ok(())
        }
        Command::Session => Session::new(&config, delay).run().await,
    }
}
