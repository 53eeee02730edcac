//! Binary entrypoint for the Treasure Hunter CLI.
//!
//! Commands:
//! - `play [--seed <n>]` - play one game on this terminal
//! - `init` - write a starter `treasure-hunter.toml`
//! - `modes` - print the resolved difficulty table as JSON
//!
//! See the library crate docs for module-level details: `treasure_hunter::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use treasure_hunter::config::Config;
use treasure_hunter::hunt::{ConsoleInput, ConsoleOutput, GameSession, RandEntropy};

#[derive(Parser)]
#[command(name = "treasure-hunter")]
#[command(about = "A text-adventure treasure hunt across randomly generated towns")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "treasure-hunter.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on stdin/stdout
    Play {
        /// Seed the random source so a game can be replayed
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write a default configuration file
    Init,
    /// Show the difficulty table in effect
    Modes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let config = load_or_default(&cli.config, cli.verbose).await?;
            info!("Starting Treasure Hunter v{}", env!("CARGO_PKG_VERSION"));
            let game = config.game.clone();
            // the session blocks on stdin for every turn
            let ending = tokio::task::spawn_blocking(move || {
                let rng = match seed {
                    Some(seed) => {
                        info!("Using fixed seed {}", seed);
                        RandEntropy::seeded(seed)
                    }
                    None => RandEntropy::from_os(),
                };
                let mut session =
                    GameSession::start(&game, ConsoleOutput::new(), ConsoleInput::new(), rng);
                session.play()
            })
            .await
            .map_err(|e| anyhow!("Game session panicked: {}", e))?;
            info!("Game over: {:?}", ending);
        }
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Configuration file created at {}", cli.config);
        }
        Commands::Modes => {
            let config = load_or_default(&cli.config, cli.verbose).await?;
            let table = config.game.mode_table();
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
    }

    Ok(())
}

/// Load the config file, falling back to built-in defaults when it is missing.
///
/// A file that exists but fails to parse or validate is still an error.
async fn load_or_default(path: &str, verbosity: u8) -> Result<Config> {
    if !std::path::Path::new(path).exists() {
        init_logging(&None, verbosity);
        warn!("Config file {} not found, using defaults", path);
        eprintln!("No config at {} (run `treasure-hunter init`); using defaults.", path);
        return Ok(Config::default());
    }
    let config = Config::load(path).await?;
    init_logging(&Some(config.clone()), verbosity);
    Ok(config)
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    builder.target(env_logger::Target::Stderr);

    // log lines would interleave with the game text otherwise
    let mirror = verbosity > 0 && atty::is(atty::Stream::Stderr);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.log_file().map(str::to_string))
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&file)
                .map_err(|e| eprintln!("Cannot open log file {}: {}", file, e))
                .ok()
        });

    match log_file {
        Some(f) => {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if mirror {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            builder.format(move |fmt, record| {
                if !mirror {
                    return Ok(());
                }
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    }
    let _ = builder.try_init();
}
