mod commands;

use botperms::config::Config;
use clap::{Parser, Subcommand};
use commands::Preset;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "botperms",
    about = "Inspect and apply Telegram chat permissions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a permissions preset as JSON
    Show {
        #[arg(value_enum)]
        preset: Preset,
    },
    /// Normalize a ChatPermissions JSON object read from FILE or stdin
    Parse { file: Option<PathBuf> },
    /// Set the default member permissions of a chat
    Apply {
        /// Target chat; falls back to `default_chat_id` from the config
        #[arg(long, allow_hyphen_values = true)]
        chat_id: Option<i64>,
        /// `all`, `none`, or a JSON file (`-` for stdin)
        source: String,
    },
}

fn init_tracing(is_apply: bool) {
    let default_level = if is_apply { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_apply(chat_id: Option<i64>, source: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(commands::apply(&config, chat_id, source))
}

fn main() {
    let cli = Cli::parse();

    init_tracing(matches!(cli.command, Commands::Apply { .. }));

    let result = match cli.command {
        Commands::Show { preset } => commands::show(preset),
        Commands::Parse { file } => commands::parse(file.as_deref()),
        Commands::Apply { chat_id, source } => run_apply(chat_id, &source),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
