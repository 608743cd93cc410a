//! CLI definitions and entry point

use clap::{Args, Parser, Subcommand};

use crate::commands;
use standup_cli::output::OutputMode;

/// standup-cli - Daily standup auto-generator
#[derive(Parser, Debug)]
#[command(
    name = "standup-cli",
    version,
    about = "Generate daily standup summaries from git commits",
    long_about = "Generate daily standup summaries from git commits.\n\n\
                  Scans a local repository or a public git URL, groups recent\n\
                  commits into features, bug fixes, and maintenance, and formats\n\
                  them as a ready-to-paste standup summary."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options for the generate flow.
///
/// Shared between the bare invocation and the `generate` subcommand.
/// Absent options fall back to interactive prompts (on a terminal), then
/// the config-file defaults, then the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Number of days to look back
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Filter commits by author name
    #[arg(short, long)]
    pub author: Option<String>,

    /// Path to a local repository or a remote git URL
    #[arg(short, long)]
    pub path: Option<String>,

    /// Copy the standup summary to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a standup summary from recent git commits
    Generate(GenerateArgs),

    /// Show or edit persistent defaults
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Set a default (keys: days, author, path, copy)
    Set {
        /// Config key
        key: String,

        /// New value
        value: String,
    },

    /// Restore a default to its built-in value
    Unset {
        /// Config key
        key: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Generate(args)) => commands::generate(&args, output_mode),
        Some(Command::Config { action }) => commands::config_cmd(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("standup-cli v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        // Bare invocation runs the generate flow
        None => commands::generate(&cli.generate, output_mode),
    }
}
