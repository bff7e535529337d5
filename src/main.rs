#![forbid(unsafe_code)]
//! rulekit command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use rulekit::commands::{
    execute_check, execute_compose, execute_init, execute_list, execute_match, execute_show,
    execute_sync, CheckOptions, ComposeOptions, InitOptions, ListOptions, MatchOptions,
    ShowOptions, SyncOptions,
};
use rulekit::compose::OutputFormat;
use rulekit::config::{Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "rulekit")]
#[command(about = "Glob-scoped guidance rules for AI coding assistants")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a rulekit project
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Rules directory to use instead of the default
        #[arg(long)]
        rules_dir: Option<PathBuf>,
    },

    /// List loaded rules
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one rule in full
    Show {
        /// Rule identifier
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the rules that apply to a file path
    Match {
        /// Project-relative file path
        path: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose the guidance payload for a file path
    Compose {
        /// Project-relative file path
        path: String,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: ComposeFormatArg,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the rules directory
    Check {
        /// Exit non-zero on any warning
        #[arg(long)]
        strict: bool,
    },

    /// Write rule files for AI tools
    Sync {
        /// Sync only these tools (cursor, claude-code, copilot, windsurf, cline, generic)
        #[arg(long)]
        tools: Vec<String>,

        /// Sync every supported tool
        #[arg(long)]
        all: bool,
    },
}

/// Output format for the compose command
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum ComposeFormatArg {
    #[default]
    Markdown,
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "rulekit=debug" } else { "rulekit=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(&cli.config)?;

    // Most commands need a rules directory; init is what creates it
    if !matches!(cli.command, Commands::Init { .. }) && !config.rules_dir.exists() {
        eprintln!(
            "{} No rules directory at {}",
            style("✗").red(),
            config.rules_dir.display()
        );
        eprintln!("  Run 'rulekit init' to set up the project");
        std::process::exit(1);
    }

    match cli.command {
        Commands::Init { force, rules_dir } => {
            let options = InitOptions { force, rules_dir };
            execute_init(options)?;
        }

        Commands::List { json } => {
            execute_list(&config, ListOptions { json })?;
        }

        Commands::Show { id, json } => {
            execute_show(&config, ShowOptions { id, json })?;
        }

        Commands::Match { path, json } => {
            execute_match(&config, MatchOptions { path, json })?;
        }

        Commands::Compose { path, format, output } => {
            let format = match format {
                ComposeFormatArg::Markdown => OutputFormat::Markdown,
                ComposeFormatArg::Text => OutputFormat::Text,
                ComposeFormatArg::Json => OutputFormat::Json,
            };
            let options = ComposeOptions { path, format, output };
            execute_compose(&config, options)?;
        }

        Commands::Check { strict } => {
            execute_check(&config, CheckOptions { strict })?;
        }

        Commands::Sync { tools, all } => {
            execute_sync(&config, SyncOptions { tools, all })?;
        }
    }

    Ok(())
}
