use anyhow::Context;
use clap::{Parser, Subcommand};
use devexcuse_core::cli;
use devexcuse_core::conf::{DEFAULT_CONFIG_PATH, DevExcuseConfig, load_config};
use devexcuse_core::logging::init_logging;
use devexcuse_core::server;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "devexcuse",
    version,
    about = "DevExcuse: random developer excuses over HTTP"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the DevExcuse API server (default)
    Run {
        /// Path to the config file. Defaults apply when the default path is missing.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a random excuse
    Excuse {
        #[arg(long)]
        category: Option<String>,

        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// List every category
    Categories,

    /// Search excuse text
    Search { query: String },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Run { config }) => run_server(config),
        None => run_server(None),

        Some(Command::Excuse { category, count }) => {
            cli::offline::excuse(category.as_deref(), count)
        }
        Some(Command::Categories) => cli::offline::categories(),
        Some(Command::Search { query }) => cli::offline::search(&query),

        Some(Command::Config { cmd }) => cli::conf::run(cmd),
    }
}

fn run_server(config: Option<PathBuf>) -> anyhow::Result<()> {
    init_logging();

    // An explicit path must exist; the default one may be absent.
    let cfg = match config {
        Some(path) => load_config(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DevExcuseConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
            .context("failed to load default config")?,
    };

    server::run(cfg)
}
