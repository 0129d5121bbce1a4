//! comprand - Team composition randomizer
//!
//! Usage:
//!   comprand generate -p A,B,C,D,E [-r Duelist] [-a random]  - Generate a composition
//!   comprand history show [--player NAME]                    - Show role history
//!   comprand history clear                                   - Forget role history
//!   comprand agents [--role ROLE]                            - List the agent catalog
//!   comprand init [dir]                                      - Write an example config

use clap::{Parser, Subcommand};
use cli::commands::{AgentsCommand, GenerateCommand, HistoryCommand, InitCommand};
use cli::settings::Settings;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "comprand")]
#[command(about = "Randomize team compositions with history-aware role rotation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (YAML or JSON); defaults to ./comprand.yaml when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// History file, overriding the config
    #[arg(long, global = true)]
    history: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a team composition
    Generate(GenerateCommand),
    /// Inspect or clear role history
    History(HistoryCommand),
    /// List agents per role
    Agents(AgentsCommand),
    /// Write an example config file
    Init(InitCommand),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run(&Cli::parse())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // init writes the config, so it must not require one
    let settings = || Settings::load(cli.config.as_deref(), cli.history.clone());

    match &cli.command {
        Commands::Init(cmd) => cmd.run(),
        Commands::Generate(cmd) => cmd.run(&settings()?),
        Commands::History(cmd) => cmd.run(&settings()?),
        Commands::Agents(cmd) => cmd.run(&settings()?),
    }
}
