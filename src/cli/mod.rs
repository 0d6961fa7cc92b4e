mod enroll;
mod list;
mod search;
mod serve;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "educonnect")]
#[command(about = "Search, filter and enroll in educational programs over MCP")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Show detailed progress
    #[arg(long, global = true)]
    verbose: bool,

    /// Path to the configuration file (defaults to ./educonnect.toml)
    #[arg(long, global = true, env = "EDUCONNECT_CONFIG")]
    config: Option<PathBuf>,

    /// Path to the program catalog JSON, overriding the config file
    #[arg(long, global = true, env = "EDUCONNECT_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server (stdio or HTTP)
    Serve(serve::ServeArgs),

    /// Rank programs against an English query
    Search(search::SearchArgs),

    /// List programs matching structural filters
    List(list::ListArgs),

    /// Simulate enrollment in a program
    Enroll(enroll::EnrollArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Log level implied by --quiet / --verbose, used when `RUST_LOG` is unset
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    pub async fn run(self) -> Result<()> {
        let output = OutputConfig {
            json: self.json,
            quiet: self.quiet,
            verbose: self.verbose,
        };

        let config = match self.command {
            Commands::Completions { shell } => {
                let mut cmd = Cli::command();
                clap_complete::generate(shell, &mut cmd, "educonnect", &mut std::io::stdout());
                return Ok(());
            }
            _ => load_config(self.config.as_deref(), self.catalog)?,
        };

        match self.command {
            Commands::Serve(args) => serve::run(args, config, output).await,
            Commands::Search(args) => search::run(args, &config, output),
            Commands::List(args) => list::run(args, &config, output),
            Commands::Enroll(args) => enroll::run(args, &config, output),
            Commands::Completions { .. } => Ok(()),
        }
    }
}

/// Discover the config file and apply command-line overrides
fn load_config(path: Option<&std::path::Path>, catalog: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::discover(path)?;
    if let Some(catalog) = catalog {
        config.catalog.path = catalog;
    }
    Ok(config)
}

/// Output configuration passed to all commands
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    pub verbose: bool,
}

/// Print one program as a numbered entry in human-readable output
fn print_program(rank: usize, program: &crate::types::Program, score: Option<u32>, verbose: bool) {
    use colored::Colorize;

    println!(
        "{}. {} {}",
        rank.to_string().bold(),
        program.title.cyan(),
        format!("#{}", program.id).dimmed()
    );

    let price = crate::search::filter::effective_price(program);
    let score_info = score
        .map(|s| format!(" · score {s}").dimmed().to_string())
        .unwrap_or_default();
    println!(
        "   {} · {} · {} SAR{}",
        program.program_type.to_string().magenta(),
        program.organization.name.blue(),
        price,
        score_info
    );

    if verbose && !program.summary.is_empty() {
        println!("   {}", program.summary.dimmed());
    }

    println!();
}
