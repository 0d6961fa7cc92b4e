use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{print_program, OutputConfig};
use crate::config::Config;
use crate::search::RankedProgram;
use crate::service::ProgramService;
use crate::types::Program;

#[derive(Args)]
pub struct SearchArgs {
    /// The search query, in English
    query: String,

    /// Maximum number of results (defaults to the configured result limit)
    #[arg(long, short = 'n')]
    limit: Option<usize>,
}

/// JSON output format for search results
#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    count: usize,
    results: Vec<SearchResultOutput<'a>>,
}

#[derive(Serialize)]
struct SearchResultOutput<'a> {
    score: u32,
    program: &'a Program,
}

pub fn run(args: SearchArgs, config: &Config, output: OutputConfig) -> Result<()> {
    let service = ProgramService::from_config(config)?;
    let limit = args.limit.unwrap_or(service.result_limit());
    let results = service.rank(&args.query, limit);

    if output.json {
        let json_output = SearchOutput {
            query: &args.query,
            count: results.len(),
            results: results
                .iter()
                .map(|r| SearchResultOutput {
                    score: r.score,
                    program: r.program,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else if !output.quiet {
        print_human_output(&args.query, &results, output.verbose);
    }

    Ok(())
}

fn print_human_output(query: &str, results: &[RankedProgram<'_>], verbose: bool) {
    if results.is_empty() {
        println!("{} No programs found for: {}", "!".yellow(), query.cyan());
        return;
    }

    println!(
        "{} Found {} programs for: {}",
        "✓".green(),
        results.len(),
        query.cyan()
    );
    println!();

    for (i, result) in results.iter().enumerate() {
        print_program(i + 1, result.program, Some(result.score), verbose);
    }
}
