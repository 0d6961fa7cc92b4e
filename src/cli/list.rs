use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{print_program, OutputConfig};
use crate::config::Config;
use crate::search::FilterCriteria;
use crate::service::ProgramService;
use crate::summary;
use crate::types::{Program, ProgramType};

#[derive(Args)]
pub struct ListArgs {
    /// Filter by program type (academic_degree, nanodegree)
    #[arg(long, short = 't')]
    r#type: Option<ProgramType>,

    /// Filter by organization name (case-sensitive substring)
    #[arg(long, short = 'o')]
    organization: Option<String>,

    /// Maximum total price (price + additional price), inclusive
    #[arg(long)]
    max_price: Option<f64>,

    /// Maximum number of results (defaults to the configured result limit)
    #[arg(long, short = 'n')]
    limit: Option<usize>,
}

/// JSON output format for list results
#[derive(Serialize)]
struct ListOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    r#type: Option<ProgramType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_price: Option<f64>,
    count: usize,
    programs: Vec<&'a Program>,
}

pub fn run(args: ListArgs, config: &Config, output: OutputConfig) -> Result<()> {
    let service = ProgramService::from_config(config)?;
    let limit = args.limit.unwrap_or(service.result_limit());
    let criteria = FilterCriteria {
        program_type: args.r#type,
        organization: args.organization,
        max_price: args.max_price,
    };
    let programs = service.list(&criteria, limit);

    if output.json {
        let json_output = ListOutput {
            r#type: criteria.program_type,
            organization: criteria.organization.as_deref(),
            max_price: criteria.max_price,
            count: programs.len(),
            programs,
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else if !output.quiet {
        let headline = summary::list_summary(&criteria, programs.len());
        if programs.is_empty() {
            println!("{} {}", "!".yellow(), headline);
            return Ok(());
        }

        println!("{} {}", "✓".green(), headline);
        println!();
        for (i, program) in programs.iter().enumerate() {
            print_program(i + 1, program, None, output.verbose);
        }
    }

    Ok(())
}
