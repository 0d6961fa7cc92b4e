use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::OutputConfig;
use crate::config::Config;
use crate::enrollment::EnrollmentOutcome;
use crate::service::ProgramService;
use crate::summary;
use crate::types::Program;

#[derive(Args)]
pub struct EnrollArgs {
    /// ID of the program to enroll in
    program_id: i64,
}

#[derive(Serialize)]
struct EnrollOutput<'a> {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    program: Option<&'a Program>,
}

pub fn run(args: EnrollArgs, config: &Config, output: OutputConfig) -> Result<()> {
    let service = ProgramService::from_config(config)?;
    let outcome = service.enroll(args.program_id);
    let message = summary::enrollment_message(&outcome);

    if output.json {
        let json_output = match outcome {
            EnrollmentOutcome::Enrolled(program) => EnrollOutput {
                status: "enrolled",
                message,
                program: Some(program),
            },
            EnrollmentOutcome::NotFound(_) => EnrollOutput {
                status: "not_found",
                message,
                program: None,
            },
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else if !output.quiet {
        match outcome {
            EnrollmentOutcome::Enrolled(_) => println!("{} {}", "✓".green(), message),
            EnrollmentOutcome::NotFound(_) => println!("{} {}", "!".yellow(), message),
        }
    }

    Ok(())
}
