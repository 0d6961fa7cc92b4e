//! Human-readable summaries returned alongside structured tool results.

use crate::enrollment::EnrollmentOutcome;
use crate::search::FilterCriteria;
use crate::types::Program;

/// Keywords suggested when a search finds nothing
const SUGGESTED_KEYWORDS: &[&str] = &[
    "software",
    "cyber",
    "health",
    "business",
    "data",
    "education",
    "law",
    "tourism",
    "design",
];

/// Arabic comma, used to join Arabic titles
const TITLE_SEPARATOR: &str = "، ";

pub fn search_summary(query: &str, results: &[&Program]) -> String {
    if results.is_empty() {
        return format!(
            "No programs found matching \"{query}\". Try different keywords like: {}.",
            SUGGESTED_KEYWORDS.join(", ")
        );
    }

    let titles: Vec<&str> = results.iter().map(|p| p.title.as_str()).collect();
    format!(
        "Found {} programs matching \"{query}\": {}",
        results.len(),
        titles.join(TITLE_SEPARATOR)
    )
}

pub fn list_summary(criteria: &FilterCriteria, count: usize) -> String {
    if count == 0 {
        return "No programs found with the given filters.".to_string();
    }

    let label = criteria.program_type.map_or("all", |t| t.label());
    let mut summary = format!("Found {count} {label} programs");
    if let Some(organization) = criteria.organization.as_deref().filter(|o| !o.is_empty()) {
        summary.push_str(&format!(" from \"{organization}\""));
    }
    if let Some(max_price) = criteria.max_price {
        summary.push_str(&format!(" under {max_price} SAR"));
    }
    summary.push('.');
    summary
}

pub fn enrollment_message(outcome: &EnrollmentOutcome<'_>) -> String {
    match outcome {
        EnrollmentOutcome::Enrolled(program) => format!(
            "Successfully enrolled in \"{}\" from {}. This is a simulated enrollment for demonstration purposes.",
            program.title, program.organization.name
        ),
        EnrollmentOutcome::NotFound(id) => format!("Program with ID {id} not found."),
    }
}
