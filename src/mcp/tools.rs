//! MCP tool definitions for EduConnect.
//!
//! This module defines the request types for each MCP tool and the
//! structured content returned to the widget.

use serde::{Deserialize, Serialize};

use crate::search::FilterCriteria;
use crate::types::{Program, ProgramType};

pub const ACTION_SEARCH_RESULTS: &str = "search_results";
pub const ACTION_LIST_RESULTS: &str = "list_results";
pub const ACTION_ENROLLMENT_SUCCESS: &str = "enrollment_success";

/// Request for free-text program search
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchProgramsRequest {
    /// Background or interests, in English
    #[schemars(description = "Search query in English describing your background or interests")]
    pub query: String,
}

/// Request for listing programs with filters
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListProgramsRequest {
    /// Program type filter
    #[schemars(description = "Program type filter: 'academic_degree' or 'nanodegree'")]
    pub r#type: Option<ProgramType>,

    /// Organization name, partial match
    #[schemars(description = "Organization name (partial match in Arabic)")]
    pub organization: Option<String>,

    /// Maximum total price
    #[serde(rename = "maxPrice")]
    #[schemars(description = "Maximum total price in SAR")]
    pub max_price: Option<f64>,
}

impl From<ListProgramsRequest> for FilterCriteria {
    fn from(req: ListProgramsRequest) -> Self {
        FilterCriteria {
            program_type: req.r#type,
            organization: req.organization,
            max_price: req.max_price,
        }
    }
}

/// Request for simulated enrollment
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EnrollRequest {
    /// Program to enroll in
    #[serde(rename = "programId")]
    #[schemars(description = "The program ID to enroll in")]
    pub program_id: i64,
}

/// Structured content for search and list results
#[derive(Debug, Serialize)]
pub struct ProgramsContent<'a> {
    pub programs: Vec<&'a Program>,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<&'a str>,
}

/// Structured content for a successful enrollment
#[derive(Debug, Serialize)]
pub struct EnrollmentContent<'a> {
    pub program: &'a Program,
    pub action: &'static str,
}
