//! HTTP request handlers for the EduConnect REST API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::enrollment::EnrollmentOutcome;
use crate::search::FilterCriteria;
use crate::summary;
use crate::types::{Program, ProgramType};

use super::AppState;

/// Build the REST routes
pub(super) fn router(state: Arc<AppState>) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/health", get(health))
        .route("/search", get(search))
        .route("/programs", get(list_programs))
        .route("/programs/{id}", get(get_program))
        .route("/programs/{id}/enroll", post(enroll))
        .with_state(state)
}

/// Error response body
#[derive(Debug, Serialize)]
pub(super) struct ErrorBody {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn not_found(id: i64) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: format!("Program with ID {id} not found."),
        }),
    )
}

// -- /health --

#[derive(Debug, Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    programs: usize,
}

pub(super) async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        programs: state.service.catalog().len(),
    })
}

// -- /search --

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    /// Search query
    #[serde(default)]
    q: String,
    /// Max results (defaults to the configured result limit)
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    query: String,
    count: usize,
    summary: String,
    results: Vec<ScoredProgram>,
}

#[derive(Debug, Serialize)]
struct ScoredProgram {
    score: u32,
    program: Program,
}

pub(super) async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let limit = params.limit.unwrap_or(state.service.result_limit());
    let ranked = state.service.rank(&params.q, limit);
    let programs: Vec<&Program> = ranked.iter().map(|r| r.program).collect();

    Json(SearchResponse {
        summary: summary::search_summary(&params.q, &programs),
        count: ranked.len(),
        results: ranked
            .iter()
            .map(|r| ScoredProgram {
                score: r.score,
                program: r.program.clone(),
            })
            .collect(),
        query: params.q,
    })
}

// -- /programs --

#[derive(Debug, Default, Deserialize)]
pub(super) struct ListParams {
    r#type: Option<ProgramType>,
    organization: Option<String>,
    max_price: Option<f64>,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct ListResponse {
    count: usize,
    summary: String,
    programs: Vec<Program>,
}

pub(super) async fn list_programs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Json<ListResponse> {
    let limit = params.limit.unwrap_or(state.service.result_limit());
    let criteria = FilterCriteria {
        program_type: params.r#type,
        organization: params.organization,
        max_price: params.max_price,
    };
    let programs = state.service.list(&criteria, limit);

    Json(ListResponse {
        count: programs.len(),
        summary: summary::list_summary(&criteria, programs.len()),
        programs: programs.into_iter().cloned().collect(),
    })
}

// -- /programs/{id} --

pub(super) async fn get_program(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Program>, ApiError> {
    state
        .service
        .catalog()
        .find(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(id))
}

// -- /programs/{id}/enroll --

#[derive(Debug, Serialize)]
pub(super) struct EnrollResponse {
    message: String,
    program: Program,
}

pub(super) async fn enroll(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<EnrollResponse>, ApiError> {
    let outcome = state.service.enroll(id);
    let message = summary::enrollment_message(&outcome);
    match outcome {
        EnrollmentOutcome::Enrolled(program) => Ok(Json(EnrollResponse {
            message,
            program: program.clone(),
        })),
        EnrollmentOutcome::NotFound(id) => Err(not_found(id)),
    }
}
