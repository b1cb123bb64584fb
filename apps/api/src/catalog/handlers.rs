use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::jobs::{filter_jobs, JobCriteria, ALL};
use crate::catalog::portfolio::filter_portfolio;
use crate::errors::AppError;
use crate::models::catalog::{JobPosting, PortfolioItem};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub total: usize,
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub category: String,
    pub items: Vec<PortfolioItem>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(criteria): Query<JobCriteria>,
) -> Json<JobListResponse> {
    let jobs = filter_jobs(&state.catalog.jobs, &criteria);
    tracing::debug!(?criteria, matched = jobs.len(), "Filtered job board");
    Json(JobListResponse {
        total: state.catalog.jobs.len(),
        jobs,
    })
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .catalog
        .job(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// GET /api/v1/portfolio
pub async fn handle_list_portfolio(
    State(state): State<AppState>,
    Query(params): Query<PortfolioQuery>,
) -> Json<PortfolioResponse> {
    let category = params.category.unwrap_or_else(|| ALL.to_string());
    let items = filter_portfolio(&state.catalog.portfolio, &category);
    Json(PortfolioResponse { category, items })
}
