pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::cv::handlers as cv;
use crate::inquiries::handlers as inquiries;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.upload_body_limit;

    Router::new()
        .route("/health", get(health::health_handler))
        // Job board and agency portfolio
        .route("/api/v1/jobs", get(catalog::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(catalog::handle_get_job))
        .route("/api/v1/portfolio", get(catalog::handle_list_portfolio))
        // CV upload
        .route("/api/v1/cv/validate", post(cv::handle_validate_cv))
        .route(
            "/api/v1/cv",
            post(cv::handle_upload_cv).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Client inquiries
        .route("/api/v1/quotes", post(inquiries::handle_quote_request))
        .route("/api/v1/contact", post(inquiries::handle_contact))
        // Editor profile
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .route("/api/v1/profile/edit", post(profile::handle_toggle_edit))
        .route("/api/v1/profile/draft", patch(profile::handle_update_draft))
        .route("/api/v1/profile/draft/:list", post(profile::handle_add_record))
        .route(
            "/api/v1/profile/draft/:list/:id",
            patch(profile::handle_update_record).delete(profile::handle_remove_record),
        )
        .with_state(state)
}
