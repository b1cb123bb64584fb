use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::models::forms::{ContactMessage, QuoteRequest};
use crate::state::AppState;
use crate::submissions::{Acknowledgement, Submission};

/// POST /api/v1/quotes
pub async fn handle_quote_request(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<(StatusCode, Json<Acknowledgement>), AppError> {
    let ack = state.submissions.submit(Submission::Quote(request)).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<(StatusCode, Json<Acknowledgement>), AppError> {
    let ack = state.submissions.submit(Submission::Contact(message)).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}
