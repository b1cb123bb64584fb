use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::{EditorProfile, RecordId};
use crate::profile::session::{ListKind, ProfileSession};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub editing: bool,
    pub profile: EditorProfile,
    pub draft: Option<EditorProfile>,
}

impl From<&ProfileSession> for ProfileResponse {
    fn from(session: &ProfileSession) -> Self {
        ProfileResponse {
            editing: session.is_editing(),
            profile: session.committed().clone(),
            draft: session.draft().cloned(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FieldUpdate {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct RecordAdded {
    pub list: ListKind,
    pub id: RecordId,
    pub draft: Option<EditorProfile>,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    let session = state.profile.read().await;
    Json(ProfileResponse::from(&*session))
}

/// POST /api/v1/profile/edit
///
/// Toggles edit mode. Leaving edit mode commits the draft.
pub async fn handle_toggle_edit(State(state): State<AppState>) -> Json<ProfileResponse> {
    let mut session = state.profile.write().await;
    let editing = session.toggle_edit();
    tracing::info!(editing, "Profile edit mode toggled");
    Json(ProfileResponse::from(&*session))
}

/// PATCH /api/v1/profile/draft
pub async fn handle_update_draft(
    State(state): State<AppState>,
    Json(update): Json<FieldUpdate>,
) -> Result<Json<ProfileResponse>, AppError> {
    let mut session = state.profile.write().await;
    session.set_profile_field(&update.field, &update.value)?;
    Ok(Json(ProfileResponse::from(&*session)))
}

/// POST /api/v1/profile/draft/:list
pub async fn handle_add_record(
    State(state): State<AppState>,
    Path(list): Path<String>,
) -> Result<(StatusCode, Json<RecordAdded>), AppError> {
    let kind: ListKind = list.parse()?;
    let mut session = state.profile.write().await;
    let id = session.add_record(kind)?;
    tracing::debug!(?kind, id, "Draft record added");
    Ok((
        StatusCode::CREATED,
        Json(RecordAdded {
            list: kind,
            id,
            draft: session.draft().cloned(),
        }),
    ))
}

/// PATCH /api/v1/profile/draft/:list/:id
pub async fn handle_update_record(
    State(state): State<AppState>,
    Path((list, id)): Path<(String, RecordId)>,
    Json(update): Json<FieldUpdate>,
) -> Result<Json<ProfileResponse>, AppError> {
    let kind: ListKind = list.parse()?;
    let mut session = state.profile.write().await;
    session.update_record(kind, id, &update.field, &update.value)?;
    Ok(Json(ProfileResponse::from(&*session)))
}

/// DELETE /api/v1/profile/draft/:list/:id
pub async fn handle_remove_record(
    State(state): State<AppState>,
    Path((list, id)): Path<(String, RecordId)>,
) -> Result<Json<ProfileResponse>, AppError> {
    let kind: ListKind = list.parse()?;
    let mut session = state.profile.write().await;
    session.remove_record(kind, id)?;
    Ok(Json(ProfileResponse::from(&*session)))
}
