use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::cv::form::CvFormFields;
use crate::cv::validation::{validate_cv_file, AcceptedCv, RejectionReason};
use crate::errors::AppError;
use crate::state::AppState;
use crate::submissions::{Acknowledgement, CvFileSummary, Submission};

const FILE_FIELD: &str = "cv";

#[derive(Debug, Deserialize)]
pub struct ValidateCvRequest {
    pub declared_type: String,
    pub size_bytes: u64,
}

/// A body cut off by the upload limit means the file was too large;
/// anything else is a malformed request.
fn multipart_error(e: MultipartError, context: &str) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::info!("CV upload exceeded the request body limit");
        return RejectionReason::TooLarge.into();
    }
    AppError::Validation(format!("{context}: {e}"))
}

/// POST /api/v1/cv/validate
///
/// Lets the upload form check a file before submitting the whole form.
pub async fn handle_validate_cv(
    Json(request): Json<ValidateCvRequest>,
) -> Result<Json<AcceptedCv>, AppError> {
    let accepted = validate_cv_file(&request.declared_type, request.size_bytes)?;
    Ok(Json(accepted))
}

/// POST /api/v1/cv
///
/// Multipart: the CV form's text fields plus the file part `cv`.
/// The file is validated and summarized; its bytes are dropped.
pub async fn handle_upload_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Acknowledgement>), AppError> {
    let mut fields = CvFormFields::default();
    let mut file: Option<CvFileSummary> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Malformed multipart body"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == FILE_FIELD {
            let file_name = field.file_name().unwrap_or("cv").to_string();
            let declared_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| multipart_error(e, "Failed to read CV file"))?;
            file = Some(CvFileSummary {
                file_name,
                declared_type,
                size_bytes: data.len() as u64,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| multipart_error(e, &format!("Failed to read field '{name}'")))?;
            fields.insert(&name, value);
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("No CV file provided".to_string()))?;
    if let Err(reason) = validate_cv_file(&file.declared_type, file.size_bytes) {
        tracing::info!(
            file_name = %file.file_name,
            declared_type = %file.declared_type,
            size_bytes = file.size_bytes,
            "CV rejected: {reason}"
        );
        return Err(reason.into());
    }

    let profile = fields.into_form()?;
    let ack = state
        .submissions
        .submit(Submission::Cv { profile, file })
        .await?;

    Ok((StatusCode::CREATED, Json(ack)))
}
