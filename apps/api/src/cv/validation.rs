use serde::Serialize;
use thiserror::Error;

pub const PDF: &str = "application/pdf";
pub const MS_WORD: &str = "application/msword";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ACCEPTED_TYPES: &[&str] = &[PDF, MS_WORD, DOCX];

/// Largest accepted CV, inclusive.
pub const MAX_CV_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("Please upload a PDF or Word document")]
    UnsupportedType,
    #[error("File size must be less than 5MB")]
    TooLarge,
}

impl RejectionReason {
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::UnsupportedType => "UNSUPPORTED_FILE_TYPE",
            RejectionReason::TooLarge => "FILE_TOO_LARGE",
        }
    }
}

/// A CV whose declared type and size passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedCv {
    pub declared_type: String,
    pub size_bytes: u64,
}

/// Validates a CV by its client-declared MIME type and byte size.
///
/// The type is checked before the size, so an oversize file of the wrong
/// type reports `UnsupportedType`. Content is never sniffed; the declared
/// type is trusted as-is.
pub fn validate_cv_file(declared_type: &str, size_bytes: u64) -> Result<AcceptedCv, RejectionReason> {
    if !ACCEPTED_TYPES.contains(&declared_type) {
        return Err(RejectionReason::UnsupportedType);
    }
    if size_bytes > MAX_CV_BYTES {
        return Err(RejectionReason::TooLarge);
    }
    Ok(AcceptedCv {
        declared_type: declared_type.to_string(),
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_under_limit_accepted() {
        let accepted = validate_cv_file(PDF, 4_000_000).unwrap();
        assert_eq!(accepted.size_bytes, 4_000_000);
    }

    #[test]
    fn test_word_formats_accepted() {
        assert!(validate_cv_file(MS_WORD, 1024).is_ok());
        assert!(validate_cv_file(DOCX, 1024).is_ok());
    }

    #[test]
    fn test_png_rejected() {
        assert_eq!(validate_cv_file("image/png", 1000), Err(RejectionReason::UnsupportedType));
    }

    #[test]
    fn test_pdf_over_limit_rejected() {
        assert_eq!(validate_cv_file(PDF, 6_000_000), Err(RejectionReason::TooLarge));
    }

    #[test]
    fn test_type_checked_before_size() {
        assert_eq!(validate_cv_file("image/png", 6_000_000), Err(RejectionReason::UnsupportedType));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert!(validate_cv_file(PDF, MAX_CV_BYTES).is_ok());
        assert_eq!(validate_cv_file(PDF, MAX_CV_BYTES + 1), Err(RejectionReason::TooLarge));
    }

    #[test]
    fn test_empty_file_accepted() {
        assert!(validate_cv_file(DOCX, 0).is_ok());
    }

    #[test]
    fn test_type_match_is_exact() {
        assert_eq!(validate_cv_file("APPLICATION/PDF", 10), Err(RejectionReason::UnsupportedType));
        assert_eq!(validate_cv_file("", 10), Err(RejectionReason::UnsupportedType));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(RejectionReason::UnsupportedType.to_string(), "Please upload a PDF or Word document");
        assert_eq!(RejectionReason::TooLarge.code(), "FILE_TOO_LARGE");
    }
}
