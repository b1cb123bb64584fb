//! Submission sink — the boundary where accepted form data leaves the core.
//!
//! Default: `LogSubmissionSink`, which records each submission as a
//! structured tracing event and acknowledges it. A real delivery channel
//! (mail, queue, CRM) plugs in by implementing `SubmissionSink`.
//!
//! `AppState` holds an `Arc<dyn SubmissionSink>`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::forms::{ContactMessage, CvProfileForm, QuoteRequest};

/// Metadata of an uploaded CV. The bytes themselves are discarded.
#[derive(Debug, Clone, Serialize)]
pub struct CvFileSummary {
    pub file_name: String,
    pub declared_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    Quote(QuoteRequest),
    Contact(ContactMessage),
    Cv {
        profile: CvProfileForm,
        file: CvFileSummary,
    },
}

impl Submission {
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Quote(_) => "quote",
            Submission::Contact(_) => "contact",
            Submission::Cv { .. } => "cv",
        }
    }

    /// Message shown to the visitor once the submission is accepted.
    pub fn acknowledgement_message(&self) -> &'static str {
        match self {
            Submission::Quote(_) => "Thanks for your quote request! We will get back to you with a detailed proposal within 24 hours.",
            Submission::Contact(_) => "Thanks for your message! We will get back to you shortly.",
            Submission::Cv { .. } => "Your CV and profile have been successfully uploaded!",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgement {
    pub reference: Uuid,
    pub kind: String,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

impl Acknowledgement {
    pub fn for_submission(submission: &Submission) -> Self {
        Acknowledgement {
            reference: Uuid::new_v4(),
            kind: submission.kind().to_string(),
            received_at: Utc::now(),
            message: submission.acknowledgement_message().to_string(),
        }
    }
}

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, submission: Submission) -> Result<Acknowledgement, AppError>;
}

/// Logs every submission and acknowledges it. Nothing is persisted.
pub struct LogSubmissionSink;

#[async_trait]
impl SubmissionSink for LogSubmissionSink {
    async fn submit(&self, submission: Submission) -> Result<Acknowledgement, AppError> {
        let ack = Acknowledgement::for_submission(&submission);
        let payload = serde_json::to_string(&submission)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode submission: {e}")))?;
        tracing::info!(
            reference = %ack.reference,
            kind = ack.kind.as_str(),
            %payload,
            "Form submission received"
        );
        Ok(ack)
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Keeps submissions in memory so tests can inspect what was handed off.
    #[derive(Default)]
    pub struct RecordingSink {
        pub received: Mutex<Vec<Submission>>,
    }

    #[async_trait]
    impl SubmissionSink for RecordingSink {
        async fn submit(&self, submission: Submission) -> Result<Acknowledgement, AppError> {
            let ack = Acknowledgement::for_submission(&submission);
            self.received
                .lock()
                .expect("recording sink poisoned")
                .push(submission);
            Ok(ack)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forms::{ContactService, QuoteService};

    fn contact() -> Submission {
        Submission::Contact(ContactMessage {
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            phone: None,
            subject: "Rebrand".to_string(),
            message: "Need a new site".to_string(),
            service: ContactService::Web,
        })
    }

    #[tokio::test]
    async fn test_log_sink_acknowledges() {
        let ack = LogSubmissionSink.submit(contact()).await.unwrap();
        assert_eq!(ack.kind, "contact");
        assert_eq!(ack.message, "Thanks for your message! We will get back to you shortly.");
    }

    #[tokio::test]
    async fn test_references_are_unique() {
        let a = LogSubmissionSink.submit(contact()).await.unwrap();
        let b = LogSubmissionSink.submit(contact()).await.unwrap();
        assert_ne!(a.reference, b.reference);
    }

    #[test]
    fn test_submission_serializes_with_kind_tag() {
        let quote = Submission::Quote(QuoteRequest {
            name: "Dev".to_string(),
            email: "dev@example.com".to_string(),
            phone: "1".to_string(),
            company: None,
            service: QuoteService::Video,
            budget: None,
            timeline: None,
            description: "Launch video".to_string(),
            hear_about: None,
        });
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["kind"], "quote");
        assert_eq!(value["service"], "video");
    }
}
