//! Edit session for the editor profile.
//!
//! While viewing, only the committed profile exists. Entering edit mode
//! copies it into a draft; every edit replaces the draft wholesale with the
//! next snapshot; leaving edit mode commits the draft. There is no discard.

use std::str::FromStr;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::{
    CertificationEntry, EditorProfile, EducationEntry, ExperienceEntry, RecordId, Specialization,
};
use crate::profile::editable_list::{self, ListRecord};

/// Scalar profile fields editable in the draft.
pub const PROFILE_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "location",
    "website",
    "about",
    "specialization",
    "skills",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Experience,
    Education,
    Certifications,
}

impl FromStr for ListKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(ListKind::Experience),
            "education" => Ok(ListKind::Education),
            "certifications" => Ok(ListKind::Certifications),
            other => Err(AppError::NotFound(format!("Unknown profile list '{other}'"))),
        }
    }
}

impl ListKind {
    pub fn has_field(&self, field: &str) -> bool {
        match self {
            ListKind::Experience => ExperienceEntry::has_field(field),
            ListKind::Education => EducationEntry::has_field(field),
            ListKind::Certifications => CertificationEntry::has_field(field),
        }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ListKind::Experience => ExperienceEntry::FIELDS,
            ListKind::Education => EducationEntry::FIELDS,
            ListKind::Certifications => CertificationEntry::FIELDS,
        }
    }
}

/// Splits a comma-separated skills input, trimming and dropping blanks.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone)]
pub struct ProfileSession {
    committed: EditorProfile,
    draft: Option<EditorProfile>,
}

impl ProfileSession {
    pub fn new(committed: EditorProfile) -> Self {
        ProfileSession {
            committed,
            draft: None,
        }
    }

    pub fn committed(&self) -> &EditorProfile {
        &self.committed
    }

    pub fn draft(&self) -> Option<&EditorProfile> {
        self.draft.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Viewing → editing copies the committed profile into a fresh draft.
    /// Editing → viewing commits the draft. Returns the new editing flag.
    pub fn toggle_edit(&mut self) -> bool {
        match self.draft.take() {
            Some(draft) => {
                self.committed = draft;
                false
            }
            None => {
                self.draft = Some(self.committed.clone());
                true
            }
        }
    }

    fn draft_mut(&mut self) -> Result<&mut EditorProfile, AppError> {
        self.draft
            .as_mut()
            .ok_or_else(|| AppError::Conflict("Profile is not in edit mode".to_string()))
    }

    pub fn set_profile_field(&mut self, field: &str, value: &str) -> Result<(), AppError> {
        let draft = self.draft_mut()?;
        match field {
            "name" => draft.name = value.to_string(),
            "email" => draft.email = value.to_string(),
            "phone" => draft.phone = value.to_string(),
            "location" => draft.location = value.to_string(),
            "website" => draft.website = value.to_string(),
            "about" => draft.about = value.to_string(),
            "specialization" => {
                draft.specialization = Specialization::parse(value).ok_or_else(|| {
                    AppError::Validation(format!("unknown specialization '{value}'"))
                })?
            }
            "skills" => draft.skills = parse_skills(value),
            other => {
                return Err(AppError::Validation(format!(
                    "unknown profile field '{other}', expected one of {PROFILE_FIELDS:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn add_record(&mut self, kind: ListKind) -> Result<RecordId, AppError> {
        let draft = self.draft_mut()?;
        let id = match kind {
            ListKind::Experience => {
                let (next, id) = editable_list::add(&draft.experience, ExperienceEntry::default);
                draft.experience = next;
                id
            }
            ListKind::Education => {
                let (next, id) = editable_list::add(&draft.education, EducationEntry::default);
                draft.education = next;
                id
            }
            ListKind::Certifications => {
                let (next, id) =
                    editable_list::add(&draft.certifications, CertificationEntry::default);
                draft.certifications = next;
                id
            }
        };
        Ok(id)
    }

    /// Unknown ids are a silent no-op. Field names the list's records do
    /// not have are rejected without touching the draft.
    pub fn update_record(
        &mut self,
        kind: ListKind,
        id: RecordId,
        field: &str,
        value: &str,
    ) -> Result<(), AppError> {
        let draft = self.draft_mut()?;
        if !kind.has_field(field) {
            return Err(AppError::Validation(format!(
                "unknown {kind:?} field '{field}', expected one of {:?}",
                kind.fields()
            )));
        }
        match kind {
            ListKind::Experience => {
                draft.experience = editable_list::update(&draft.experience, id, field, value)
            }
            ListKind::Education => {
                draft.education = editable_list::update(&draft.education, id, field, value)
            }
            ListKind::Certifications => {
                draft.certifications = editable_list::update(&draft.certifications, id, field, value)
            }
        }
        Ok(())
    }

    pub fn remove_record(&mut self, kind: ListKind, id: RecordId) -> Result<(), AppError> {
        let draft = self.draft_mut()?;
        match kind {
            ListKind::Experience => draft.experience = editable_list::remove(&draft.experience, id),
            ListKind::Education => draft.education = editable_list::remove(&draft.education, id),
            ListKind::Certifications => {
                draft.certifications = editable_list::remove(&draft.certifications, id)
            }
        }
        Ok(())
    }
}
