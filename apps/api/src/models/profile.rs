use serde::{Deserialize, Serialize};

/// Identifier of a record inside one of the profile's editable lists.
pub type RecordId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialization {
    Web,
    Thumbnail,
    Video,
    Multiple,
}

impl Specialization {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "web" => Some(Specialization::Web),
            "thumbnail" => Some(Specialization::Thumbnail),
            "video" => Some(Specialization::Video),
            "multiple" => Some(Specialization::Multiple),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: RecordId,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: RecordId,
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub id: RecordId,
    pub name: String,
    pub issuer: String,
    pub year: String,
}

/// Showcase piece on an editor's profile. Not editable through the draft API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPiece {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub about: String,
    pub specialization: Specialization,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub portfolio: Vec<PortfolioPiece>,
    pub certifications: Vec<CertificationEntry>,
}
