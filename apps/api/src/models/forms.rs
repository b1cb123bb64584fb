use serde::{Deserialize, Deserializer, Serialize};

use crate::models::catalog::EmploymentType;
use crate::models::profile::Specialization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteService {
    Web,
    Thumbnail,
    Video,
    Multiple,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactService {
    Web,
    Thumbnail,
    Video,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "below-50k")]
    Below50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k-200k")]
    From100kTo200k,
    #[serde(rename = "200k-500k")]
    From200kTo500k,
    #[serde(rename = "above-500k")]
    Above500k,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Urgent,
    Short,
    Medium,
    Long,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralSource {
    Search,
    Social,
    Referral,
    Advertisement,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub company: Option<String>,
    pub service: QuoteService,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub budget: Option<BudgetRange>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub timeline: Option<Timeline>,
    pub description: String,
    #[serde(default, alias = "hearAbout", deserialize_with = "empty_as_none")]
    pub hear_about: Option<ReferralSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub service: ContactService,
}

/// Text half of the CV upload form. The file itself travels separately.
#[derive(Debug, Clone, Serialize)]
pub struct CvProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub portfolio: Option<String>,
    pub specialization: Specialization,
    pub availability: EmploymentType,
    pub experience: String,
    pub expected_salary: Option<String>,
    pub skills: String,
    pub education: String,
    pub location: String,
    pub relocate: bool,
    pub about: String,
}

/// Select inputs post `""` for their placeholder option; treat it as unset.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match raw {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
