use serde::{Deserialize, Serialize};

/// Creative discipline shared by job postings and portfolio work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Thumbnail,
    Video,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Thumbnail => "thumbnail",
            Category::Video => "video",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
            EmploymentType::Freelance => "freelance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub category: Category,
    pub salary: String,
    pub posted_at: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub is_remote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub image: String,
    pub client: String,
    pub description: String,
}
