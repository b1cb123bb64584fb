//! Job Filter — narrows job postings by free-text search and three selectors.
//!
//! All active predicates are ANDed. Every selector accepts the `"all"`
//! sentinel (or an empty/absent value) meaning "no constraint". Values that
//! name no known category or type simply match nothing.

use serde::Deserialize;

use crate::models::catalog::JobPosting;

pub const ALL: &str = "all";
pub const REMOTE: &str = "remote";

/// Current input of the job board's filter sidebar.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobCriteria {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl JobCriteria {
    pub fn matches(&self, job: &JobPosting) -> bool {
        self.search_matches(job)
            && selector_matches(self.category.as_deref(), job.category.as_str())
            && selector_matches(self.job_type.as_deref(), job.employment_type.as_str())
            && self.location_matches(job)
    }

    fn search_matches(&self, job: &JobPosting) -> bool {
        let needle = match self.search.as_deref() {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => return true,
        };
        [&job.title, &job.company, &job.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn location_matches(&self, job: &JobPosting) -> bool {
        match active_selector(self.location.as_deref()) {
            None => true,
            Some(REMOTE) => job.is_remote,
            Some(place) => job
                .location
                .to_lowercase()
                .contains(&place.to_lowercase()),
        }
    }
}

/// Returns the selector value, or `None` when it carries no constraint.
fn active_selector(selector: Option<&str>) -> Option<&str> {
    match selector {
        None | Some("") | Some(ALL) => None,
        Some(value) => Some(value),
    }
}

fn selector_matches(selector: Option<&str>, actual: &str) -> bool {
    active_selector(selector).map_or(true, |wanted| wanted == actual)
}

/// Stable filter: matching postings keep their input order.
pub fn filter_jobs(jobs: &[JobPosting], criteria: &JobCriteria) -> Vec<JobPosting> {
    jobs.iter()
        .filter(|job| criteria.matches(job))
        .cloned()
        .collect()
}
