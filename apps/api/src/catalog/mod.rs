// Read-only job board and agency portfolio.
// Seed data is loaded once at startup; filters derive views and never mutate it.

pub mod handlers;
pub mod jobs;
pub mod portfolio;
pub mod seed;

use crate::models::catalog::{JobPosting, PortfolioItem};

/// Immutable in-memory catalog shared by all requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub jobs: Vec<JobPosting>,
    pub portfolio: Vec<PortfolioItem>,
}

impl Catalog {
    pub fn seeded() -> Self {
        Catalog {
            jobs: seed::job_postings(),
            portfolio: seed::portfolio_items(),
        }
    }

    pub fn job(&self, id: u32) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == id)
    }
}
