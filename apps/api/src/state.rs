use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::profile::seed::demo_profile;
use crate::profile::session::ProfileSession;
use crate::submissions::SubmissionSink;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Seed jobs and portfolio. Never mutated after startup.
    pub catalog: Arc<Catalog>,
    /// The single demo editor profile and its edit-mode draft.
    pub profile: Arc<RwLock<ProfileSession>>,
    /// Pluggable submission sink. Default: LogSubmissionSink.
    pub submissions: Arc<dyn SubmissionSink>,
}

impl AppState {
    pub fn new(config: Config, submissions: Arc<dyn SubmissionSink>) -> Self {
        AppState {
            config,
            catalog: Arc::new(Catalog::seeded()),
            profile: Arc::new(RwLock::new(ProfileSession::new(demo_profile()))),
            submissions,
        }
    }
}
