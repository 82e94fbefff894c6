use std::sync::Arc;

use crate::config::Config;
use crate::screening::skills::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; read-only across requests.
    pub extractor: Arc<SkillExtractor>,
}
