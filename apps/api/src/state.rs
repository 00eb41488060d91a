use std::sync::Arc;

use crate::config::Config;
use crate::ranking::ranker::Ranker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ranking backend. Default: TfidfRanker. The ranker is pure and
    /// stateless, so a single instance serves all requests concurrently.
    pub ranker: Arc<dyn Ranker>,
}
