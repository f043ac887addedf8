use std::sync::Arc;

use crate::config::Config;
use crate::extraction::DocumentExtractor;
use crate::similarity::strategy::StrategyRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Available similarity strategies plus the configured default.
    pub strategies: StrategyRegistry,
    /// Pluggable document extractor. Default: PdfExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}
