//! Application state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::journal::{CalculationJournal, TracingJournal};

/// Application state shared across handlers.
///
/// Immutable once built; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Where calculation outcomes are reported.
    pub journal: Arc<dyn CalculationJournal>,

    /// Largest request body buffered by the request logger.
    pub max_body_bytes: usize,

    /// Name reported by the health endpoint.
    pub service_name: Arc<str>,
}

impl AppState {
    /// Create state reporting to the given journal, with default limits.
    pub fn new(journal: Arc<dyn CalculationJournal>) -> Self {
        let defaults = ServerConfig::default();
        Self {
            journal,
            max_body_bytes: defaults.max_body_bytes,
            service_name: defaults.service_name.into(),
        }
    }

    /// Create state for a running server: tracing journal, limits from config.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            journal: Arc::new(TracingJournal),
            max_body_bytes: config.max_body_bytes,
            service_name: config.service_name.as_str().into(),
        }
    }

    /// Replace the request body limit.
    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(TracingJournal))
    }
}
