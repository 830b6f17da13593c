//! Shared application state.

use std::sync::Arc;

use crate::classifier::GestureModel;

use super::ServerConfig;

/// State shared across request handlers.
///
/// Constructed once at startup and never mutated afterwards, so handlers
/// read it through a plain `Arc` without locks. A failed model load is
/// recorded as `None` and never retried.
pub struct AppState {
    pub config: ServerConfig,
    pub model: Option<Arc<dyn GestureModel>>,
}

impl AppState {
    pub fn new(config: ServerConfig, model: Option<Arc<dyn GestureModel>>) -> Self {
        Self { config, model }
    }
}
