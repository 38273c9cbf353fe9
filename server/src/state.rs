//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! reference endpoints are stateless apart from configuration, so that is
//! all it carries.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Clone is required by Axum; the config is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
