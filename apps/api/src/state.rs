use std::sync::Arc;

use crate::config::Config;
use crate::summary::builders::register_builtin_builders;
use crate::summary::SummaryRegistry;
use crate::wizard::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Frozen after startup; builders are registered before the router is built.
    pub registry: Arc<SummaryRegistry>,
    pub sessions: SessionStore,
}

impl AppState {
    /// State with the built-in summary builders and an empty session store.
    pub fn new(config: Config) -> Self {
        let mut registry = SummaryRegistry::new();
        register_builtin_builders(&mut registry);
        Self::with_registry(config, registry)
    }

    pub fn with_registry(config: Config, registry: SummaryRegistry) -> Self {
        Self {
            config,
            registry: Arc::new(registry),
            sessions: SessionStore::new(),
        }
    }
}
