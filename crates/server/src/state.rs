use crate::config::ServerConfig;
use lostfound::Registry;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Reported items, alive for as long as the server state is
    pub registry: Arc<Registry>,

    /// When this state was built, for uptime reporting
    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state with an empty registry
    pub fn new(config: ServerConfig) -> Self {
        Self::with_registry(config, Arc::new(Registry::new()))
    }

    /// Create server state around an existing registry
    pub fn with_registry(config: ServerConfig, registry: Arc<Registry>) -> Self {
        Self {
            config: Arc::new(config),
            registry,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
