// Application state module
// Immutable per-process state shared by every connection

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::rewrite::RouteTable;

/// Application state
///
/// Everything here is read-only after startup: the rewrite table is fixed
/// configuration and the config file is loaded once, so concurrent requests
/// need no synchronization beyond the cached flag.
pub struct AppState {
    pub config: Config,
    /// The canonical clean-URL rewrite table, applied to every request
    pub table: RouteTable,
    /// Cached access-log flag for lock-free reads on the hot path
    pub cached_access_log: Arc<AtomicBool>,
}

impl AppState {
    /// Create `AppState` over the canonical rewrite table
    pub fn new(config: &Config) -> Self {
        let cached_access_log = Arc::new(AtomicBool::new(config.logging.access_log));
        Self {
            config: config.clone(),
            table: RouteTable::canonical(),
            cached_access_log,
        }
    }
}
