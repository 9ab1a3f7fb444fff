//! Navigation resolver module
//!
//! Resolves app-generated navigation paths so links behave identically
//! whether the site is served by the production edge or by the local dev
//! server. The environment is an explicit construction-time flag rather
//! than a runtime host-name sniff, so both branches are testable.

use super::table::RouteTable;

/// Which deployment the navigation layer is targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Local development: the dev server applies the rewrite itself, so
    /// clean paths pass through unchanged.
    Local,
    /// Production-style deployment: the navigation layer applies the
    /// rewrite table, mirroring the edge behavior.
    Deployed,
}

impl NavMode {
    /// Classify a host name the way the original front-end did: loopback
    /// aliases select local mode, anything else is a deployment.
    pub fn detect(hostname: &str) -> Self {
        match hostname {
            "localhost" | "127.0.0.1" | "[::1]" => Self::Local,
            _ => Self::Deployed,
        }
    }
}

/// Resolves navigable paths for link construction.
#[derive(Debug, Clone)]
pub struct NavResolver {
    mode: NavMode,
    table: RouteTable,
}

impl NavResolver {
    /// Create a resolver over the canonical table.
    pub fn new(mode: NavMode) -> Self {
        Self::with_table(mode, RouteTable::canonical())
    }

    /// Create a resolver over a custom table.
    pub const fn with_table(mode: NavMode, table: RouteTable) -> Self {
        Self { mode, table }
    }

    /// The mode this resolver was constructed with.
    pub const fn mode(&self) -> NavMode {
        self.mode
    }

    /// Resolve a navigable path, preserving any query string verbatim.
    ///
    /// The query string (everything from the first `?`) is detached before
    /// resolution and reattached unchanged afterwards, on both branches.
    pub fn resolve_nav_path(&self, path: &str) -> String {
        let (base, query) = match path.find('?') {
            Some(idx) => path.split_at(idx),
            None => (path, ""),
        };

        match self.mode {
            NavMode::Local => path.to_string(),
            NavMode::Deployed => format!("{}{}", self.table.resolve(base), query),
        }
    }
}
