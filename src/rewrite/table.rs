//! Route table module
//!
//! Defines the immutable clean-path -> resource-path mapping shared by the
//! dev server, the navigation resolver, and the edge hook.

use std::collections::HashMap;

/// The canonical rewrite table for the MPA deployment.
///
/// Keys are clean paths (leading `/`, no query component); values are the
/// concrete HTML files they resolve to. Every value is expected to exist as
/// a static resource at deploy time; that contract is not checked at runtime.
pub const CANONICAL_ROUTES: [(&str, &str); 9] = [
    ("/", "/user_login.html"),
    ("/main", "/post_list.html"),
    ("/login", "/user_login.html"),
    ("/signup", "/user_signup.html"),
    ("/write", "/post_write.html"),
    ("/detail", "/post_detail.html"),
    ("/edit", "/post_edit.html"),
    ("/password", "/user_password.html"),
    ("/edit-profile", "/user_edit.html"),
];

/// Immutable exact-match route table.
///
/// Constructed once at startup and never mutated afterwards. Lookups are
/// exact: no trailing-slash normalization, no case folding, no prefix
/// matching. `/login/` does not match `/login` - this is a deliberate
/// predictability contract, not an oversight.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Build the canonical table used in production.
    pub fn canonical() -> Self {
        Self::from_entries(CANONICAL_ROUTES)
    }

    /// Build a table from arbitrary entries (primarily for tests and tools).
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            routes: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a clean path, returning the mapped resource path if present.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.routes.get(path).map(String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Entries sorted by clean path, for deterministic export.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .routes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_table_contents() {
        let table = RouteTable::canonical();
        assert_eq!(table.len(), 9);
        for (clean, resource) in CANONICAL_ROUTES {
            assert_eq!(table.get(clean), Some(resource));
        }
    }

    #[test]
    fn test_exact_match_only() {
        let table = RouteTable::canonical();
        assert_eq!(table.get("/login/"), None);
        assert_eq!(table.get("/Login"), None);
        assert_eq!(table.get("/login/extra"), None);
    }

    #[test]
    fn test_values_are_not_keys() {
        // Resource paths must never appear as clean paths, otherwise a
        // second resolve pass could remap an already-resolved path.
        let table = RouteTable::canonical();
        for (_, resource) in CANONICAL_ROUTES {
            assert_eq!(table.get(resource), None);
        }
    }

    #[test]
    fn test_sorted_entries_deterministic() {
        let table = RouteTable::canonical();
        let entries = table.sorted_entries();
        assert_eq!(entries.len(), 9);
        assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(entries[0], ("/", "/user_login.html"));
    }
}
