//! Path resolver module
//!
//! Implements the clean-URL rewrite decision: a pure function from request
//! path to resolved resource path. Runs once per request ahead of any file
//! or origin access, so it must stay allocation-free and constant-time over
//! the fixed table.

use super::table::RouteTable;

/// Whether the final path segment carries a file extension.
///
/// A path "has an extension" when the last `.` occurs strictly after the
/// last `/`:
/// - `/css/style.css` -> true
/// - `/edit-profile` -> false (no `.` in the final segment)
/// - `/a.b/c` -> false (the `.` precedes the last `/`)
pub fn has_extension(path: &str) -> bool {
    match (path.rfind('.'), path.rfind('/')) {
        (Some(dot), Some(slash)) => dot > slash,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

impl RouteTable {
    /// Resolve a request path to the resource path that should serve it.
    ///
    /// Paths whose final segment has an extension are static assets and pass
    /// through unchanged - the check short-circuits before any lookup, so an
    /// extensioned path is never remapped even if it appears in the table.
    /// Extension-less paths are looked up exactly; a miss passes through
    /// unchanged and the caller is responsible for the resulting 404.
    ///
    /// Never fails and never allocates. Malformed input (empty string,
    /// missing leading `/`) simply falls out as a pass-through, preserving
    /// forward progress of the surrounding request pipeline.
    pub fn resolve<'a>(&'a self, path: &'a str) -> &'a str {
        if has_extension(path) {
            return path;
        }
        self.get(path).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::super::table::CANONICAL_ROUTES;
    use super::*;

    #[test]
    fn test_has_extension_classification() {
        assert!(has_extension("/css/style.css"));
        assert!(has_extension("/js/app/login.js"));
        assert!(has_extension("/style.css"));
        assert!(has_extension("/user_login.html"));

        assert!(!has_extension("/edit-profile"));
        assert!(!has_extension("/a.b/c"));
        assert!(!has_extension("/"));
        assert!(!has_extension("/main"));
        assert!(!has_extension(""));
    }

    #[test]
    fn test_resolve_canonical_pairs() {
        let table = RouteTable::canonical();
        for (clean, resource) in CANONICAL_ROUTES {
            assert_eq!(table.resolve(clean), resource);
        }
    }

    #[test]
    fn test_resolve_root() {
        let table = RouteTable::canonical();
        assert_eq!(table.resolve("/"), "/user_login.html");
    }

    #[test]
    fn test_resolve_assets_pass_through() {
        let table = RouteTable::canonical();
        assert_eq!(table.resolve("/js/app/login.js"), "/js/app/login.js");
        assert_eq!(table.resolve("/css/style.css"), "/css/style.css");
        assert_eq!(table.resolve("/favicon.ico"), "/favicon.ico");
    }

    #[test]
    fn test_extension_check_short_circuits_lookup() {
        // Even a table entry whose key has an extension must never match:
        // the extension check runs before the lookup.
        let table = RouteTable::from_entries([("/weird.css", "/other.css")]);
        assert_eq!(table.resolve("/weird.css"), "/weird.css");
    }

    #[test]
    fn test_resolve_unmapped_clean_path() {
        let table = RouteTable::canonical();
        assert_eq!(table.resolve("/nonexistent"), "/nonexistent");
    }

    #[test]
    fn test_dot_before_last_slash_is_not_an_extension() {
        let table = RouteTable::canonical();
        assert_eq!(table.resolve("/a.b/c"), "/a.b/c");
    }

    #[test]
    fn test_resolve_is_noop_on_table_values() {
        // All resource paths carry extensions, so re-resolving an
        // already-resolved path never remaps it.
        let table = RouteTable::canonical();
        for (_, resource) in CANONICAL_ROUTES {
            assert_eq!(table.resolve(resource), resource);
        }
        assert_eq!(table.resolve("/user_login.html"), "/user_login.html");
    }

    #[test]
    fn test_malformed_input_passes_through() {
        let table = RouteTable::canonical();
        assert_eq!(table.resolve(""), "");
        assert_eq!(table.resolve("no-leading-slash"), "no-leading-slash");
    }
}
