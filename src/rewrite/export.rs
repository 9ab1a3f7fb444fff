//! Rewrite table export module
//!
//! Renders the route table as the shared configuration artifacts consumed
//! by external call sites (the `serve`-style dev tooling and the CDN deploy
//! pipeline), so the mapping is declared once and generated everywhere else.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use super::table::RouteTable;

#[derive(Serialize)]
struct ServeConfig<'a> {
    rewrites: Vec<ServeRewrite<'a>>,
}

#[derive(Serialize)]
struct ServeRewrite<'a> {
    source: &'a str,
    destination: &'a str,
}

/// Render the table as a `serve.json`-shaped document.
///
/// Entries are sorted by source path so regenerating the artifact produces
/// a stable diff.
pub fn to_serve_json(table: &RouteTable) -> String {
    let cfg = ServeConfig {
        rewrites: table
            .sorted_entries()
            .into_iter()
            .map(|(source, destination)| ServeRewrite {
                source,
                destination,
            })
            .collect(),
    };
    // Serialization of this shape cannot fail: string keys, string values.
    serde_json::to_string_pretty(&cfg).unwrap_or_default()
}

/// Render the table as a `[rewrites]` TOML fragment for TOML-based tooling.
pub fn to_toml_fragment(table: &RouteTable) -> Result<String, toml::ser::Error> {
    let mut rewrites = BTreeMap::new();
    for (source, destination) in table.sorted_entries() {
        rewrites.insert(source.to_string(), destination.to_string());
    }

    let mut root = BTreeMap::new();
    root.insert("rewrites".to_string(), rewrites);
    toml::to_string_pretty(&root)
}

/// Write the `serve.json` artifact to disk, creating parent directories.
pub fn write_serve_json(table: &RouteTable, path: &str) -> io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut content = to_serve_json(table);
    content.push('\n');
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_json_shape() {
        let table = RouteTable::from_entries([("/login", "/user_login.html")]);
        let json = to_serve_json(&table);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed["rewrites"][0]["source"], "/login");
        assert_eq!(parsed["rewrites"][0]["destination"], "/user_login.html");
    }

    #[test]
    fn test_serve_json_covers_canonical_table() {
        let table = RouteTable::canonical();
        let parsed: serde_json::Value =
            serde_json::from_str(&to_serve_json(&table)).expect("valid json");
        let rewrites = parsed["rewrites"].as_array().expect("rewrites array");
        assert_eq!(rewrites.len(), 9);
        // Sorted by source: "/" first.
        assert_eq!(rewrites[0]["source"], "/");
        assert_eq!(rewrites[0]["destination"], "/user_login.html");
    }

    #[test]
    fn test_toml_fragment() {
        let table = RouteTable::from_entries([("/main", "/post_list.html")]);
        let fragment = to_toml_fragment(&table).expect("serializable");
        assert!(fragment.contains("[rewrites]"));
        assert!(fragment.contains("\"/main\" = \"/post_list.html\""));
    }
}
