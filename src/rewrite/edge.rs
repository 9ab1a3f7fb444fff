//! Edge hook module
//!
//! The viewer-request rewrite applied at the CDN's request-interception
//! layer, expressed over the edge event's request descriptor. Runs before
//! origin dispatch on every request, so it is pure and infallible: no I/O,
//! no allocation beyond the returned descriptor, no failure path.

use serde::{Deserialize, Serialize};

use super::table::RouteTable;

/// The request descriptor exposed by the viewer-request event.
///
/// `uri` is the bare path - the edge runtime never includes the query
/// string in it. The query string is carried separately and forwarded to
/// the origin unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerRequest {
    /// Request path, no query component.
    pub uri: String,
    /// Raw query string, forwarded verbatim downstream.
    #[serde(default)]
    pub querystring: String,
}

/// Rewrite a viewer request's `uri` per the route table.
///
/// `querystring` and every other field of the event are left untouched.
pub fn rewrite_viewer_request(table: &RouteTable, mut request: ViewerRequest) -> ViewerRequest {
    request.uri = table.resolve(&request.uri).to_string();
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str, querystring: &str) -> ViewerRequest {
        ViewerRequest {
            uri: uri.to_string(),
            querystring: querystring.to_string(),
        }
    }

    #[test]
    fn test_clean_path_is_rewritten() {
        let table = RouteTable::canonical();
        let out = rewrite_viewer_request(&table, request("/signup", ""));
        assert_eq!(out.uri, "/user_signup.html");
    }

    #[test]
    fn test_querystring_is_untouched() {
        let table = RouteTable::canonical();
        let out = rewrite_viewer_request(&table, request("/detail", "id=42"));
        assert_eq!(out.uri, "/post_detail.html");
        assert_eq!(out.querystring, "id=42");

        let out = rewrite_viewer_request(&table, request("/js/app/login.js", "v=3"));
        assert_eq!(out.uri, "/js/app/login.js");
        assert_eq!(out.querystring, "v=3");
    }

    #[test]
    fn test_unmapped_path_passes_through() {
        let table = RouteTable::canonical();
        let out = rewrite_viewer_request(&table, request("/nonexistent", ""));
        assert_eq!(out.uri, "/nonexistent");
    }

    #[test]
    fn test_event_shape_round_trip() {
        let json = r#"{"uri":"/login","querystring":"redirect=/x"}"#;
        let req: ViewerRequest = serde_json::from_str(json).expect("valid event shape");
        assert_eq!(req.uri, "/login");
        assert_eq!(req.querystring, "redirect=/x");

        let table = RouteTable::canonical();
        let out = rewrite_viewer_request(&table, req);
        let back = serde_json::to_string(&out).expect("serializable");
        assert_eq!(back, r#"{"uri":"/user_login.html","querystring":"redirect=/x"}"#);
    }

    #[test]
    fn test_missing_querystring_defaults_empty() {
        let req: ViewerRequest =
            serde_json::from_str(r#"{"uri":"/main"}"#).expect("querystring optional");
        assert_eq!(req.querystring, "");
    }
}
