//! Static file serving module
//!
//! Loads resolved resource paths from the site root, with traversal
//! protection, MIME detection, and conditional-request handling.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Favicon files probed in order when a configured favicon path is requested
const FAVICON_CANDIDATES: [&str; 2] = ["favicon.svg", "favicon.ico"];

/// Serve the resource a request path resolved to
pub async fn serve_resolved(
    ctx: &RequestContext<'_>,
    site_root: &str,
    resolved: &str,
) -> Response<Full<Bytes>> {
    match load_from_root(site_root, resolved).await {
        Some((content, content_type)) => build_static_file_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        None => http::build_404_response(),
    }
}

/// Serve the site's favicon for any configured favicon path
///
/// MPAs often ship only one favicon variant while browsers request both
/// `/favicon.ico` and `/favicon.svg`; probing the candidates answers both.
pub async fn serve_favicon(ctx: &RequestContext<'_>, site_root: &str) -> Response<Full<Bytes>> {
    for candidate in FAVICON_CANDIDATES {
        let path = format!("/{candidate}");
        if let Some((content, content_type)) = load_from_root(site_root, &path).await {
            return build_static_file_response(
                &content,
                content_type,
                ctx.if_none_match.as_deref(),
                ctx.is_head,
            );
        }
    }
    http::build_404_response()
}

/// Load a resource path from the site root
///
/// The path has already been through the rewrite table; this only maps it
/// onto the filesystem and reads it. Returns None for missing files - an
/// unmapped clean path that resolved to itself lands here and surfaces as
/// the caller's 404.
pub async fn load_from_root(site_root: &str, resource: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = sanitize_resource_path(resource)?;
    let file_path = Path::new(site_root).join(relative);

    // Containment check against the canonicalized root
    let root_canonical = match Path::new(site_root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Site root not found or inaccessible '{site_root}': {e}"
            ));
            return None;
        }
    };

    // Missing file is a routine 404, not worth a warning
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            resource,
            file_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(
        file_canonical.extension().and_then(|e| e.to_str()),
    );

    Some((content, content_type))
}

/// Turn a resource path into a safe relative filesystem path
///
/// Rejects parent-directory components outright instead of stripping them.
fn sanitize_resource_path(resource: &str) -> Option<PathBuf> {
    let trimmed = resource.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let relative = Path::new(trimmed);
    let safe = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if safe {
        Some(relative.to_path_buf())
    } else {
        None
    }
}

/// Build static file response with `ETag` support
fn build_static_file_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    // Check if client has cached version
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let body = Bytes::from(data.to_owned());
    http::build_cached_response(body, content_type, &etag, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_accepts_normal_paths() {
        assert_eq!(
            sanitize_resource_path("/user_login.html"),
            Some(PathBuf::from("user_login.html"))
        );
        assert_eq!(
            sanitize_resource_path("/js/app/login.js"),
            Some(PathBuf::from("js/app/login.js"))
        );
    }

    #[test]
    fn test_sanitize_rejects_traversal() {
        assert_eq!(sanitize_resource_path("/../etc/passwd"), None);
        assert_eq!(sanitize_resource_path("/js/../../secret"), None);
    }

    #[test]
    fn test_sanitize_rejects_empty() {
        assert_eq!(sanitize_resource_path("/"), None);
        assert_eq!(sanitize_resource_path(""), None);
    }
}
