//! cleanserve
//!
//! Clean-URL rewrite core for an S3/CDN-hosted multi-page application,
//! plus the local static file server that consumes the same rewrite table
//! so development behavior matches the production edge bit-for-bit.
//!
//! The `rewrite` module is the heart of the crate: an immutable route
//! table, a pure path resolver, the navigation-layer resolver, the edge
//! viewer-request hook, and export of the shared rewrite artifact. The
//! remaining modules are the serving machinery around it.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod rewrite;
pub mod server;
