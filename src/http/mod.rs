//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the request handler: MIME detection,
//! conditional-request cache handling, and response builders.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_cached_response, build_options_response,
};
