//! Request handler module
//!
//! Responsible for request routing dispatch: applies the clean-URL rewrite
//! table to every request path, then serves the resolved resource from the
//! site root.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
