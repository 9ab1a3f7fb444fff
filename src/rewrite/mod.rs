//! Clean-URL rewrite module
//!
//! Single source of truth for the clean-URL -> resource-path mapping:
//! - Immutable route table with exact-match lookup
//! - Pure path resolver with extension pass-through
//! - Navigation-layer resolver (query-string preserving)
//! - Edge viewer-request hook
//! - Shared artifact export for external call sites

pub mod edge;
pub mod export;
pub mod nav;
mod resolver;
mod table;

pub use nav::{NavMode, NavResolver};
pub use resolver::has_extension;
pub use table::RouteTable;
