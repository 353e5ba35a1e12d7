//! LSP Protocol Implementation
//!
//! Host integration: document events in, published diagnostics out.

pub mod backend;
pub mod document;
pub mod handlers;
pub mod server;

pub use backend::Backend;
