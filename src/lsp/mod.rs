//! LSP Protocol Implementation
//!
//! Editor front end: keeps open documents and publishes the checker's
//! diagnostics on every change.

pub mod backend;
pub mod document;
pub mod handlers;
pub mod server;

pub use backend::Backend;
