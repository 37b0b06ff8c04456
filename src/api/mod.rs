//! Task API Client
//!
//! HTTP bindings to the remote task service, organized by domain.

mod client;
mod error;
mod task;
mod user;
#[cfg(test)]
pub(crate) mod fake;

// Re-export all public items
pub use client::*;
pub use error::*;
pub use task::*;
