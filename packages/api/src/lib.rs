//! Stand-in collaborators for the SEO Scribe front end: shared domain types,
//! mock catalogs, form validation and the simulated endpoints' results.
//!
//! Nothing here performs I/O. The UI waits out a configured latency and then
//! calls into these functions, so every result is deterministic and testable.

pub mod config;
pub mod format;
pub mod types;

pub mod auth;
pub mod connections;
pub mod content;
pub mod credits;
pub mod dashboard;
pub mod pricing;

#[cfg(test)]
mod types_tests;

pub use auth::{request_password_reset, signin, signup, AuthError, Registration};
pub use connections::{ConnectionBook, ConnectionError};
pub use content::{generate_content, save_draft, ContentError, GeneratedContent, GENERATION_COST};
pub use dashboard::current_user;
