//! `quickbill-cli`
//!
//! **Responsibility:** the form surface for building one invoice at a time.
//!
//! This crate provides:
//! - An interactive, line-oriented form session
//! - One-shot preview/export from command-line flags
//! - Environment-driven configuration
//!
//! The ledger itself lives in `quickbill-invoicing`; this crate only routes
//! edits to it and hands snapshots to the renderers.

pub mod args;
pub mod config;
pub mod oneshot;
pub mod session;

pub use config::AppConfig;
pub use session::{Outcome, Session, SessionError};
