//! Shared helpers for the catalog crate.

/// `tracing` target for catalog and membership events.
pub const LOG_TARGET: &str = "libris::catalog";
