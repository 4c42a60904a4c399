//! Argument model for the tainty taint-analysis tool.
//!
//! Everything here runs before any analysis does: the crate turns a raw
//! argument list into a validated [`config::ParsedConfig`] or a user-facing
//! [`cli::UsageError`]. The analysis engine, report rendering, and file
//! traversal are downstream consumers, not part of this crate.

pub mod cli;
pub mod config;
pub mod date;
pub mod report;
