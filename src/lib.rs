//! standup-cli - Daily standup auto-generator from git commits
//!
//! This library provides the core functionality: collecting recent commits
//! from a local or remote repository, categorizing them by message prefix,
//! and formatting them into a standup summary.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod clipboard;
pub mod config;
pub mod git;
pub mod models;
pub mod output;
pub mod paths;
pub mod summary;
