//! standup-cli - Daily standup auto-generator from git commits
//!
//! This tool scans a git repository (a local path or a public git URL) and
//! generates a formatted standup summary from recent commit history.

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

mod cli;
mod commands;

use colored::Colorize;

/// Main entry point for the standup-cli binary
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("{}", format!("Error: {err:#}").red());
        std::process::exit(1);
    }
}
