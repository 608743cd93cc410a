//! Data models for standup-cli
//!
//! Core abstractions:
//! - `CommitInfo`: one commit as seen by the standup generator
//! - `Category`: the standup bucket a commit message falls into

mod category;
mod commit;

pub use category::{Category, extract_prefix};
pub use commit::CommitInfo;
