// Modified: 2025-09-20

//! # sync-tracker
//!
//! The abstract tracker adapter (spec.md §4.4): a `Tracker` trait, a
//! `RateLimited<T>` pacing/backoff decorator, and `GithubTracker`, a
//! concrete GitHub-Issues-shaped REST implementation.

pub mod github;
pub mod rate_limited;
pub mod trait_def;

pub use github::GithubTracker;
pub use rate_limited::RateLimited;
pub use trait_def::{CreateIssueInput, LabelSpec, Tracker, UpdateIssueInput};
