//! Dirnode: Content-Addressed Directory Trees
//!
//! Immutable directory nodes whose hash identifies their contents. Two
//! structurally identical trees always produce the same hash and the same
//! canonical string, no matter the order their children were supplied in.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;
