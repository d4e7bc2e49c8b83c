//! git-ct-dist - prebuilt binary distribution for git-ct
//!
//! Resolves the host platform to a published release archive, caches the
//! extracted executable and launches it with exit-code passthrough.

pub mod artifact;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod manifest;
pub mod platform;
pub mod ui;

pub use error::{DistError, DistResult};
