//! Infrastructure layer
//!
//! Subprocess invocation, network access, and filesystem operations.
//! No pipeline logic lives here - that belongs in [`crate::core`].

pub mod cmake;
pub mod download;
pub mod extract;
pub mod filesystem;
pub mod git;
