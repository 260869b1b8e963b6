//! Configuration and constants
//!
//! Defaults for the installer plus the pinned dependency table.

pub mod defaults;
pub mod deps;
