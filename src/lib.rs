//! veloc-install - Bootstrap installer for the VeloC library
//!
//! This library drives the full VeloC installation pipeline: it prepares
//! a temporary workspace, installs a fixed list of pinned upstream
//! dependencies by shelling out to `git` and `cmake`, optionally stages
//! the Boost headers from a downloaded archive, configures and builds the
//! top-level project, and tears the workspace down again.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - The installation pipeline and its steps
//! - [`infra`] - Infrastructure layer (network, filesystem, subprocesses)
//! - [`config`] - Defaults and the pinned dependency table
//! - [`error`] - Error types and exit-code mapping

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
