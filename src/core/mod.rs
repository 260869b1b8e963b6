//! Installation pipeline
//!
//! The ordered sequence of steps that makes up a run: workspace
//! preparation, optional Boost staging, pinned dependency installs, the
//! top-level build, and cleanup. The [`pipeline`] module drives the
//! sequence and halts on the first failure.

pub mod boost;
pub mod context;
pub mod deps;
pub mod pipeline;
pub mod toplevel;
pub mod workspace;
