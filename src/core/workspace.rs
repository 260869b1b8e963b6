//! Workspace management
//!
//! Owns the lifecycle of the temporary build workspace: validation of
//! the installation prefix, creation of the workspace, and teardown at
//! the end of the run.

use crate::core::context::InstallContext;
use crate::error::InstallError;
use crate::infra::filesystem;

/// Validate the prefix and create the temporary workspace.
///
/// Checks run before any mutation: a bad prefix or a pre-existing
/// workspace leaves the filesystem untouched. On success the workspace
/// exists and is empty.
pub fn prepare(ctx: &InstallContext) -> Result<(), InstallError> {
    if !ctx.prefix.is_dir() {
        return Err(InstallError::InvalidPrefix {
            path: ctx.prefix.clone(),
        });
    }
    if ctx.temp_dir.is_dir() {
        return Err(InstallError::WorkspaceCollision {
            path: ctx.temp_dir.clone(),
        });
    }
    filesystem::create_dir_all(&ctx.temp_dir)?;
    tracing::debug!(workspace = %ctx.temp_dir.display(), "workspace created");
    Ok(())
}

/// Remove the temporary workspace.
///
/// No-op when the run keeps the workspace for debugging. A removal
/// failure is reported as a cleanup error even after an otherwise
/// successful run.
pub fn cleanup(ctx: &InstallContext) -> Result<(), InstallError> {
    if ctx.keep_workspace {
        tracing::info!(workspace = %ctx.temp_dir.display(), "keeping workspace");
        return Ok(());
    }
    filesystem::remove_dir_all(&ctx.temp_dir)?;
    Ok(())
}
