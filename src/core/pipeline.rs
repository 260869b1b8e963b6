//! Run driver
//!
//! Sequences the pipeline steps, halts on the first failure, always
//! runs workspace cleanup, and computes the final exit code.

use crate::cli::output::status;
use crate::core::context::InstallContext;
use crate::core::{boost, deps, toplevel, workspace};
use crate::error::InstallError;

/// Execute a full installation run and return the process exit code.
pub async fn run(ctx: &InstallContext) -> i32 {
    preflight(ctx);

    if let Err(e) = workspace::prepare(ctx) {
        eprintln!("{} {e}", status::ERROR);
        return e.exit_code();
    }

    println!("Installing VeloC in {}...", ctx.prefix.display());

    let outcome = run_steps(ctx).await;
    // Cleanup runs on every exit path once the workspace exists
    let cleanup = workspace::cleanup(ctx);

    let code = match &outcome {
        Ok(()) => {
            println!("{} Installation successful!", status::SUCCESS);
            0
        }
        Err(e) => {
            // The build tool prints its own diagnostics for a top-level
            // failure; everything else gets one human-readable line.
            if !matches!(e, InstallError::TopLevelBuild { .. }) {
                eprintln!("{} {e}", status::ERROR);
            }
            println!("{} Installation failed!", status::ERROR);
            e.exit_code()
        }
    };

    match cleanup {
        Ok(()) => code,
        Err(e) => {
            eprintln!("{} {e}", status::ERROR);
            // A cleanup failure overrides success but never masks the
            // run's own failure status.
            if code == 0 {
                e.exit_code()
            } else {
                code
            }
        }
    }
}

/// The fatal portion of the run: boost staging, dependency installs,
/// top-level build. The first error short-circuits.
async fn run_steps(ctx: &InstallContext) -> Result<(), InstallError> {
    if ctx.needs_boost() {
        boost::stage(ctx).await?;
    }
    if !ctx.skip_deps {
        deps::install_all(ctx)?;
    }
    toplevel::build(ctx)
}

/// Warn about missing external tools before any mutation. Warn-only:
/// the run proceeds and fails at the step that needs the tool.
fn preflight(ctx: &InstallContext) {
    if which::which("cmake").is_err() {
        tracing::warn!("cmake not found on PATH; the build steps will fail");
    }
    if !ctx.skip_deps && which::which("git").is_err() {
        tracing::warn!("git not found on PATH; dependency clones will fail");
    }
}
