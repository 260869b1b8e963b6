//! CMake invocation
//!
//! Drives the external build tool's configure and build-and-install
//! phases. Argument lists are assembled by the callers; this module only
//! spawns the tool and reports its status.

use std::path::Path;
use std::process::{Command, ExitStatus};

/// Run the configure phase inside `dir` with the assembled `args`,
/// pointing the tool at `source` for the project sources.
pub fn configure(dir: &Path, args: &[String], source: &Path) -> std::io::Result<ExitStatus> {
    tracing::debug!(dir = %dir.display(), ?args, "running configure");
    Command::new("cmake")
        .args(args)
        .arg(source)
        .current_dir(dir)
        .status()
}

/// Run the build-and-install phase for the configured tree at
/// `build_dir`.
pub fn build_install(build_dir: &Path) -> std::io::Result<ExitStatus> {
    tracing::debug!(build_dir = %build_dir.display(), "running build and install");
    Command::new("cmake")
        .arg("--build")
        .arg(build_dir)
        .args(["--target", "install"])
        .status()
}

/// Exit code of a finished tool invocation.
///
/// A status without a code (killed by signal) is reported as 1.
pub fn status_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
