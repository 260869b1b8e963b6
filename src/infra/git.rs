//! Git operations
//!
//! Shallow, tag-pinned clones driven through the `git` command-line
//! client. The client's command-line contract is assumed, not wrapped.

use std::path::Path;
use std::process::{Command, ExitStatus};

/// Perform a shallow (depth-1) clone of `url` at the pinned `tag` into
/// `dest`.
///
/// Returns the client's exit status; callers decide whether to inspect
/// it. A spawn failure (client not on `PATH`) is an `Err`.
pub fn shallow_clone(url: &str, tag: &str, dest: &Path) -> std::io::Result<ExitStatus> {
    tracing::debug!(url, tag, dest = %dest.display(), "cloning dependency");
    Command::new("git")
        .arg("clone")
        .args(["-b", tag])
        .args(["--depth", "1"])
        .arg(url)
        .arg(dest)
        .status()
}

/// Derive a component name from a repository URL.
///
/// Takes the URL basename up to the first dot, so
/// `https://github.com/ECP-VeloC/KVTree.git` yields `KVTree`.
pub fn name_from_url(url: &str) -> &str {
    let basename = url.rsplit('/').next().unwrap_or(url);
    basename.split('.').next().unwrap_or(basename)
}
