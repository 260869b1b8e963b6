//! Error types for veloc-install
//!
//! Domain-specific error types using thiserror. Every fatal condition
//! maps to a fixed process exit code via [`InstallError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Network and asset staging errors (Boost header fetch)
#[derive(Error, Debug)]
pub enum FetchError {
    /// Listing page or archive could not be retrieved
    #[error("network error for '{url}': {error}")]
    Network { url: String, error: String },

    /// Listing page contained no matching archive link
    #[error("no downloadable archive link found on '{url}'")]
    NoArchiveLink { url: String },

    /// IO error while writing the download
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },

    /// Archive extraction failed
    #[error("failed to extract '{archive}': {error}")]
    Extract { archive: PathBuf, error: String },

    /// Moving the extracted headers into the prefix failed
    #[error("failed to relocate '{from}' to '{to}': {error}")]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to move a directory tree
    #[error("Failed to move '{from}' to '{to}': {error}")]
    MoveDir {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },
}

/// Top-level installer error
///
/// Each variant carries enough context for the single user-visible
/// failure line, and maps to the documented process exit code.
#[derive(Error, Debug)]
pub enum InstallError {
    /// Installation prefix is not an existing directory
    #[error("Installation prefix {} is not a valid directory!", path.display())]
    InvalidPrefix { path: PathBuf },

    /// Temporary workspace already exists from a previous run
    #[error(
        "Installation temporary directory {} already exists, \
         please remove and/or specify a different one!",
        path.display()
    )]
    WorkspaceCollision { path: PathBuf },

    /// Temporary workspace could not be created
    #[error("Cannot create temporary directory {}!", path.display())]
    WorkspaceCreate { path: PathBuf, error: String },

    /// Local build directory could not be reset
    #[error("Cannot create build directory {}!", path.display())]
    BuildDirReset { path: PathBuf, error: String },

    /// A pinned dependency failed to configure or build
    #[error("Error installing dependency {name}: {error}!")]
    DependencyBuild { name: String, error: String },

    /// Boost header staging failed; user-actionable guidance included
    #[error(
        "Error installing Boost: {0}! Try to install it manually and use \
         --without-boost. Alternatively, use --protocol=socket_queue"
    )]
    BoostFetch(#[from] FetchError),

    /// The build tool could not be spawned at all
    #[error("Failed to invoke '{tool}': {error}")]
    ToolSpawn { tool: &'static str, error: String },

    /// Top-level configure or build returned a nonzero status
    #[error("build tool exited with status {code}")]
    TopLevelBuild { code: i32 },

    /// Workspace teardown failed after the run finished
    #[error("Cannot cleanup temporary directory {}!", path.display())]
    Cleanup { path: PathBuf, error: String },
}

impl InstallError {
    /// Map this error to the documented process exit code.
    ///
    /// Top-level build failures propagate the build tool's own status
    /// instead of being re-classified.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPrefix { .. } | Self::ToolSpawn { .. } => 1,
            Self::WorkspaceCollision { .. } | Self::BuildDirReset { .. } => 2,
            Self::WorkspaceCreate { .. } | Self::BoostFetch(_) => 3,
            Self::DependencyBuild { .. } | Self::Cleanup { .. } => 4,
            Self::TopLevelBuild { code } => *code,
        }
    }
}

impl From<FilesystemError> for InstallError {
    fn from(err: FilesystemError) -> Self {
        match err {
            FilesystemError::CreateDir { path, error } => Self::WorkspaceCreate { path, error },
            FilesystemError::RemoveDir { path, error } => Self::Cleanup { path, error },
            FilesystemError::MoveDir { from, to, error } => {
                Self::BoostFetch(FetchError::Relocate { from, to, error })
            }
        }
    }
}
