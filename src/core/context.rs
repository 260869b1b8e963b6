//! Run configuration
//!
//! [`InstallContext`] is constructed once from the CLI arguments and
//! threaded read-only through every pipeline step.

use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// CMake build type for dependencies and the top-level project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    /// Optimized build (default)
    Release,
    /// Debug build, selected by `--debug`
    Debug,
}

impl BuildType {
    /// Value passed as `-DCMAKE_BUILD_TYPE=`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Release => "Release",
            Self::Debug => "Debug",
        }
    }
}

/// Communication protocol between client and active backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Protocol {
    /// Socket-based queue (default)
    #[value(name = "socket_queue")]
    SocketQueue,
    /// Shared-memory queue; requires the Boost headers
    #[value(name = "ipc_queue")]
    IpcQueue,
}

impl Protocol {
    /// Value passed as `-DCOMM_QUEUE=`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SocketQueue => "socket_queue",
            Self::IpcQueue => "ipc_queue",
        }
    }
}

/// POSIX transfer method between scratch and persistent storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PosixIo {
    /// Direct IO (default)
    #[value(name = "direct")]
    Direct,
    /// Plain read/write IO
    #[value(name = "rw")]
    Rw,
}

impl PosixIo {
    /// Value passed as `-DPOSIX_IO=`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Rw => "rw",
        }
    }
}

/// Immutable configuration for one installation run
#[derive(Debug, Clone)]
pub struct InstallContext {
    /// Absolute installation prefix; must be an existing directory
    pub prefix: PathBuf,
    /// Temporary workspace; must not exist when the run starts
    pub temp_dir: PathBuf,
    /// Directory holding the top-level project sources (the cwd)
    pub source_dir: PathBuf,
    /// Local build directory, destructively reset before configure
    pub build_dir: PathBuf,
    /// Build type for every configure invocation
    pub build_type: BuildType,
    /// Communication protocol selector
    pub protocol: Protocol,
    /// POSIX IO mode selector
    pub posix_io: PosixIo,
    /// User-supplied arguments appended to every configure invocation
    pub extra_cmake_args: Vec<String>,
    /// Skip the pinned dependency installs
    pub skip_deps: bool,
    /// Skip the Boost header staging
    pub skip_boost: bool,
    /// Leave the workspace on disk after the run
    pub keep_workspace: bool,
}

impl InstallContext {
    /// Whether this run needs the Boost headers staged into the prefix
    pub fn needs_boost(&self) -> bool {
        self.protocol == Protocol::IpcQueue && !self.skip_boost
    }
}

/// Resolve a possibly-relative path against `cwd` without touching the
/// filesystem.
///
/// Unlike canonicalization this works for paths that do not exist yet,
/// which the prefix check depends on: a bad prefix must be rejected
/// before any filesystem mutation.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
