//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no pipeline logic - that belongs in [`crate::core`].

pub mod output;

use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults;
use crate::core::context::{absolutize, BuildType, InstallContext, PosixIo, Protocol};
use crate::core::pipeline;

/// VeloC installation bootstrapper
///
/// Installs the pinned VeloC component libraries, optionally stages the
/// Boost headers, then configures and builds the top-level project.
#[derive(Parser, Debug)]
#[command(name = "veloc-install")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Communication protocol between client and active backend.
    /// Only for advanced users.
    #[arg(long, value_enum, default_value_t = Protocol::SocketQueue)]
    pub protocol: Protocol,

    /// POSIX transfer method between scratch and persistent storage
    #[arg(long = "posix-io", value_enum, default_value_t = PosixIo::Direct)]
    pub posix_io: PosixIo,

    /// Use existing Boost libraries for the ipc_queue protocol
    /// (assume pre-installed)
    #[arg(long)]
    pub without_boost: bool,

    /// Use existing component libraries (assume pre-installed)
    #[arg(long)]
    pub without_deps: bool,

    /// Build debug and keep the temporary directory
    #[arg(long)]
    pub debug: bool,

    /// Temporary directory used during the install
    #[arg(long, default_value = defaults::DEFAULT_TEMP_DIR)]
    pub temp: PathBuf,

    /// Installation path prefix (typically a home directory)
    pub prefix: PathBuf,

    /// Additional cmake arguments to pass to configure
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra_cmake_args: Vec<String>,
}

impl Cli {
    /// Execute the run and return the process exit code.
    pub async fn run(self) -> i32 {
        let cwd = match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                eprintln!("{} Cannot determine current directory: {e}", output::status::ERROR);
                return 1;
            }
        };
        let ctx = self.into_context(&cwd);
        pipeline::run(&ctx).await
    }

    /// Build the immutable run context from the parsed arguments.
    fn into_context(self, cwd: &std::path::Path) -> InstallContext {
        InstallContext {
            prefix: absolutize(&self.prefix, cwd),
            temp_dir: self.temp,
            source_dir: cwd.to_path_buf(),
            build_dir: cwd.join(defaults::BUILD_DIR_NAME),
            build_type: if self.debug {
                BuildType::Debug
            } else {
                BuildType::Release
            },
            protocol: self.protocol,
            posix_io: self.posix_io,
            extra_cmake_args: self.extra_cmake_args,
            skip_deps: self.without_deps,
            skip_boost: self.without_boost,
            keep_workspace: self.debug,
        }
    }
}
