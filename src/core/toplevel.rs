//! Top-level build orchestration
//!
//! Resets the local build directory, assembles the final configure
//! argument list, and drives the top-level configure and
//! build-and-install phases. A nonzero tool status becomes the run's
//! exit code rather than being re-classified.

use crate::core::context::InstallContext;
use crate::error::InstallError;
use crate::infra::cmake;

/// Configure and build the top-level project.
pub fn build(ctx: &InstallContext) -> Result<(), InstallError> {
    reset_build_dir(ctx)?;

    let args = configure_args(ctx);
    println!("CMake arguments: {}", args.join(" "));

    let status = cmake::configure(&ctx.build_dir, &args, &ctx.source_dir).map_err(|e| {
        InstallError::ToolSpawn {
            tool: "cmake",
            error: e.to_string(),
        }
    })?;
    if !status.success() {
        // The tool already printed its own diagnostics; propagate its
        // status and skip the build phase.
        return Err(InstallError::TopLevelBuild {
            code: cmake::status_code(status),
        });
    }

    let status =
        cmake::build_install(&ctx.build_dir).map_err(|e| InstallError::ToolSpawn {
            tool: "cmake",
            error: e.to_string(),
        })?;
    if !status.success() {
        return Err(InstallError::TopLevelBuild {
            code: cmake::status_code(status),
        });
    }
    Ok(())
}

/// Destroy and recreate the local build directory, regardless of prior
/// contents.
fn reset_build_dir(ctx: &InstallContext) -> Result<(), InstallError> {
    let reset_err = |e: String| InstallError::BuildDirReset {
        path: ctx.build_dir.clone(),
        error: e,
    };
    if ctx.build_dir.is_dir() {
        std::fs::remove_dir_all(&ctx.build_dir).map_err(|e| reset_err(e.to_string()))?;
    }
    std::fs::create_dir(&ctx.build_dir).map_err(|e| reset_err(e.to_string()))
}

/// The final configure argument list: prefix, build type, protocol/IO
/// selectors, then the user-supplied extras. Extras come last so that a
/// conflicting user flag wins under the tool's last-one-wins rule.
fn configure_args(ctx: &InstallContext) -> Vec<String> {
    let mut args = vec![
        format!("-DCMAKE_INSTALL_PREFIX={}", ctx.prefix.display()),
        format!("-DCMAKE_BUILD_TYPE={}", ctx.build_type.as_str()),
        format!("-DCOMM_QUEUE={}", ctx.protocol.as_str()),
        format!("-DPOSIX_IO={}", ctx.posix_io.as_str()),
    ];
    args.extend(ctx.extra_cmake_args.iter().cloned());
    args
}
