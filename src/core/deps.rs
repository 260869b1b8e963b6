//! Pinned dependency installation
//!
//! Runs the fixed clone, configure, build-and-install cycle for each
//! entry of the pinned dependency table, in declared order. The first
//! failing component aborts the run; components already installed into
//! the prefix are not rolled back.

use std::path::Path;

use crate::config::deps::{DependencySpec, PINNED_DEPS};
use crate::core::context::InstallContext;
use crate::error::InstallError;
use crate::infra::{cmake, git};

/// Install every pinned dependency, in order.
pub fn install_all(ctx: &InstallContext) -> Result<(), InstallError> {
    for spec in PINNED_DEPS {
        install_one(ctx, spec)?;
    }
    Ok(())
}

/// Clone, configure, and build-and-install a single component.
fn install_one(ctx: &InstallContext, spec: &DependencySpec) -> Result<(), InstallError> {
    println!("Installing {}...", spec.name);
    let clone_dir = ctx.temp_dir.join(spec.name);

    let dep_err = |error: String| InstallError::DependencyBuild {
        name: spec.name.to_string(),
        error,
    };

    // The clone's own exit status is deliberately not inspected: a
    // failed clone surfaces when configure cannot find the sources.
    git::shallow_clone(spec.url, spec.tag, &clone_dir).map_err(|e| dep_err(e.to_string()))?;

    let args = configure_args(ctx, spec);
    let status =
        cmake::configure(&clone_dir, &args, Path::new(".")).map_err(|e| dep_err(e.to_string()))?;
    if !status.success() {
        return Err(dep_err(format!(
            "configure exited with status {}",
            cmake::status_code(status)
        )));
    }

    let status = cmake::build_install(&clone_dir).map_err(|e| dep_err(e.to_string()))?;
    if !status.success() {
        return Err(dep_err(format!(
            "build exited with status {}",
            cmake::status_code(status)
        )));
    }
    Ok(())
}

/// Configure arguments for one component: prefix, build type, the
/// run-wide extra arguments, then the component's own options.
fn configure_args(ctx: &InstallContext, spec: &DependencySpec) -> Vec<String> {
    let mut args = vec![
        format!("-DCMAKE_INSTALL_PREFIX={}", ctx.prefix.display()),
        format!("-DCMAKE_BUILD_TYPE={}", ctx.build_type.as_str()),
    ];
    args.extend(ctx.extra_cmake_args.iter().cloned());
    args.extend(spec.extra_options.iter().map(ToString::to_string));
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::{BuildType, PosixIo, Protocol};
    use std::path::PathBuf;

    fn context(extra: &[&str]) -> InstallContext {
        InstallContext {
            prefix: PathBuf::from("/opt/veloc"),
            temp_dir: PathBuf::from("/tmp/veloc"),
            source_dir: PathBuf::from("/src/veloc"),
            build_dir: PathBuf::from("/src/veloc/build"),
            build_type: BuildType::Debug,
            protocol: Protocol::SocketQueue,
            posix_io: PosixIo::Direct,
            extra_cmake_args: extra.iter().map(ToString::to_string).collect(),
            skip_deps: false,
            skip_boost: false,
            keep_workspace: false,
        }
    }

    #[test]
    fn test_configure_args_order() {
        let ctx = context(&["-DCMAKE_C_COMPILER=cc"]);
        let args = configure_args(&ctx, &PINNED_DEPS[0]);
        assert_eq!(
            args,
            [
                "-DCMAKE_INSTALL_PREFIX=/opt/veloc",
                "-DCMAKE_BUILD_TYPE=Debug",
                "-DCMAKE_C_COMPILER=cc",
                "-DENABLE_TESTS=OFF",
            ]
        );
    }

    #[test]
    fn test_configure_args_without_extras() {
        let ctx = context(&[]);
        let args = configure_args(&ctx, &PINNED_DEPS[1]);
        assert_eq!(
            args,
            [
                "-DCMAKE_INSTALL_PREFIX=/opt/veloc",
                "-DCMAKE_BUILD_TYPE=Debug",
                "-DENABLE_TESTS=OFF",
            ]
        );
    }
}
