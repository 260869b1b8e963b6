//! Pinned dependency table
//!
//! The fixed, ordered list of upstream components installed before the
//! top-level build. Declaration order is build order: later entries link
//! against earlier ones already installed into the prefix. The installer
//! executes the list as declared and does not verify the implicit graph.

/// A pinned upstream dependency built from a tagged git checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencySpec {
    /// Component name; also the clone directory name under the workspace
    pub name: &'static str,
    /// Upstream repository URL
    pub url: &'static str,
    /// Pinned release tag to clone
    pub tag: &'static str,
    /// Extra configure options specific to this component
    pub extra_options: &'static [&'static str],
}

/// Configure option shared by every pinned component
const NO_TESTS: &[&str] = &["-DENABLE_TESTS=OFF"];

/// The pinned components, in build order
pub const PINNED_DEPS: &[DependencySpec] = &[
    DependencySpec {
        name: "KVTree",
        url: "https://github.com/ECP-VeloC/KVTree.git",
        tag: "v1.4.0",
        extra_options: NO_TESTS,
    },
    DependencySpec {
        name: "AXL",
        url: "https://github.com/ECP-VeloC/AXL.git",
        tag: "v0.8.0",
        extra_options: NO_TESTS,
    },
    DependencySpec {
        name: "rankstr",
        url: "https://github.com/ECP-VeloC/rankstr.git",
        tag: "v0.3.0",
        extra_options: NO_TESTS,
    },
    DependencySpec {
        name: "shuffile",
        url: "https://github.com/ECP-VeloC/shuffile.git",
        tag: "v0.3.0",
        extra_options: NO_TESTS,
    },
    DependencySpec {
        name: "redset",
        url: "https://github.com/ECP-VeloC/redset.git",
        tag: "v0.3.0",
        extra_options: NO_TESTS,
    },
    DependencySpec {
        name: "er",
        url: "https://github.com/ECP-VeloC/er.git",
        tag: "v0.4.0",
        extra_options: NO_TESTS,
    },
];
