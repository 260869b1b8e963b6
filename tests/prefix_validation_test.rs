//! Integration tests for prefix validation
//!
//! A bad installation prefix must abort the run with exit code 1
//! before any filesystem mutation or external tool invocation.

mod common;

use common::InstallFixture;

#[test]
fn test_missing_prefix_directory_exits_one() {
    let fixture = InstallFixture::new();
    fixture.stub_git_ok();
    fixture.stub_cmake_ok();

    let missing = fixture.dir.path().join("no-such-prefix");
    let output = fixture.run(&[&missing.to_string_lossy()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("is not a valid directory"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_file_prefix_exits_one() {
    let fixture = InstallFixture::new();
    fixture.stub_git_ok();
    fixture.stub_cmake_ok();

    let file = fixture.dir.path().join("plain-file");
    std::fs::write(&file, "not a directory").unwrap();
    let output = fixture.run(&[&file.to_string_lossy()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_prefix_performs_no_writes_or_invocations() {
    let fixture = InstallFixture::new();
    fixture.stub_git_ok();
    fixture.stub_cmake_ok();

    let missing = fixture.dir.path().join("no-such-prefix");
    let output = fixture.run(&[&missing.to_string_lossy()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!fixture.workspace().exists(), "workspace must not be created");
    assert!(
        !fixture.work_dir().join("build").exists(),
        "build dir must not be touched"
    );
    assert!(fixture.read_log(&fixture.git_log()).is_empty());
    assert!(fixture.read_log(&fixture.cmake_log()).is_empty());
}

#[test]
fn test_relative_prefix_is_resolved_against_cwd() {
    let fixture = InstallFixture::new();
    fixture.stub_git_ok();
    fixture.stub_cmake_ok();

    // "install" relative to the work dir does not exist
    let output = fixture.run(&["--without-deps", "install"]);
    assert_eq!(output.status.code(), Some(1));

    // Create it and the same invocation succeeds
    std::fs::create_dir(fixture.work_dir().join("install")).unwrap();
    let output = fixture.run(&["--without-deps", "install"]);
    assert_eq!(output.status.code(), Some(0));
}
