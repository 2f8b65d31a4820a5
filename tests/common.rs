//! Test utilities & fixtures.

use std::path::{Path, PathBuf};

/// Directory holding static gear files used by integration tests.
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp dir so tests may rewrite it.
/// Returns the temp dir (keep it alive) and the copied file path.
#[allow(dead_code)]
pub fn writable_fixture(name: &str) -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dest = tmp.path().join(name);
    std::fs::copy(fixture_root().join(name), &dest).expect("copy fixture");
    (tmp, dest)
}
