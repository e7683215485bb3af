//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_manifest(manifests::BASIC);
//!     fixture.command().arg("show").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::manifests;
    pub use super::TestFixture;
}

/// Manifest contents used across tests.
pub mod manifests {
    /// A manifest as left by the first reduction steps.
    pub const BASIC: &str = "\
name: a1795
obsid: 493
redshift: 0.0622
evt2: repro/acisf00493_repro_evt2.fits
asol:
- repro/pcadf00493_001N001_asol1.fits
- repro/pcadf00493_002N001_asol1.fits
chips: [0, 1, 2, 3]
clean: true
";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "evt2: [unclosed\n";
}

/// A temporary observation directory, optionally holding a manifest.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `manifest.yaml` with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.with_file("manifest.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Create a (possibly nested) directory.
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.temp_dir.path().join("manifest.yaml")
    }

    /// Read the manifest file back.
    pub fn manifest_text(&self) -> String {
        std::fs::read_to_string(self.manifest_path()).expect("Failed to read manifest")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        self.command_in("")
    }

    /// Create a command running in a subdirectory of the fixture.
    pub fn command_in(&self, subdir: &str) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("acis-manifest");
        cmd.current_dir(self.path().join(subdir))
            .env_remove("ACIS_MANIFEST_FILE")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
