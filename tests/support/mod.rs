//! Shared test scaffolding.
//!
//! Builds throwaway project directories with a `.signpost.toml` pointing at
//! a store root inside the same tempdir, so tests never touch the real
//! `~/.signpost/store` and can run in parallel.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// The canonical required field set used across tests.
pub const CANONICAL_FIELDS: &[&str] = &[
    "OWNER",
    "REPO",
    "BRANCH",
    "ZONE_NAME",
    "HOSTED_ZONE_ID",
    "WEB_REPO",
];

/// A complete profile supplying every canonical field.
pub const COMPLETE_PROFILE: &str = "\
OWNER=acme
REPO=app
BRANCH=main
ZONE_NAME=acme.com
HOSTED_ZONE_ID=Z123
WEB_REPO=app-web
";

/// A profile missing BRANCH, ZONE_NAME, HOSTED_ZONE_ID, and WEB_REPO.
pub const PARTIAL_PROFILE: &str = "\
OWNER=acme
REPO=app
";

/// A scaffolded signpost project inside a tempdir.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Create a project with the canonical required fields.
    pub fn new() -> Self {
        Self::with_required(CANONICAL_FIELDS)
    }

    /// Create a project with an explicit required field list.
    pub fn with_required(required: &[&str]) -> Self {
        let dir = TempDir::new().expect("create tempdir");

        let store_root = dir.path().join("store");
        let required_toml = required
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(", ");
        let config = format!(
            "[signpost]\nversion = \"0.1.0\"\n\n\
             [publish]\nprofiles_dir = \"env\"\nrequired = [{}]\n\n\
             [store]\nroot = \"{}\"\n",
            required_toml,
            store_root.display()
        );
        fs::write(dir.path().join(".signpost.toml"), config).expect("write config");
        fs::create_dir_all(dir.path().join("env")).expect("create profiles dir");

        Self { dir }
    }

    /// Project root directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Store root directory.
    pub fn store_root(&self) -> PathBuf {
        self.dir.path().join("store")
    }

    /// Profiles directory.
    pub fn profiles_dir(&self) -> PathBuf {
        self.dir.path().join("env")
    }

    /// Write a profile file (env/<name>.env).
    pub fn write_profile(&self, name: &str, contents: &str) {
        fs::write(
            self.profiles_dir().join(format!("{}.env", name)),
            contents,
        )
        .expect("write profile");
    }

    /// Create a signpost command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the project tempdir (keeps the default store isolated)
    /// - Current directory set to the project directory
    /// - SIGNPOST_ENVIRONMENT and color handling neutralized
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("signpost").expect("failed to find signpost binary");
        cmd.env("HOME", self.dir.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SIGNPOST_ENVIRONMENT");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Names of parameters currently in the store, sorted.
    pub fn stored_parameter_names(&self) -> Vec<String> {
        let dir = self.store_root().join("parameters");
        if !dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("read store")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
