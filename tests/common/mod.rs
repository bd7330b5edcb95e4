//! Shared harness for bootstrap CLI and library tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const README: &str = "# React Starter\n\nA React + Vite starter template.\n";

pub const WORKFLOW: &str = "\
name: CI
on: [push]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Install dependencies
        run: npm ci
      - run: npm test
";

const PKG_GET_DEFAULT: &str =
    r#"{"name": "react-starter", "description": "A React + Vite starter template"}"#;

/// A starter project in a temp directory plus a fake `npm` on `PATH`.
///
/// The fake logs every invocation, answers `pkg get` from `pkg-get.json`
/// and fails `pkg get`/`pkg set` when `npm-fail-get`/`npm-fail-set` exist.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    original_path: Option<OsString>,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        let ctx = Self { root, work_dir, bin_dir, original_path: env::var_os("PATH") };
        ctx.install_fake_npm();
        ctx.set_pkg_get(PKG_GET_DEFAULT);
        ctx
    }

    /// A context seeded with the template's README and CI workflow.
    pub fn starter() -> Self {
        let ctx = Self::new();
        ctx.write("README.md", README);
        ctx.write(".github/workflows/ci.yml", WORKFLOW);
        ctx
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Command for the compiled `bootstrap` binary inside the work dir.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("bootstrap").expect("Failed to locate bootstrap binary");
        cmd.current_dir(&self.work_dir).env("PATH", self.search_path());
        cmd
    }

    /// Run `action` with the work dir as cwd and the fake `npm` on `PATH`.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        unsafe {
            env::set_var("PATH", self.search_path());
        }
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        self.restore_path();
        result
    }

    pub fn write(&self, path: &str, content: &str) {
        let full = self.work_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(full, content).expect("Failed to write fixture");
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.work_dir.join(path))
            .unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.work_dir.join(path).exists()
    }

    /// JSON printed by `npm pkg get`.
    pub fn set_pkg_get(&self, json: &str) {
        fs::write(self.root.path().join("pkg-get.json"), json).expect("Failed to write pkg-get");
    }

    pub fn fail_npm_get(&self) {
        fs::write(self.root.path().join("npm-fail-get"), "").expect("Failed to write marker");
    }

    pub fn fail_npm_set(&self) {
        fs::write(self.root.path().join("npm-fail-set"), "").expect("Failed to write marker");
    }

    /// One line per `npm` invocation, arguments joined by spaces.
    pub fn npm_log(&self) -> String {
        fs::read_to_string(self.root.path().join("npm.log")).unwrap_or_default()
    }

    fn install_fake_npm(&self) {
        let root = self.root.path().to_string_lossy();
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{root}/npm.log"

if [ "$1" = "pkg" ] && [ "$2" = "get" ]; then
    if [ -f "{root}/npm-fail-get" ]; then
        echo "npm ERR! could not read package.json" >&2
        exit 1
    fi
    cat "{root}/pkg-get.json"
    exit 0
fi

if [ "$1" = "pkg" ] && [ "$2" = "set" ]; then
    if [ -f "{root}/npm-fail-set" ]; then
        echo "npm ERR! EACCES: permission denied" >&2
        exit 1
    fi
    exit 0
fi

exit 0
"#
        );

        let npm = self.bin_dir.join("npm");
        fs::write(&npm, script).expect("Failed to write npm script");
        let mut perms = fs::metadata(&npm).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&npm, perms).expect("Failed to set permissions");
    }

    fn search_path(&self) -> OsString {
        let mut paths = vec![self.bin_dir.clone()];
        if let Some(original) = &self.original_path {
            paths.extend(env::split_paths(original));
        }
        env::join_paths(paths).expect("Failed to join PATH")
    }

    fn restore_path(&self) {
        match &self.original_path {
            Some(value) => unsafe {
                env::set_var("PATH", value);
            },
            None => unsafe {
                env::remove_var("PATH");
            },
        }
    }
}
