//! Git repository fixtures driven through the `git` CLI.
//!
//! These fixtures build real repositories on disk and therefore require a
//! working `git` binary. Tests should gate on [`git_available`] and return
//! early when it is absent, rather than failing the suite.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Whether a usable `git` binary is on PATH.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn run(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "`git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Initialises a standard repository with one commit on `main`.
///
/// Sets `user.email`, `user.name`, and `commit.gpgsign = false` locally so
/// the fixture works on hosts with no global git identity.
pub fn init_repo(path: &Path) {
    run(path, &["init", "-b", "main"]);
    run(path, &["config", "user.email", "test@example.com"]);
    run(path, &["config", "user.name", "Test"]);
    run(path, &["config", "commit.gpgsign", "false"]);
    fs::write(path.join("README.md"), "# fixture\n").expect("write README");
    run(path, &["add", "."]);
    run(path, &["commit", "-m", "initial"]);
}

/// Initialises a bare repository.
pub fn init_bare_repo(path: &Path) {
    run(path, &["init", "--bare", "-b", "main"]);
}

/// Adds a linked worktree on a fresh branch to an existing repository.
pub fn add_worktree(repo: &Path, worktree: &Path, branch: &str) {
    run(
        repo,
        &[
            "worktree",
            "add",
            "-b",
            branch,
            worktree.to_str().expect("worktree path is valid UTF-8"),
        ],
    );
}

/// Sets one local configuration key in an existing repository.
pub fn set_local_config(repo: &Path, key: &str, value: &str) {
    run(repo, &["config", key, value]);
}
