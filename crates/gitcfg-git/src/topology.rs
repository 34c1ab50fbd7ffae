//! Repository topology resolver
//!
//! A linear, short-circuiting sequence of `rev-parse` plumbing queries
//! against a candidate path, assembled into a [`Repository`] descriptor.
//! The first failing query aborts the whole resolution; no partial
//! descriptor is ever returned.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use gitcfg_paths::{clean, leaf_name, make_absolute, same_path};

use crate::error::{Error, Result};
use crate::invoker::GitInvoker;

/// Fallback name when the repository root has no final path segment.
const FALLBACK_NAME: &str = "repository";

/// Identity and topology of one working copy.
#[derive(Debug, Clone, Serialize)]
pub struct Repository {
    /// Stable identity, derived deterministically from `root`.
    ///
    /// The same root path yields the same id across runs, processes, and
    /// machines; no persisted state is involved.
    pub id: Uuid,

    /// Final segment of the root path
    pub name: String,

    /// Absolute top-level working directory
    pub root: PathBuf,

    /// Absolute path to this working copy's own metadata directory
    pub git_dir: PathBuf,

    /// Absolute path to the metadata directory shared by all worktrees
    pub common_git_dir: PathBuf,

    pub is_bare: bool,

    /// Linked worktree: never true for a bare repository, otherwise true
    /// iff `git_dir` and `common_git_dir` differ after cleaning
    pub is_worktree: bool,

    /// True iff git reports a superproject working tree
    pub is_submodule: bool,

    pub last_resolved_at: DateTime<Utc>,
}

/// Resolves the topology of the repository containing `path`.
///
/// Issues five plumbing queries in a fixed order, sequentially, with no
/// retries. A path outside any working copy fails on the first query with
/// [`Error::ExternalTool`]. Callers commonly treat that as "not a
/// repository" rather than a fatal condition.
pub async fn resolve_topology(invoker: &dyn GitInvoker, path: &Path) -> Result<Repository> {
    if path.as_os_str().is_empty() {
        return Err(Error::invalid_argument("path cannot be empty"));
    }

    let top_level = query_line(invoker, path, &["rev-parse", "--show-toplevel"]).await?;
    if top_level.is_empty() {
        return Err(Error::malformed_topology("repository root is empty"));
    }
    let root = clean(&top_level);

    let git_dir_raw = query_line(invoker, path, &["rev-parse", "--git-dir"]).await?;
    let git_dir = make_absolute(&root, git_dir_raw);

    let common_raw = query_line(invoker, path, &["rev-parse", "--git-common-dir"]).await?;
    let common_git_dir = make_absolute(&root, common_raw);

    let bare_raw = query_line(invoker, path, &["rev-parse", "--is-bare-repository"]).await?;
    let is_bare = bare_raw == "true";

    let superproject =
        query_line(invoker, path, &["rev-parse", "--show-superproject-working-tree"]).await?;
    let is_submodule = !superproject.is_empty();

    let is_worktree = !is_bare && !same_path(&git_dir, &common_git_dir);
    let name = leaf_name(&root).unwrap_or_else(|| FALLBACK_NAME.to_string());
    let id = stable_id(&root);

    debug!(
        root = %root.display(),
        %id,
        is_bare,
        is_worktree,
        is_submodule,
        "resolved repository topology"
    );

    Ok(Repository {
        id,
        name,
        root,
        git_dir,
        common_git_dir,
        is_bare,
        is_worktree,
        is_submodule,
        last_resolved_at: Utc::now(),
    })
}

/// Derives the stable repository identity from a cleaned root path.
///
/// Name-based UUID over the nil namespace, so identity is a pure function
/// of the path with no dependency on wall-clock time or machine identity.
pub fn stable_id(root: &Path) -> Uuid {
    Uuid::new_v5(&Uuid::nil(), root.to_string_lossy().as_bytes())
}

/// Runs one plumbing query and trims its single-line answer.
async fn query_line(invoker: &dyn GitInvoker, path: &Path, args: &[&str]) -> Result<String> {
    let raw = invoker.run(Some(path), args).await?;
    Ok(String::from_utf8_lossy(&raw).trim().to_string())
}
