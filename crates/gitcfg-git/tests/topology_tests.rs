//! Topology resolution against a scripted invoker.

use std::path::{Path, PathBuf};

use gitcfg_git::{Error, resolve_topology};
use gitcfg_test_utils::ScriptedGit;
use pretty_assertions::assert_eq;

/// Scripts the five plumbing answers in query order.
fn scripted(
    toplevel: &str,
    git_dir: &str,
    common_dir: &str,
    bare: &str,
    superproject: &str,
) -> ScriptedGit {
    ScriptedGit::new()
        .answer_line(toplevel)
        .answer_line(git_dir)
        .answer_line(common_dir)
        .answer_line(bare)
        .answer_line(superproject)
}

#[tokio::test]
async fn resolves_standard_repository() {
    let git = scripted("/work/repo", ".git", ".git", "false", "");

    let repo = resolve_topology(&git, Path::new("/work/repo")).await.unwrap();

    assert_eq!(repo.root, PathBuf::from("/work/repo"));
    assert_eq!(repo.name, "repo");
    assert_eq!(repo.git_dir, PathBuf::from("/work/repo/.git"));
    assert_eq!(repo.common_git_dir, PathBuf::from("/work/repo/.git"));
    assert!(!repo.is_bare);
    assert!(!repo.is_worktree);
    assert!(!repo.is_submodule);
    assert_eq!(git.remaining(), 0);
}

#[tokio::test]
async fn relative_metadata_dirs_are_absolutized_against_root() {
    let git = scripted(
        "/work/repo",
        ".git/worktrees/fix",
        ".git",
        "false",
        "",
    );

    let repo = resolve_topology(&git, Path::new("/work/repo")).await.unwrap();

    assert_eq!(repo.git_dir, PathBuf::from("/work/repo/.git/worktrees/fix"));
    assert_eq!(repo.common_git_dir, PathBuf::from("/work/repo/.git"));
    assert!(repo.is_worktree);
}

#[tokio::test]
async fn bare_repository_is_never_a_worktree() {
    // Metadata directories that differ would otherwise classify this as a
    // linked worktree; bareness must win unconditionally.
    let git = scripted("/srv/store.git", "/srv/store.git", "/other/dir", "true", "");

    let repo = resolve_topology(&git, Path::new("/srv/store.git")).await.unwrap();

    assert!(repo.is_bare);
    assert!(!repo.is_worktree);
}

#[tokio::test]
async fn superproject_answer_marks_submodule() {
    let git = scripted(
        "/work/parent/vendored",
        ".git",
        ".git",
        "false",
        "/work/parent",
    );

    let repo = resolve_topology(&git, Path::new("/work/parent/vendored"))
        .await
        .unwrap();

    assert!(repo.is_submodule);
}

#[tokio::test]
async fn empty_toplevel_is_malformed_topology() {
    let git = ScriptedGit::new().answer_line("");

    let err = resolve_topology(&git, Path::new("/somewhere"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MalformedTopology { .. }));
    // Short-circuit: the remaining four queries were never issued.
    assert_eq!(git.calls().len(), 1);
}

#[tokio::test]
async fn first_failing_query_aborts_resolution() {
    let git = ScriptedGit::new()
        .answer_line("/work/repo")
        .fail("fatal: unable to read git dir");

    let err = resolve_topology(&git, Path::new("/work/repo"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ExternalTool { .. }));
    assert_eq!(git.calls().len(), 2);
}

#[tokio::test]
async fn blank_path_is_rejected_before_any_query() {
    let git = ScriptedGit::new();

    let err = resolve_topology(&git, Path::new("")).await.unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(git.calls().is_empty());
}

#[tokio::test]
async fn id_is_deterministic_across_resolutions() {
    let first = resolve_topology(
        &scripted("/work/repo", ".git", ".git", "false", ""),
        Path::new("/work/repo"),
    )
    .await
    .unwrap();
    let second = resolve_topology(
        &scripted("/work/repo", ".git", ".git", "false", ""),
        Path::new("/work/repo"),
    )
    .await
    .unwrap();
    let other = resolve_topology(
        &scripted("/work/other", ".git", ".git", "false", ""),
        Path::new("/work/other"),
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_ne!(first.id, other.id);
}

#[tokio::test]
async fn root_resolving_to_filesystem_root_gets_fallback_name() {
    let git = scripted("/", "/.git", "/.git", "false", "");

    let repo = resolve_topology(&git, Path::new("/")).await.unwrap();

    assert_eq!(repo.name, "repository");
}
