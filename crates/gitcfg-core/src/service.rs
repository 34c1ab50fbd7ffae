//! Root registry, repository scanning, and snapshot retrieval

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info};
use uuid::Uuid;

use gitcfg_git::{
    CommandGitInvoker, ConfigSnapshot, GitInvoker, Repository, read_global_config,
    read_repo_config, resolve_topology,
};
use gitcfg_paths::clean;

use crate::error::{Error, Result};

/// Mutable orchestration state, always accessed through the service lock.
#[derive(Default)]
struct State {
    roots: BTreeSet<PathBuf>,
    repositories: HashMap<Uuid, Repository>,
}

/// Coordinates the stateless resolvers with the state the application owns.
///
/// The lock is held only for in-memory reads and writes; it is never held
/// across an external git invocation, so a slow subprocess cannot block
/// registry access from other tasks.
pub struct Service<I: GitInvoker> {
    invoker: I,
    state: RwLock<State>,
}

impl Service<CommandGitInvoker> {
    /// Service backed by the real `git` CLI.
    pub fn with_git_cli() -> Self {
        Self::new(CommandGitInvoker)
    }
}

impl<I: GitInvoker> Service<I> {
    pub fn new(invoker: I) -> Self {
        Self {
            invoker,
            state: RwLock::new(State::default()),
        }
    }

    /// Registers a scan root. Paths are cleaned before storage so the same
    /// directory spelled differently does not register twice.
    pub fn add_root(&self, path: impl AsRef<Path>) -> Result<()> {
        if path.as_ref().as_os_str().is_empty() {
            return Err(Error::EmptyRoot);
        }
        let root = clean(path);
        debug!(root = %root.display(), "registering scan root");
        self.state.write().expect("state lock poisoned").roots.insert(root);
        Ok(())
    }

    /// Deregisters a scan root; unknown roots are a no-op.
    pub fn remove_root(&self, path: impl AsRef<Path>) {
        let root = clean(path);
        self.state.write().expect("state lock poisoned").roots.remove(&root);
    }

    /// Registered roots in sorted order.
    pub fn list_roots(&self) -> Vec<PathBuf> {
        self.state
            .read()
            .expect("state lock poisoned")
            .roots
            .iter()
            .cloned()
            .collect()
    }

    /// Resolves the topology of the repository containing `path`.
    ///
    /// Pass-through to the engine; the result is not cached, only [`scan`]
    /// populates the repository cache.
    ///
    /// [`scan`]: Service::scan
    pub async fn resolve_repository(&self, path: &Path) -> Result<Repository> {
        Ok(resolve_topology(&self.invoker, path).await?)
    }

    /// Resolves every registered root and replaces the repository cache.
    ///
    /// Roots are resolved sequentially; the first failure aborts the scan
    /// and leaves the previous cache untouched. Results are sorted by name.
    pub async fn scan(&self) -> Result<Vec<Repository>> {
        let roots = self.list_roots();

        let mut discovered = HashMap::with_capacity(roots.len());
        for root in roots {
            let repo = resolve_topology(&self.invoker, &root).await?;
            discovered.insert(repo.id, repo);
        }

        let mut results: Vec<Repository> = discovered.values().cloned().collect();
        results.sort_by(|a, b| a.name.cmp(&b.name));

        info!(count = results.len(), "repository scan complete");
        self.state.write().expect("state lock poisoned").repositories = discovered;

        Ok(results)
    }

    /// Effective configuration of a previously scanned repository,
    /// addressed by stable id. The snapshot subject is the id, not the
    /// path, so callers can correlate it with their own repository list.
    pub async fn repo_config(&self, id: Uuid) -> Result<ConfigSnapshot> {
        let root = {
            let state = self.state.read().expect("state lock poisoned");
            state
                .repositories
                .get(&id)
                .map(|repo| repo.root.clone())
                .ok_or_else(|| Error::RepositoryNotFound(id.to_string()))?
        };

        let snapshot = read_repo_config(&self.invoker, &root).await?;
        Ok(ConfigSnapshot {
            subject: id.to_string(),
            ..snapshot
        })
    }

    /// Effective user-global configuration, outside any repository.
    pub async fn global_config(&self) -> Result<ConfigSnapshot> {
        Ok(read_global_config(&self.invoker).await?)
    }
}
