//! Effective configuration resolver

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::invoker::GitInvoker;
use crate::listing::tokenize_listing;
use crate::precedence::{EffectiveValue, resolve_entries};

/// Subject label used for the user-global configuration snapshot.
pub const GLOBAL_SUBJECT: &str = "global";

const LIST_ARGS: &[&str] = &["config", "--null", "--show-origin", "--show-scope", "--list"];

/// Point-in-time view of every effective configuration key for one subject.
///
/// Immutable once produced; callers re-invoke the resolver to observe a new
/// state. The engine holds no reference to a snapshot after returning it.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSnapshot {
    /// Repository identity, or [`GLOBAL_SUBJECT`]
    pub subject: String,

    pub entries: HashMap<String, EffectiveValue>,

    pub retrieved_at: DateTime<Utc>,
}

impl ConfigSnapshot {
    pub fn new(subject: impl Into<String>, entries: HashMap<String, EffectiveValue>) -> Self {
        Self {
            subject: subject.into(),
            entries,
            retrieved_at: Utc::now(),
        }
    }
}

/// Resolves the effective configuration visible from inside a repository.
///
/// Issues exactly one listing invocation; git itself walks the
/// system/global/local/worktree hierarchy and emits entries in ascending
/// precedence order.
pub async fn read_repo_config(
    invoker: &dyn GitInvoker,
    repo_path: &Path,
) -> Result<ConfigSnapshot> {
    if repo_path.as_os_str().is_empty() {
        return Err(Error::invalid_argument("repository path cannot be empty"));
    }

    let raw = invoker.run(Some(repo_path), LIST_ARGS).await?;
    let entries = resolve_entries(tokenize_listing(&raw));

    debug!(
        path = %repo_path.display(),
        keys = entries.len(),
        "resolved effective configuration"
    );

    Ok(ConfigSnapshot::new(
        repo_path.to_string_lossy(),
        entries,
    ))
}

/// Resolves the user-global configuration, outside any repository.
pub async fn read_global_config(invoker: &dyn GitInvoker) -> Result<ConfigSnapshot> {
    let mut args: Vec<&str> = LIST_ARGS.to_vec();
    args.push("--global");

    let raw = invoker.run(None, &args).await?;
    let entries = resolve_entries(tokenize_listing(&raw));

    debug!(keys = entries.len(), "resolved global configuration");

    Ok(ConfigSnapshot::new(GLOBAL_SUBJECT, entries))
}
