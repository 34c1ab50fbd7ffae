//! Subprocess seam for git plumbing invocations

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{trace, warn};

use crate::error::{Error, Result};

/// Issues one git invocation and returns its raw stdout.
///
/// Implementations must be stateless: two concurrent calls, for the same or
/// different directories, never interfere. The engine issues its queries
/// sequentially within one resolution and never retries; retry policy, if
/// any, belongs to the caller.
#[async_trait]
pub trait GitInvoker: Send + Sync {
    /// Run `git <args>` with `-C <dir>` when a directory is given.
    ///
    /// Returns stdout bytes untouched (configuration listings are
    /// NUL-delimited and must not be trimmed or re-encoded).
    async fn run(&self, dir: Option<&Path>, args: &[&str]) -> Result<Vec<u8>>;
}

/// Production invoker that shells out to the `git` CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandGitInvoker;

impl CommandGitInvoker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GitInvoker for CommandGitInvoker {
    async fn run(&self, dir: Option<&Path>, args: &[&str]) -> Result<Vec<u8>> {
        let mut cmd = Command::new("git");
        if let Some(dir) = dir {
            cmd.arg("-C").arg(dir);
        }
        cmd.args(args);

        trace!(args = %args.join(" "), dir = ?dir, "running git");

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                warn!("git not found in PATH");
                Error::GitNotInstalled
            } else {
                Error::Io(e)
            }
        })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(Error::ExternalTool {
                args: args.iter().map(|s| s.to_string()).collect(),
                stderr,
            })
        }
    }
}
