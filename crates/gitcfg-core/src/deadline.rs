//! Deadline enforcement for resolution calls

use std::future::Future;
use std::time::Duration;

use crate::error::{Error, Result};

/// Runs a resolution future under a deadline.
///
/// Expiry maps to the engine's cancellation error rather than a separate
/// timeout type: from the caller's point of view the resolution was
/// cancelled before completing, and no partially-resolved data exists.
pub async fn with_deadline<T, F>(limit: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(Error::Git(gitcfg_git::Error::Cancelled)),
    }
}
