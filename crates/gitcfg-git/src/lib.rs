//! Git configuration and topology resolution engine
//!
//! Two stateless pipelines over the output of the `git` CLI:
//!
//! - **Effective configuration**: one `git config --null --show-origin
//!   --show-scope --list` invocation, tokenized into scope/origin/key-value
//!   records and folded into an effective value plus override chain per key.
//! - **Repository topology**: a fixed sequence of `rev-parse` plumbing
//!   queries assembled into a [`Repository`] descriptor (root, metadata
//!   directories, bare/worktree/submodule classification, stable identity).
//!
//! Every resolution is a fresh transformation of its input; nothing is
//! cached or mutated between calls. The [`GitInvoker`] trait is the only
//! seam touching the outside world, so tests can substitute a scripted
//! stand-in for the real CLI.

pub mod config;
pub mod error;
pub mod invoker;
pub mod listing;
pub mod origin;
pub mod precedence;
pub mod scope;
pub mod topology;

pub use config::{ConfigSnapshot, GLOBAL_SUBJECT, read_global_config, read_repo_config};
pub use error::{Error, Result};
pub use invoker::{CommandGitInvoker, GitInvoker};
pub use listing::{RawRecord, tokenize_listing};
pub use origin::normalize_origin;
pub use precedence::{ConfigSource, EffectiveValue, Override, resolve_entries};
pub use scope::Scope;
pub use topology::{Repository, resolve_topology};
