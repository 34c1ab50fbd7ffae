//! Orchestration layer over the gitcfg resolution engine
//!
//! The engine crates below are stateless; this crate owns the state the
//! surrounding application needs:
//!
//! - **Root registry**: an explicit, lock-protected set of scan roots,
//!   never ambient global state.
//! - **Repository cache**: the result of the last scan, keyed by stable
//!   repository id, so configuration lookups can address repositories by
//!   identity rather than path.
//! - **Deadlines**: a helper mapping timeout expiry onto the engine's
//!   cancellation error.
//!
//! # Architecture
//!
//! ```text
//!        application / UI
//!               |
//!          gitcfg-core
//!               |
//!          gitcfg-git
//!               |
//!         gitcfg-paths
//! ```

pub mod deadline;
pub mod error;
pub mod service;

pub use deadline::with_deadline;
pub use error::{Error, Result};
pub use service::Service;
