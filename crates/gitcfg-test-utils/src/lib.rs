//! Shared test utilities for the gitcfg workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`git`]: real git repository fixtures driven through the `git` CLI
//! - [`scripted`]: a [`scripted::ScriptedGit`] invoker replaying canned
//!   plumbing answers without touching a real repository

pub mod git;
pub mod scripted;

pub use scripted::ScriptedGit;
