//! Lexical path handling for the gitcfg engine
//!
//! Git plumbing answers path questions as plain text: sometimes absolute,
//! sometimes relative to the working-tree root, with whichever separator the
//! platform uses. This crate reconciles those answers without touching the
//! filesystem; all operations here are purely lexical.

pub mod reconcile;

pub use reconcile::{clean, leaf_name, make_absolute, same_path};
