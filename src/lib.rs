//! Pull-based cursors over a filtered treasure chest and an in-order binary
//! search tree.
//!
//! Layers, innermost first:
//! - [`domain`]: containers, the [`domain::Cursor`] contract and its two implementations
//! - [`application`]: chest file loading and the traversal service
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing and command dispatch for the `trove` binary

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
