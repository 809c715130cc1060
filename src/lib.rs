//! Drop-merge (workspace facade crate).
//!
//! This package keeps a stable `drop_merge::{core,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use drop_merge_core as core;
pub use drop_merge_types as types;
