//! Core merge-engine logic - pure, deterministic, and testable
//!
//! This crate contains the complete rules of the falling-tile merge puzzle.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: the same seed and drop sequence produces the same match
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: runs headless, in a terminal host, or behind any renderer
//!
//! # Module Structure
//!
//! - [`grid`]: the column grid, placement and column queries
//! - [`matcher`]: neighbor search and merge value computation
//! - [`gravity`]: stable column compaction after merges
//! - [`spawner`]: tile generation and the pending/next pipeline
//! - [`difficulty`]: score-driven spawn power cap
//! - [`engine`]: the drop/cascade state machine tying it all together
//! - [`rng`]: the [`RandomSource`] seam plus deterministic implementations
//! - [`score`]: the [`ScoreTracker`] seam plus an in-memory tracker
//! - [`snapshot`]: read-only views for rendering
//!
//! # Game Rules
//!
//! - A tile is held in hand; dropping it into a column lands it on the
//!   lowest free cell.
//! - Neighbors merge when values are equal or either side is a wildcard;
//!   each matched neighbor doubles the survivor's value.
//! - Merges leave holes; gravity compacts the affected columns and the
//!   survivor re-checks its neighborhood, cascading to a fixed point.
//! - The spawn power cap steps up once the score crosses the difficulty
//!   threshold.
//! - The match ends when every column is full.
//!
//! # Example
//!
//! ```
//! use drop_merge_core::engine::DefaultEngine;
//! use drop_merge_types::EngineConfig;
//!
//! let mut engine = DefaultEngine::with_seed(EngineConfig::default(), 12345);
//!
//! // Drop the held tile into column 2 and inspect the cascade.
//! let outcome = engine.drop(2).unwrap();
//! assert_eq!(outcome.column, 2);
//!
//! // The preview tile was promoted and a fresh one armed.
//! assert!(engine.pending().is_some());
//! ```

pub mod difficulty;
pub mod engine;
pub mod gravity;
pub mod grid;
pub mod matcher;
pub mod rng;
pub mod score;
pub mod snapshot;
pub mod spawner;

// Re-export commonly used items.
pub use engine::{DefaultEngine, MergeEngine};
pub use grid::{Grid, Tile};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use score::{BasicScoreTracker, ScoreTracker};
pub use snapshot::GridSnapshot;
pub use spawner::Spawner;
