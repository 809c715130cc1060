//! Core types shared across the workspace.
//! This crate contains pure data types with no game logic.

use thiserror::Error;

/// Default board dimensions (columns x rows).
pub const DEFAULT_COLUMNS: u8 = 5;
pub const DEFAULT_ROWS: u8 = 8;

/// Default chance that a freshly generated tile is a wildcard.
pub const DEFAULT_WILDCARD_CHANCE: f32 = 0.05;

/// Spawn power used for the very first tile of a match, before any
/// difficulty evaluation has happened.
pub const DEFAULT_INITIAL_SPAWN_POWER: u32 = 1;

/// Difficulty step function: above this score the spawn power cap ramps up.
pub const DIFFICULTY_SCORE_THRESHOLD: u32 = 5000;
pub const BASE_MAX_SPAWN_POWER: u32 = 2;
pub const RAMPED_MAX_SPAWN_POWER: u32 = 4;

/// Sentinel value carried by wildcard tiles.
pub const WILDCARD_VALUE: u32 = 0;

/// Upper bound on the number of neighbors a match scan can return.
pub const MAX_NEIGHBORS: usize = 8;

/// Opaque tile identity, unique within a match.
///
/// Ids survive gravity moves, which is how the cascade relocates the
/// surviving tile after its supporting neighbors were consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u32);

/// Value-level description of a tile: a power of two, or a wildcard.
///
/// Wildcards carry [`WILDCARD_VALUE`] and match any neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSpec {
    pub value: u32,
    pub wildcard: bool,
}

impl TileSpec {
    /// A regular tile with the given power-of-two value.
    pub fn with_value(value: u32) -> Self {
        Self {
            value,
            wildcard: false,
        }
    }

    /// A wildcard tile.
    pub fn wildcard() -> Self {
        Self {
            value: WILDCARD_VALUE,
            wildcard: true,
        }
    }
}

/// A cell position on the grid. Row 0 is the bottom of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: u8,
    pub row: u8,
}

impl Position {
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

/// Which neighbors a landed tile is matched against.
///
/// The omnidirectional model is the canonical rule; the vertical-only model
/// is the legacy simplified rule kept as an explicit configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborModel {
    /// All 8 in-bounds neighbors (orthogonal + diagonal).
    #[default]
    Omnidirectional,
    /// Only the single cell directly below.
    VerticalOnly,
}

impl NeighborModel {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "omni" | "omnidirectional" => Some(Self::Omnidirectional),
            "vertical" | "vertical-only" => Some(Self::VerticalOnly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Omnidirectional => "omnidirectional",
            Self::VerticalOnly => "vertical-only",
        }
    }
}

/// Engine lifecycle phase. Menus and pausing belong to the host; the engine
/// only distinguishes an active match from the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Per-match engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub columns: u8,
    pub rows: u8,
    /// Probability in [0, 1] that a spawned tile is a wildcard.
    pub wildcard_chance: f32,
    /// Spawn power cap for the first tile of the match.
    pub initial_spawn_power: u32,
    pub neighbor_model: NeighborModel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            wildcard_chance: DEFAULT_WILDCARD_CHANCE,
            initial_spawn_power: DEFAULT_INITIAL_SPAWN_POWER,
            neighbor_model: NeighborModel::default(),
        }
    }
}

/// Why a drop request was rejected.
///
/// All rejections are explicit result values; none are retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DropError {
    /// Column index outside `[0, columns)`.
    #[error("column index out of range")]
    InvalidColumn,
    /// A cascade is already resolving; drops are rejected, not queued.
    #[error("engine is busy resolving a cascade")]
    EngineBusy,
    /// No tile is armed in the pending slot.
    #[error("no pending tile to drop")]
    NoPendingTile,
    /// The target column has no empty row. The pending tile is discarded;
    /// game over only triggers if the whole board is full.
    #[error("column is full")]
    ColumnFull,
    /// The match already ended; call `reset_match` to start a new one.
    #[error("match is over")]
    GameOver,
}

/// A single tile sliding down during gravity compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMove {
    pub tile: TileId,
    pub column: u8,
    pub from_row: u8,
    pub to_row: u8,
}

/// One merge step of a cascade, reported so a presentation layer can
/// animate the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStep {
    /// Where the surviving tile sat when the match was found.
    pub position: Position,
    /// The survivor's value after this merge.
    pub merged_value: u32,
    /// Score awarded for this step (equals `merged_value` for real merges).
    pub score_delta: u32,
    /// Cells whose tiles were consumed by the merge.
    pub destroyed: Vec<Position>,
    /// Gravity moves that followed the merge.
    pub moves: Vec<TileMove>,
}

/// Result of a successful drop: where the tile landed and every cascade
/// step that followed, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    pub column: u8,
    pub placed_row: u8,
    pub steps: Vec<CascadeStep>,
    pub board_full: bool,
    pub game_over: bool,
}
