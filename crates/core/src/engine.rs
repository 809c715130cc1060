//! Merge engine: the drop/cascade state machine.
//!
//! One drop is one atomic transaction: place the pending tile, resolve the
//! cascade to a fixed point, evaluate board-full, arm the next tile. A busy
//! flag rejects reentrant drops outright; nothing is queued. Animation and
//! timing are downstream concerns layered on the returned [`DropOutcome`].

use log::{debug, trace};

use drop_merge_types::{
    CascadeStep, DropError, DropOutcome, EngineConfig, GamePhase, Position, TileId, TileSpec,
};

use crate::difficulty::current_max_power;
use crate::gravity;
use crate::grid::{Grid, Tile};
use crate::matcher;
use crate::rng::{RandomSource, SimpleRng};
use crate::score::{BasicScoreTracker, ScoreTracker};
use crate::snapshot::{write_cells, GridSnapshot};
use crate::spawner::Spawner;

/// The complete engine state for one match.
///
/// Collaborators are injected at construction: a [`RandomSource`] for the
/// spawner and a [`ScoreTracker`] for score accumulation. The engine is the
/// only mutator of the grid and the pending/next slots.
#[derive(Debug, Clone)]
pub struct MergeEngine<R: RandomSource, S: ScoreTracker> {
    config: EngineConfig,
    grid: Grid,
    spawner: Spawner<R>,
    tracker: S,
    /// The tile in hand. `None` only transiently inside `drop` or after a
    /// terminal game over.
    pending: Option<Tile>,
    /// Reentrancy gate: set for the duration of a drop transaction.
    busy: bool,
    phase: GamePhase,
    next_tile_id: u32,
}

/// Engine wired to the built-in LCG and in-memory score tracker.
pub type DefaultEngine = MergeEngine<SimpleRng, BasicScoreTracker>;

impl DefaultEngine {
    /// Convenience constructor for hosts that just want a seeded match.
    pub fn with_seed(config: EngineConfig, seed: u32) -> Self {
        Self::new(config, SimpleRng::new(seed), BasicScoreTracker::new())
    }
}

impl<R: RandomSource, S: ScoreTracker> MergeEngine<R, S> {
    /// Create an engine and arm the first pending tile.
    ///
    /// Panics if the configured board has zero columns or rows.
    pub fn new(config: EngineConfig, rng: R, tracker: S) -> Self {
        assert!(config.columns > 0 && config.rows > 0);

        let spawner = Spawner::new(rng, config.wildcard_chance, config.initial_spawn_power);
        let mut engine = Self {
            grid: Grid::new(config.columns, config.rows),
            spawner,
            tracker,
            pending: None,
            busy: false,
            phase: GamePhase::Playing,
            next_tile_id: 0,
            config,
        };
        engine.arm_pending();
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.tracker.current()
    }

    pub fn tracker(&self) -> &S {
        &self.tracker
    }

    /// The tile currently in hand.
    pub fn pending(&self) -> Option<TileSpec> {
        self.pending.map(|t| t.spec())
    }

    /// The preview tile (what the hand will hold after the next drop).
    pub fn peek_next(&self) -> TileSpec {
        self.spawner.peek_next()
    }

    /// Drop the pending tile into a column and resolve the cascade.
    ///
    /// The whole transaction is synchronous; when this returns, the grid is
    /// stable and (unless the match ended) a fresh pending tile is armed.
    pub fn drop(&mut self, column: u8) -> Result<DropOutcome, DropError> {
        if self.phase == GamePhase::GameOver {
            return Err(DropError::GameOver);
        }
        if self.busy {
            return Err(DropError::EngineBusy);
        }
        if column >= self.config.columns {
            return Err(DropError::InvalidColumn);
        }
        let Some(tile) = self.pending.take() else {
            return Err(DropError::NoPendingTile);
        };

        self.busy = true;
        let result = self.drop_held(column, tile);
        self.busy = false;
        result
    }

    fn drop_held(&mut self, column: u8, tile: Tile) -> Result<DropOutcome, DropError> {
        let row = match self.grid.place(column, tile) {
            Ok(row) => row,
            Err(err) => {
                // Normal game event, not a programmer error: the held tile
                // is discarded and the match only ends if the whole board
                // is full.
                debug!(
                    "drop into full column {}: tile {:?} discarded",
                    column, tile.id
                );
                if self.grid.is_board_full() {
                    self.phase = GamePhase::GameOver;
                } else {
                    self.arm_pending();
                }
                return Err(err);
            }
        };
        trace!("tile {:?} placed at ({}, {})", tile.id, column, row);

        let steps = self.resolve(Position::new(column, row), tile.id);

        let board_full = self.grid.is_board_full();
        if board_full {
            debug!("board full after cascade, match over at score {}", self.score());
            self.phase = GamePhase::GameOver;
        } else {
            self.arm_pending();
        }

        Ok(DropOutcome {
            column,
            placed_row: row,
            steps,
            board_full,
            game_over: board_full,
        })
    }

    /// Run the cascade to its fixed point.
    ///
    /// Worklist form instead of recursion: each pass merges the survivor
    /// with its current matches, compacts the affected columns, then
    /// relocates the survivor by id and re-checks. Every pass destroys at
    /// least one tile, so the loop is bounded by the occupied cell count.
    fn resolve(&mut self, start: Position, survivor: TileId) -> Vec<CascadeStep> {
        let mut steps = Vec::new();
        let mut cursor = start;

        loop {
            let matches = matcher::matches_at(
                &self.grid,
                cursor.column,
                cursor.row,
                self.config.neighbor_model,
            );
            if matches.is_empty() {
                break;
            }
            let Some(seed) = self.grid.tile_at(cursor.column, cursor.row) else {
                break;
            };

            // Consume the matched neighbors, keeping their specs in scan
            // order for the left-to-right merge fold.
            let mut neighbor_specs = Vec::with_capacity(matches.len());
            let mut destroyed = Vec::with_capacity(matches.len());
            for &pos in &matches {
                if let Some(neighbor) = self.grid.take(pos.column, pos.row) {
                    neighbor_specs.push(neighbor.spec());
                    destroyed.push(pos);
                }
            }

            let merged = matcher::merged_spec(seed.spec(), &neighbor_specs);
            if let Some(tile) = self.grid.tile_at_mut(cursor.column, cursor.row) {
                tile.value = merged.value;
                tile.wildcard = merged.wildcard;
            }

            let score_delta = merged.value;
            self.tracker.add(score_delta);

            // Compact every column that lost a tile; the survivor's own
            // column may also have holes underneath it now.
            let mut columns: Vec<u8> = destroyed.iter().map(|p| p.column).collect();
            columns.push(cursor.column);
            columns.sort_unstable();
            columns.dedup();

            let mut moves = Vec::new();
            for column in columns {
                moves.extend(gravity::compact(&mut self.grid, column));
            }

            debug!(
                "cascade step at ({}, {}): {} consumed, new value {}",
                cursor.column,
                cursor.row,
                destroyed.len(),
                merged.value
            );
            steps.push(CascadeStep {
                position: cursor,
                merged_value: merged.value,
                score_delta,
                destroyed,
                moves,
            });

            match self.grid.find(survivor) {
                Some(pos) => cursor = pos,
                None => break,
            }
        }

        steps
    }

    /// Promote the preview tile into the hand, re-evaluating the spawn
    /// power cap from the current score first.
    fn arm_pending(&mut self) {
        let max_power = current_max_power(self.tracker.current());
        let spec = self.spawner.promote(max_power);
        let id = TileId(self.next_tile_id);
        self.next_tile_id = self.next_tile_id.wrapping_add(1);
        self.pending = Some(Tile::new(id, spec));
        trace!(
            "armed pending tile {:?} ({:?}), power cap {}",
            id,
            spec,
            max_power
        );
    }

    /// Start a fresh match: clear the board, fold the score into the
    /// tracker's history, restart the spawner pipeline and arm a tile.
    pub fn reset_match(&mut self, config: EngineConfig) {
        assert!(config.columns > 0 && config.rows > 0);

        self.config = config;
        self.grid = Grid::new(config.columns, config.rows);
        self.tracker.reset();
        self.spawner
            .reset(config.wildcard_chance, config.initial_spawn_power);
        self.phase = GamePhase::Playing;
        self.busy = false;
        self.pending = None;
        self.next_tile_id = 0;
        self.arm_pending();
    }

    /// Read-only view for rendering. Idempotent between drops.
    pub fn snapshot(&self) -> GridSnapshot {
        let mut cells = Vec::new();
        write_cells(&self.grid, &mut cells);
        GridSnapshot {
            columns: self.config.columns,
            rows: self.config.rows,
            cells,
            pending: self.pending(),
            next: self.peek_next(),
            score: self.score(),
            phase: self.phase,
        }
    }

    /// Snapshot into an existing buffer, reusing its cell allocation.
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.columns = self.config.columns;
        out.rows = self.config.rows;
        write_cells(&self.grid, &mut out.cells);
        out.pending = self.pending();
        out.next = self.peek_next();
        out.score = self.score();
        out.phase = self.phase;
    }

    /// Test hook: overwrite a grid cell directly.
    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
