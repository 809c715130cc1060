//! Gravity resolver: stable column compaction after merges.
//!
//! The grid is updated synchronously; the returned move list exists only so
//! a presentation layer can animate the slides afterwards. Engine logic
//! never observes a column mid-compaction.

use drop_merge_types::TileMove;

use crate::grid::Grid;

/// Slide every tile in the column down over the gaps below it, preserving
/// relative order. Returns the moves that were applied, bottom-most first.
pub fn compact(grid: &mut Grid, column: u8) -> Vec<TileMove> {
    let mut moves = Vec::new();
    let mut empty_row: Option<u8> = None;

    for row in 0..grid.rows() {
        match grid.tile_at(column, row) {
            None => {
                if empty_row.is_none() {
                    empty_row = Some(row);
                }
            }
            Some(tile) => {
                if let Some(target) = empty_row {
                    grid.take(column, row);
                    grid.set(column, target, Some(tile));
                    moves.push(TileMove {
                        tile: tile.id,
                        column,
                        from_row: row,
                        to_row: target,
                    });
                    // The vacated cell above the target is the next gap.
                    empty_row = Some(target + 1);
                }
            }
        }
    }
    moves
}
