//! Read-only engine snapshots for rendering.
//!
//! A snapshot is a plain-data copy of everything a presentation layer needs
//! to draw a frame. Taking a snapshot never mutates the engine; two
//! snapshots without an intervening drop are identical.

use drop_merge_types::{GamePhase, TileSpec};

use crate::grid::Grid;

/// Value-level view of the grid plus the spawner pipeline and score.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    pub columns: u8,
    pub rows: u8,
    /// Column-major cells (column * rows + row); row 0 is the bottom.
    pub cells: Vec<Option<TileSpec>>,
    /// The tile in hand, if one is armed.
    pub pending: Option<TileSpec>,
    /// The preview tile.
    pub next: TileSpec,
    pub score: u32,
    pub phase: GamePhase,
}

impl GridSnapshot {
    /// Cell view at (column, row); `None` if empty or out of bounds.
    pub fn cell(&self, column: u8, row: u8) -> Option<TileSpec> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[column as usize * self.rows as usize + row as usize]
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

pub(crate) fn write_cells(grid: &Grid, out: &mut Vec<Option<TileSpec>>) {
    out.clear();
    out.reserve(grid.columns() as usize * grid.rows() as usize);
    for column in 0..grid.columns() {
        for row in 0..grid.rows() {
            out.push(grid.tile_at(column, row).map(|t| t.spec()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Tile;
    use drop_merge_types::TileId;

    #[test]
    fn test_write_cells_layout() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 0, Some(Tile::new(TileId(1), TileSpec::with_value(4))));

        let mut cells = Vec::new();
        write_cells(&grid, &mut cells);

        let snapshot = GridSnapshot {
            columns: 2,
            rows: 3,
            cells,
            pending: None,
            next: TileSpec::with_value(2),
            score: 0,
            phase: GamePhase::Playing,
        };

        assert_eq!(snapshot.cell(1, 0), Some(TileSpec::with_value(4)));
        assert_eq!(snapshot.cell(0, 0), None);
        assert_eq!(snapshot.cell(2, 0), None); // out of bounds
    }
}
