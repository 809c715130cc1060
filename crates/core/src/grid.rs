//! Grid module - manages the column grid of tiles.
//!
//! The grid is a `columns x rows` matrix stored as a flat vector for cache
//! locality. Coordinates: (column, row) where row 0 is the bottom of a
//! column and rows grow upward. Outside a single gravity pass, a column's
//! occupied cells always form a contiguous run from row 0 up.

use drop_merge_types::{DropError, Position, TileId, TileSpec};

/// A tile living in a grid cell (or in the pending/next slot).
///
/// Exactly one owner at a time; merges consume neighbor tiles and mutate
/// the survivor's value in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
    pub wildcard: bool,
}

impl Tile {
    pub fn new(id: TileId, spec: TileSpec) -> Self {
        Self {
            id,
            value: spec.value,
            wildcard: spec.wildcard,
        }
    }

    pub fn spec(&self) -> TileSpec {
        TileSpec {
            value: self.value,
            wildcard: self.wildcard,
        }
    }
}

/// The column grid. Dimensions are fixed for the engine's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: u8,
    rows: u8,
    /// Flat storage, column-major order (column * rows + row).
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create a new empty grid.
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        }
    }

    /// Calculate flat index from (column, row) coordinates.
    #[inline(always)]
    fn index(&self, column: u8, row: u8) -> Option<usize> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(column as usize * self.rows as usize + row as usize)
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Tile at (column, row); `None` if empty or out of bounds.
    pub fn tile_at(&self, column: u8, row: u8) -> Option<Tile> {
        self.index(column, row).and_then(|idx| self.cells[idx])
    }

    /// Mutable access to the tile at (column, row).
    pub fn tile_at_mut(&mut self, column: u8, row: u8) -> Option<&mut Tile> {
        let idx = self.index(column, row)?;
        self.cells[idx].as_mut()
    }

    /// Write a cell directly. Returns false if out of bounds.
    pub fn set(&mut self, column: u8, row: u8, tile: Option<Tile>) -> bool {
        match self.index(column, row) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Remove and return the tile at (column, row).
    pub fn take(&mut self, column: u8, row: u8) -> Option<Tile> {
        let idx = self.index(column, row)?;
        self.cells[idx].take()
    }

    /// First empty row scanning from the bottom up; `None` if the column
    /// is full.
    pub fn lowest_empty_row(&self, column: u8) -> Option<u8> {
        (0..self.rows).find(|&row| self.tile_at(column, row).is_none())
    }

    /// Place a tile into the lowest empty row of a column and return the
    /// row it landed in.
    pub fn place(&mut self, column: u8, tile: Tile) -> Result<u8, DropError> {
        let row = self
            .lowest_empty_row(column)
            .ok_or(DropError::ColumnFull)?;
        self.set(column, row, Some(tile));
        Ok(row)
    }

    /// A column is full when its top row is occupied. A zero-row grid has
    /// no empty cells, so its columns count as full.
    pub fn is_column_full(&self, column: u8) -> bool {
        match self.rows.checked_sub(1) {
            Some(top) => self.tile_at(column, top).is_some(),
            None => true,
        }
    }

    /// The board is full when every column is full.
    pub fn is_board_full(&self) -> bool {
        (0..self.columns).all(|c| self.is_column_full(c))
    }

    /// Locate a tile by id (linear scan). Used after gravity to relocate
    /// the cascade's surviving tile.
    pub fn find(&self, id: TileId) -> Option<Position> {
        for column in 0..self.columns {
            for row in 0..self.rows {
                if let Some(tile) = self.tile_at(column, row) {
                    if tile.id == id {
                        return Some(Position::new(column, row));
                    }
                }
            }
        }
        None
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
