//! Match resolver: neighbor search and merge value computation.
//!
//! A landed (or relocated) tile is matched against its neighbors under the
//! configured [`NeighborModel`]. Matching is symmetric on wildcards: a
//! neighbor matches if either side is a wildcard or the values are equal.

use arrayvec::ArrayVec;

use drop_merge_types::{NeighborModel, Position, TileSpec, MAX_NEIGHBORS};

use crate::grid::Grid;

/// Scan order for the omnidirectional model: up, down, left, right, then
/// the four diagonals. The merge rule folds matches in this order.
const NEIGHBORS_8: [(i16, i16); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];

/// Positions of all neighbors matching the tile at (column, row).
///
/// Returns an empty set if the cell itself is empty.
pub fn matches_at(
    grid: &Grid,
    column: u8,
    row: u8,
    model: NeighborModel,
) -> ArrayVec<Position, MAX_NEIGHBORS> {
    let mut matches = ArrayVec::new();
    let Some(current) = grid.tile_at(column, row) else {
        return matches;
    };

    let offsets: &[(i16, i16)] = match model {
        NeighborModel::Omnidirectional => &NEIGHBORS_8,
        // Legacy rule: only the cell directly below.
        NeighborModel::VerticalOnly => &[(0, -1)],
    };

    for &(dc, dr) in offsets {
        let nc = column as i16 + dc;
        let nr = row as i16 + dr;
        if nc < 0 || nr < 0 {
            continue;
        }
        let Some(neighbor) = grid.tile_at(nc as u8, nr as u8) else {
            continue;
        };
        if current.wildcard || neighbor.wildcard || current.value == neighbor.value {
            matches.push(Position::new(nc as u8, nr as u8));
        }
    }
    matches
}

/// Fold the matched neighbors into the survivor's new spec, left to right.
///
/// A wildcard seed adopts the first real neighbor's value doubled and stops
/// being a wildcard; from then on every further neighbor doubles the
/// running value, wildcard or not. A non-wildcard seed doubles once per
/// matched neighbor regardless of how many matched at once. If a wildcard
/// seed only met wildcard neighbors, the survivor stays a wildcard.
pub fn merged_spec(seed: TileSpec, neighbors: &[TileSpec]) -> TileSpec {
    let mut value = seed.value;
    let mut wildcard = seed.wildcard;

    // Values grow multiplicatively under chained doubling, so saturate at
    // u32::MAX instead of wrapping.
    for neighbor in neighbors {
        if wildcard {
            if neighbor.wildcard {
                // Nothing to adopt from; the neighbor is still consumed.
                continue;
            }
            value = neighbor.value.saturating_mul(2);
            wildcard = false;
        } else {
            value = value.saturating_mul(2);
        }
    }

    if wildcard {
        TileSpec::wildcard()
    } else {
        TileSpec::with_value(value)
    }
}
