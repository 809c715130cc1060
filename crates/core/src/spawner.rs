//! Spawner: generates tile values and feeds the pending/next pipeline.
//!
//! The spawner pre-generates the preview ("next") tile; [`Spawner::promote`]
//! hands it over to become the tile in hand and generates a fresh preview.
//! Every generation performs two independent draws: a power roll and a
//! wildcard roll. A wildcard still consumes a power roll, matching the
//! reference behavior.

use drop_merge_types::TileSpec;

use crate::rng::RandomSource;

/// Tile value generator with a one-slot preview.
#[derive(Debug, Clone)]
pub struct Spawner<R: RandomSource> {
    rng: R,
    wildcard_chance: f32,
    next: TileSpec,
}

impl<R: RandomSource> Spawner<R> {
    /// Create a spawner whose first preview tile is drawn with the given
    /// power cap (the match's initial spawn power, before any difficulty
    /// evaluation).
    pub fn new(mut rng: R, wildcard_chance: f32, initial_power: u32) -> Self {
        let next = generate(&mut rng, wildcard_chance, initial_power);
        Self {
            rng,
            wildcard_chance,
            next,
        }
    }

    /// The tile currently shown in the preview slot.
    pub fn peek_next(&self) -> TileSpec {
        self.next
    }

    /// Promote the preview tile to the hand and generate its replacement
    /// under the given power cap.
    pub fn promote(&mut self, max_power: u32) -> TileSpec {
        let promoted = self.next;
        self.next = generate(&mut self.rng, self.wildcard_chance, max_power);
        promoted
    }

    /// Restart the pipeline for a new match.
    pub fn reset(&mut self, wildcard_chance: f32, initial_power: u32) {
        self.wildcard_chance = wildcard_chance;
        self.next = generate(&mut self.rng, wildcard_chance, initial_power);
    }
}

/// Draw one tile: power `p` uniform in `[1, max_power]` giving value `2^p`,
/// then an independent wildcard roll.
fn generate<R: RandomSource>(rng: &mut R, wildcard_chance: f32, max_power: u32) -> TileSpec {
    let power = rng.uniform_int(1, max_power.max(1) + 1);
    let value = 1u32 << power;

    // Both draws happen every time; the wildcard roll does not skip the
    // power roll above.
    if rng.uniform_float() < wildcard_chance {
        TileSpec::wildcard()
    } else {
        TileSpec::with_value(value)
    }
}
