//! Headless autoplay runner (default binary).
//!
//! Plays complete matches with uniformly random column choices and prints
//! aggregate statistics. This is the engine's reference host: it owns the
//! RNG seed, the score tracker and match restarts; the engine itself stays
//! a pure state machine.

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use drop_merge::core::{BasicScoreTracker, MergeEngine, RandomSource};
use drop_merge::types::{DropError, EngineConfig, NeighborModel};

#[derive(Parser, Debug)]
#[command(about = "Headless autoplay for the drop-merge engine")]
struct Args {
    /// Number of matches to play
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// RNG seed (matches are deterministic per seed)
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Board columns
    #[arg(long, default_value_t = 5)]
    columns: u8,

    /// Board rows
    #[arg(long, default_value_t = 8)]
    rows: u8,

    /// Wildcard spawn chance in [0, 1]
    #[arg(long, default_value_t = 0.05)]
    wildcard_chance: f32,

    /// Neighbor model: "omni" or "vertical"
    #[arg(long, default_value = "omni", value_parser = parse_model)]
    model: NeighborModel,

    /// Safety cap on drops per match
    #[arg(long, default_value_t = 10_000)]
    max_drops: u32,
}

fn parse_model(s: &str) -> Result<NeighborModel, String> {
    NeighborModel::from_str(s).ok_or_else(|| format!("unknown neighbor model: {s}"))
}

/// `rand`-backed adapter for the engine's random source seam.
struct SeededSource(StdRng);

impl RandomSource for SeededSource {
    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..high)
    }

    fn uniform_float(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

#[derive(Debug, Default)]
struct MatchStats {
    drops: u32,
    discards: u32,
    deepest_cascade: usize,
    max_tile: u32,
    score: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.columns == 0 || args.rows == 0 {
        bail!("board must have at least one column and one row");
    }
    if !(0.0..=1.0).contains(&args.wildcard_chance) {
        bail!("wildcard chance must be in [0, 1]");
    }

    let config = EngineConfig {
        columns: args.columns,
        rows: args.rows,
        wildcard_chance: args.wildcard_chance,
        initial_spawn_power: 1,
        neighbor_model: args.model,
    };

    let mut engine = MergeEngine::new(
        config,
        SeededSource(StdRng::seed_from_u64(args.seed)),
        BasicScoreTracker::new(),
    );
    let mut column_rng = StdRng::seed_from_u64(args.seed.wrapping_add(1));

    let mut totals = MatchStats::default();
    let mut finished = 0u32;

    for game in 0..args.games {
        if game > 0 {
            engine.reset_match(config);
        }

        let stats = play_match(&mut engine, &mut column_rng, args.max_drops)?;
        info!(
            "match {}: score {} ({} drops, {} discards, deepest cascade {}, max tile {})",
            game + 1,
            stats.score,
            stats.drops,
            stats.discards,
            stats.deepest_cascade,
            stats.max_tile
        );

        totals.drops += stats.drops;
        totals.discards += stats.discards;
        totals.deepest_cascade = totals.deepest_cascade.max(stats.deepest_cascade);
        totals.max_tile = totals.max_tile.max(stats.max_tile);
        totals.score += stats.score;
        finished += 1;
    }

    println!("matches played:   {finished}");
    println!("mean score:       {}", totals.score / finished.max(1));
    println!("best score:       {}", engine.tracker().best());
    println!("total drops:      {}", totals.drops);
    println!("deepest cascade:  {}", totals.deepest_cascade);
    println!("max tile reached: {}", totals.max_tile);

    Ok(())
}

/// Play one match to game over (or the drop cap) and report its stats.
fn play_match(
    engine: &mut MergeEngine<SeededSource, BasicScoreTracker>,
    column_rng: &mut StdRng,
    max_drops: u32,
) -> Result<MatchStats> {
    let columns = engine.config().columns;
    let mut stats = MatchStats::default();

    for _ in 0..max_drops {
        let column = column_rng.gen_range(0..columns as u32) as u8;
        match engine.drop(column) {
            Ok(outcome) => {
                stats.drops += 1;
                stats.deepest_cascade = stats.deepest_cascade.max(outcome.steps.len());
                for step in &outcome.steps {
                    stats.max_tile = stats.max_tile.max(step.merged_value);
                }
                if outcome.game_over {
                    break;
                }
            }
            // Full column: the held tile is discarded, the match goes on.
            Err(DropError::ColumnFull) => stats.discards += 1,
            Err(DropError::GameOver) => break,
            Err(err) => bail!("unexpected drop rejection: {err}"),
        }
    }

    // Count tiles that landed without ever merging.
    let snapshot = engine.snapshot();
    for column in 0..snapshot.columns {
        for row in 0..snapshot.rows {
            if let Some(spec) = snapshot.cell(column, row) {
                stats.max_tile = stats.max_tile.max(spec.value);
            }
        }
    }
    stats.score = engine.score();

    Ok(stats)
}
