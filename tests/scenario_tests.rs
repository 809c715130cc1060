//! End-to-end scenarios pinning the reference rules.

use drop_merge::core::{BasicScoreTracker, MergeEngine, ScriptedRng};
use drop_merge::types::{DropError, EngineConfig, GamePhase, NeighborModel, TileSpec};

/// Three value-2 tiles dropped into the same column of a 3x4 board.
///
/// The second drop merges rows 0+1 into a 4 at row 0; the third lands at
/// row 1 and stays (4 != 2). Final column: [4, 2, empty, empty].
#[test]
fn test_scenario_three_twos_in_one_column() {
    let config = EngineConfig {
        columns: 3,
        rows: 4,
        wildcard_chance: 0.0,
        ..EngineConfig::default()
    };
    // ScriptedRng defaults to the lowest power: every spawn is a 2.
    let mut engine = MergeEngine::new(config, ScriptedRng::new(), BasicScoreTracker::new());

    let first = engine.drop(0).unwrap();
    assert_eq!(first.placed_row, 0);
    assert!(first.steps.is_empty());

    let second = engine.drop(0).unwrap();
    assert_eq!(second.placed_row, 1);
    assert_eq!(second.steps.len(), 1);
    assert_eq!(second.steps[0].merged_value, 4);

    let third = engine.drop(0).unwrap();
    assert_eq!(third.placed_row, 1);
    assert!(third.steps.is_empty(), "4 and 2 must not match");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.cell(0, 0), Some(TileSpec::with_value(4)));
    assert_eq!(snapshot.cell(0, 1), Some(TileSpec::with_value(2)));
    assert_eq!(snapshot.cell(0, 2), None);
    assert_eq!(snapshot.cell(0, 3), None);
}

/// A wildcard landing next to a 4 adopts and doubles it: survivor value 8,
/// neighbor destroyed, score increased by 8.
#[test]
fn test_scenario_wildcard_adopts_neighbor() {
    let config = EngineConfig {
        wildcard_chance: 0.05,
        neighbor_model: NeighborModel::Omnidirectional,
        ..EngineConfig::default()
    };
    // Spawns: 2, 2, then a wildcard (third float is under the chance).
    let mut rng = ScriptedRng::new();
    rng.push_floats([0.9, 0.9, 0.01]);
    let mut engine = MergeEngine::new(config, rng, BasicScoreTracker::new());

    // Build a 4 at (0, 0) from two 2s.
    engine.drop(0).unwrap();
    engine.drop(0).unwrap();
    assert_eq!(engine.score(), 4);

    assert_eq!(engine.pending(), Some(TileSpec::wildcard()));
    let outcome = engine.drop(1).unwrap();
    assert_eq!(outcome.steps.len(), 1);
    let step = &outcome.steps[0];
    assert_eq!(step.merged_value, 8);
    assert_eq!(step.score_delta, 8);
    assert_eq!(step.destroyed.len(), 1);

    assert_eq!(engine.score(), 4 + 8);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.cell(1, 0), Some(TileSpec::with_value(8)));
    assert_eq!(snapshot.cell(0, 0), None);
}

/// Dropping into a full column is a discard, not a match end, as long as
/// free cells remain elsewhere on the board.
#[test]
fn test_scenario_full_column_is_not_game_over_by_itself() {
    let config = EngineConfig {
        columns: 2,
        rows: 2,
        wildcard_chance: 0.0,
        neighbor_model: NeighborModel::VerticalOnly,
        ..EngineConfig::default()
    };
    // Spawn values: 2, 4, 2, 2 (discarded), 4.
    let mut rng = ScriptedRng::new();
    rng.push_ints([1, 2, 1, 1, 2]);
    let mut engine = MergeEngine::new(config, rng, BasicScoreTracker::new());

    engine.drop(0).unwrap(); // 2 at (0, 0)
    engine.drop(0).unwrap(); // 4 at (0, 1), no match
    engine.drop(1).unwrap(); // 2 at (1, 0)

    // Column 0 is full; one free cell remains at (1, 1).
    assert_eq!(engine.drop(0), Err(DropError::ColumnFull));
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert!(engine.pending().is_some(), "a replacement tile is armed");

    // The last free cell fills without a merge: now the match ends.
    let outcome = engine.drop(1).unwrap();
    assert!(outcome.steps.is_empty());
    assert!(outcome.board_full);
    assert!(outcome.game_over);
    assert_eq!(engine.phase(), GamePhase::GameOver);
}

/// A deep chain: merges keep re-triggering through gravity until the board
/// reaches a fixed point, and each step is reported in order.
#[test]
fn test_scenario_chained_cascade() {
    let config = EngineConfig {
        columns: 2,
        rows: 6,
        wildcard_chance: 0.0,
        neighbor_model: NeighborModel::VerticalOnly,
        ..EngineConfig::default()
    };
    // Column 0 bottom-up: 8, 4, 2 — then drop a 2 on top.
    // 2+2 -> 4, 4+4 -> 8, 8+8 -> 16: three chained steps.
    let mut rng = ScriptedRng::new();
    rng.push_ints([3, 2, 1, 1]);
    let mut engine = MergeEngine::new(
        EngineConfig {
            initial_spawn_power: 3,
            ..config
        },
        rng,
        BasicScoreTracker::new(),
    );

    engine.drop(0).unwrap(); // 8
    engine.drop(0).unwrap(); // 4
    engine.drop(0).unwrap(); // 2
    let outcome = engine.drop(0).unwrap(); // 2 -> full chain

    let values: Vec<u32> = outcome.steps.iter().map(|s| s.merged_value).collect();
    assert_eq!(values, vec![4, 8, 16]);
    assert_eq!(engine.score(), 4 + 8 + 16);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.cell(0, 0), Some(TileSpec::with_value(16)));
    assert_eq!(snapshot.cell(0, 1), None);
}
