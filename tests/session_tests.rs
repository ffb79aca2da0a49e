//! Session lifecycle tests - steps, reset, advance, finish

use std::path::Path;

use tui_sokoban::core::{load_levels, parse_levels, LevelSession, SessionPhase};
use tui_sokoban::types::{Direction, MoveOutcome, Pos};

fn session(text: &str) -> LevelSession {
    LevelSession::new(parse_levels(text).unwrap())
}

#[test]
fn steps_count_successful_moves_only() {
    let mut s = session("#####\n#@B.#\n#..P#\n#####");

    // Blocked key presses leave the counter alone.
    assert_eq!(s.apply_move(Direction::Left), MoveOutcome::Blocked);
    assert_eq!(s.apply_move(Direction::Up), MoveOutcome::Blocked);
    assert_eq!(s.steps(), 0);

    assert_eq!(s.apply_move(Direction::Right), MoveOutcome::Pushed);
    assert_eq!(s.apply_move(Direction::Down), MoveOutcome::Stepped);
    assert_eq!(s.steps(), 2);

    // Another blocked attempt in between does not count either.
    assert_eq!(s.apply_move(Direction::Left), MoveOutcome::Stepped);
    assert_eq!(s.apply_move(Direction::Left), MoveOutcome::Blocked);
    assert_eq!(s.steps(), 3);
}

#[test]
fn reset_restores_the_recorded_starts() {
    let mut s = session("######\n#@.B.#\n#..P.#\n######");
    for dir in [Direction::Right, Direction::Right, Direction::Down] {
        s.apply_move(dir);
    }
    assert!(s.steps() > 0);

    s.reset();
    assert_eq!(s.grid().player(), Pos::new(1, 1));
    assert_eq!(s.grid().boxes(), &[Pos::new(3, 1)]);
    assert_eq!(s.steps(), 0);
    assert_eq!(s.phase(), SessionPhase::Playing);
}

#[test]
fn full_run_through_the_shipped_levels() {
    let levels = load_levels(Path::new(env!("CARGO_MANIFEST_DIR")).join("levels.txt")).unwrap();
    let mut s = LevelSession::new(levels);

    // Level 1: two pushes to the right.
    assert_eq!(s.apply_move(Direction::Right), MoveOutcome::Pushed);
    assert_eq!(s.apply_move(Direction::Right), MoveOutcome::Pushed);
    assert!(s.is_won());
    assert_eq!(s.phase(), SessionPhase::LevelComplete);
    assert_eq!(s.steps(), 2);

    // Level 2: one box up, one box down.
    assert!(s.advance());
    assert_eq!(s.current_level_index(), 1);
    assert_eq!(s.steps(), 0);
    assert_eq!(s.apply_move(Direction::Up), MoveOutcome::Pushed);
    assert_eq!(s.apply_move(Direction::Down), MoveOutcome::Stepped);
    assert_eq!(s.apply_move(Direction::Down), MoveOutcome::Pushed);
    assert_eq!(s.phase(), SessionPhase::LevelComplete);

    // Level 3: shuffle the right box down, then the left box across.
    assert!(s.advance());
    let moves = [
        Direction::Right, // push first box right
        Direction::Down,  // push second box onto its goal
        Direction::Right,
        Direction::Right,
        Direction::Up,
        Direction::Left, // push remaining box left...
        Direction::Left,
        Direction::Left, // ...onto its goal
    ];
    for dir in moves {
        assert_ne!(s.apply_move(dir), MoveOutcome::Blocked, "move {dir:?}");
    }
    assert_eq!(s.phase(), SessionPhase::LevelComplete);

    // No further level: terminal state.
    assert!(!s.advance());
    assert_eq!(s.phase(), SessionPhase::Finished);
    assert!(!s.advance());
    assert_eq!(s.apply_move(Direction::Up), MoveOutcome::Blocked);
    assert_eq!(s.steps(), 0);
}

#[test]
fn reset_after_solving_replays_the_level() {
    let mut s = session("####\n#@.#\n#B.#\n#P.#\n####");
    assert_eq!(s.apply_move(Direction::Down), MoveOutcome::Pushed);
    assert_eq!(s.phase(), SessionPhase::LevelComplete);
    assert_eq!(s.steps(), 1);

    s.reset();
    assert_eq!(s.phase(), SessionPhase::Playing);
    assert_eq!(s.grid().player(), Pos::new(1, 1));
    assert_eq!(s.grid().boxes(), &[Pos::new(1, 2)]);
    assert_eq!(s.steps(), 0);
    assert!(!s.is_won());

    // The replayed level accepts moves again.
    assert_eq!(s.apply_move(Direction::Down), MoveOutcome::Pushed);
    assert_eq!(s.phase(), SessionPhase::LevelComplete);
    assert_eq!(s.steps(), 1);
}

#[test]
fn advance_can_skip_an_unsolved_level() {
    let mut s = session("@B.P\n\n@BP");
    assert_eq!(s.phase(), SessionPhase::Playing);
    assert!(s.advance());
    assert_eq!(s.current_level_index(), 1);
    assert_eq!(s.phase(), SessionPhase::Playing);
}

#[test]
fn moves_after_finished_are_inert() {
    let mut s = session("@BP");
    assert_eq!(s.apply_move(Direction::Right), MoveOutcome::Pushed);
    assert!(!s.advance());
    assert_eq!(s.phase(), SessionPhase::Finished);

    let player = s.grid().player();
    assert_eq!(s.apply_move(Direction::Left), MoveOutcome::Blocked);
    assert_eq!(s.grid().player(), player);
    s.reset();
    assert_eq!(s.phase(), SessionPhase::Finished);
}
