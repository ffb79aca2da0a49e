//! Run orchestration across a sequence of levels.
//!
//! `LevelSession` owns the level list and the active `GridState`, replacing
//! the grid wholesale on every (re)load so nothing leaks across a reset or
//! advance boundary. The step counter is gated on move outcomes: only
//! `Stepped` and `Pushed` count, never `Blocked`.

use crate::core::grid::GridState;
use crate::core::level::Level;
use crate::types::{Direction, MoveOutcome};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The active level accepts moves.
    Playing,
    /// The active level is solved; waiting for the host to advance.
    LevelComplete,
    /// The level list is exhausted. Terminal.
    Finished,
}

/// State for one play-through of a level list.
#[derive(Debug, Clone)]
pub struct LevelSession {
    levels: Vec<Level>,
    index: usize,
    grid: GridState,
    steps: u32,
    phase: SessionPhase,
}

impl LevelSession {
    /// Start a session on the first level.
    ///
    /// `levels` must be non-empty; the parser guarantees this for loaded
    /// files.
    pub fn new(levels: Vec<Level>) -> Self {
        assert!(!levels.is_empty(), "a session needs at least one level");
        let grid = GridState::new(&levels[0]);
        let mut session = Self {
            levels,
            index: 0,
            grid,
            steps: 0,
            phase: SessionPhase::Playing,
        };
        session.enter_level();
        session
    }

    /// Zero-based index of the active level.
    pub fn current_level_index(&self) -> usize {
        self.index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Successful moves on the active level since its last (re)load.
    ///
    /// Zero once the session is `Finished`.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn is_won(&self) -> bool {
        self.grid.is_won()
    }

    /// Resolve one movement attempt on the active level.
    ///
    /// Outside `Playing` this is a no-op returning `Blocked`. A `Stepped` or
    /// `Pushed` outcome increments the step counter by exactly one; the win
    /// condition is re-checked after every mutating outcome.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.phase != SessionPhase::Playing {
            return MoveOutcome::Blocked;
        }

        let outcome = self.grid.apply_move(dir);
        if outcome != MoveOutcome::Blocked {
            self.steps += 1;
            if self.grid.is_won() {
                self.phase = SessionPhase::LevelComplete;
            }
        }
        outcome
    }

    /// Reload the active level with a fresh grid and a zeroed step counter.
    ///
    /// A no-op once the session is `Finished`.
    pub fn reset(&mut self) {
        if self.phase == SessionPhase::Finished {
            return;
        }
        self.enter_level();
    }

    /// Move on to the next level, returning false when none remains.
    ///
    /// Callable while a level is still in progress (skipping it). When the
    /// list is exhausted the session enters the terminal `Finished` phase:
    /// the step counter is zeroed (no level is active any more) while the
    /// grid keeps the last level's final state for display.
    pub fn advance(&mut self) -> bool {
        if self.phase == SessionPhase::Finished {
            return false;
        }
        if self.index + 1 >= self.levels.len() {
            self.steps = 0;
            self.phase = SessionPhase::Finished;
            return false;
        }
        self.index += 1;
        self.enter_level();
        true
    }

    fn enter_level(&mut self) {
        self.grid = GridState::new(&self.levels[self.index]);
        self.steps = 0;
        // A level without boxes is solved before the first move.
        self.phase = if self.grid.is_won() {
            SessionPhase::LevelComplete
        } else {
            SessionPhase::Playing
        };
    }
}
