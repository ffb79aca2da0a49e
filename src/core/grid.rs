//! Live puzzle state and movement resolution.
//!
//! `GridState` owns a copy of the level's tile grid plus the player position
//! and a dense box array; a box's index in that array is its stable identity.
//! All mutation goes through [`GridState::apply_move`], which keeps the
//! invariants in one place: box positions stay pairwise distinct, and the
//! player never shares a cell with a wall or a box.

use crate::core::level::Level;
use crate::types::{Direction, MoveOutcome, Pos, Tile};

/// Mutable state of one level instance being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    player: Pos,
    boxes: Vec<Pos>,
}

impl GridState {
    /// Instantiate a fresh playable state from a level definition.
    pub fn new(level: &Level) -> Self {
        Self {
            width: level.width(),
            height: level.height(),
            tiles: level.tiles().to_vec(),
            player: level.player_start(),
            boxes: level.box_starts().to_vec(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    /// Current box positions, indexed by stable box id.
    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Tile at `pos`.
    ///
    /// Callers must bounds-check first; an out-of-bounds position is a
    /// contract violation and panics.
    pub fn tile_at(&self, pos: Pos) -> Tile {
        assert!(self.in_bounds(pos), "tile_at out of bounds: {:?}", pos);
        self.tiles[(pos.y as usize) * self.width + (pos.x as usize)]
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.tile_at(pos) == Tile::Wall
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.tile_at(pos) == Tile::Goal
    }

    /// Id of the box occupying `pos`, if any.
    pub fn box_at(&self, pos: Pos) -> Option<usize> {
        self.boxes.iter().position(|&b| b == pos)
    }

    /// Resolve one movement attempt.
    ///
    /// Deterministic single pass: the player steps onto a free tile, pushes a
    /// single box one tile if the cell beyond it is free, and is blocked
    /// otherwise. `Blocked` leaves the state untouched. This cannot fail;
    /// every illegal attempt is an ordinary `Blocked` value.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        let target = self.player.step(dir);
        if !self.in_bounds(target) || self.is_wall(target) {
            return MoveOutcome::Blocked;
        }

        let Some(pushed) = self.box_at(target) else {
            self.player = target;
            return MoveOutcome::Stepped;
        };

        // A box may never be pushed into a wall or another box.
        let beyond = target.step(dir);
        if !self.in_bounds(beyond) || self.is_wall(beyond) || self.box_at(beyond).is_some() {
            return MoveOutcome::Blocked;
        }

        self.boxes[pushed] = beyond;
        self.player = target;
        MoveOutcome::Pushed
    }

    /// True iff every box currently rests on a goal tile.
    ///
    /// Evaluated against live box positions; vacuously true with no boxes.
    pub fn is_won(&self) -> bool {
        self.boxes.iter().all(|&b| self.is_goal(b))
    }
}
