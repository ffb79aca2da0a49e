//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Static terrain kind for one grid position.
///
/// Tiles never change while a level is active; boxes and the player sit on
/// top of them without altering them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Goal,
}

impl Tile {
    /// The level-file character for this tile (entity markers excluded).
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Goal => 'P',
        }
    }
}

/// Movement direction for one player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit displacement for this direction, (dx, dy) with y growing downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A grid coordinate, (0, 0) at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Categorical result of one movement attempt.
///
/// `Blocked` leaves the state untouched; `Stepped` moves only the player;
/// `Pushed` moves the player and exactly one box by the same displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    Stepped,
    Pushed,
}

/// Host commands the keyboard maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Reset,
    NextLevel,
}
