//! Level loading: raw text -> rectangular level definitions.
//!
//! A level file is a sequence of blocks separated by blank lines. Rows may be
//! ragged; every row is right-padded with walls to the widest row of its
//! block. `B` and `@` only seed entity positions; the tile underneath either
//! marker is floor.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::types::{Pos, Tile};

/// Error raised while loading or parsing a level file.
///
/// Positions in format errors are 1-based, as presented to the user.
#[derive(Debug)]
pub enum LevelError {
    /// The level file could not be read.
    Io(io::Error),
    /// A character outside the `.#PB@` legend.
    UnknownTile { level: usize, row: usize, col: usize, ch: char },
    /// A block without a player marker.
    NoPlayer { level: usize },
    /// A block with a second player marker.
    DuplicatePlayer { level: usize, row: usize, col: usize },
    /// The input contained no level blocks at all.
    NoLevels,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io(err) => write!(f, "cannot read level file: {}", err),
            LevelError::UnknownTile { level, row, col, ch } => write!(
                f,
                "level {}, row {}, column {}: unknown tile character {:?}",
                level, row, col, ch
            ),
            LevelError::NoPlayer { level } => {
                write!(f, "level {}: no player marker '@'", level)
            }
            LevelError::DuplicatePlayer { level, row, col } => write!(
                f,
                "level {}, row {}, column {}: second player marker '@'",
                level, row, col
            ),
            LevelError::NoLevels => write!(f, "no levels found in input"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LevelError {
    fn from(err: io::Error) -> Self {
        LevelError::Io(err)
    }
}

/// One parsed level: a rectangular tile grid plus the initial entity layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    player_start: Pos,
    box_starts: Vec<Pos>,
}

impl Level {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major tile grid.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn player_start(&self) -> Pos {
        self.player_start
    }

    /// Initial box positions; pairwise distinct, each on floor or goal.
    pub fn box_starts(&self) -> &[Pos] {
        &self.box_starts
    }

    /// Serialize the tile grid back to legend characters, one string per row.
    ///
    /// Entity markers are not reproduced; this is the wall/floor/goal layout
    /// only.
    pub fn layout_lines(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width)
            .map(|row| row.iter().map(|t| t.glyph()).collect())
            .collect()
    }
}

/// Read and parse a level file.
pub fn load_levels(path: impl AsRef<Path>) -> Result<Vec<Level>, LevelError> {
    let text = fs::read_to_string(path)?;
    parse_levels(&text)
}

/// Parse level text into levels, in order of appearance.
pub fn parse_levels(text: &str) -> Result<Vec<Level>, LevelError> {
    let mut levels = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !block.is_empty() {
                levels.push(parse_block(&block, levels.len() + 1)?);
                block.clear();
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        levels.push(parse_block(&block, levels.len() + 1)?);
    }

    if levels.is_empty() {
        return Err(LevelError::NoLevels);
    }
    Ok(levels)
}

fn parse_block(rows: &[&str], level: usize) -> Result<Level, LevelError> {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let height = rows.len();

    let mut tiles = Vec::with_capacity(width * height);
    let mut player: Option<Pos> = None;
    let mut boxes = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        let mut len = 0;
        for (x, ch) in row.chars().enumerate() {
            let here = Pos::new(x as i32, y as i32);
            let tile = match ch {
                '.' => Tile::Floor,
                '#' => Tile::Wall,
                'P' => Tile::Goal,
                'B' => {
                    boxes.push(here);
                    Tile::Floor
                }
                '@' => {
                    if player.is_some() {
                        return Err(LevelError::DuplicatePlayer {
                            level,
                            row: y + 1,
                            col: x + 1,
                        });
                    }
                    player = Some(here);
                    Tile::Floor
                }
                _ => {
                    return Err(LevelError::UnknownTile {
                        level,
                        row: y + 1,
                        col: x + 1,
                        ch,
                    })
                }
            };
            tiles.push(tile);
            len += 1;
        }
        // Ragged rows are closed off with walls.
        tiles.resize(tiles.len() + width - len, Tile::Wall);
    }

    let player_start = player.ok_or(LevelError::NoPlayer { level })?;

    Ok(Level {
        width,
        height,
        tiles,
        player_start,
        box_starts: boxes,
    })
}
