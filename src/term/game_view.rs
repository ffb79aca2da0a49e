//! GameView: maps session state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::{GridState, LevelSession, SessionPhase};
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::{MoveOutcome, Pos, Tile};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Formats the step counter for the status caption.
///
/// Injected by the host; the core only ever exposes the integer count, so
/// any locale-specific word forms live entirely on this side.
pub type StepsLabel = fn(u32) -> String;

/// Default English step label.
pub fn english_steps(steps: u32) -> String {
    if steps == 1 {
        "1 step".to_string()
    } else {
        format!("{} steps", steps)
    }
}

/// A lightweight terminal view for the Sokoban game.
pub struct GameView {
    steps_label: StepsLabel,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            steps_label: english_steps,
        }
    }
}

impl GameView {
    pub fn new(steps_label: StepsLabel) -> Self {
        Self { steps_label }
    }

    /// Render the current session state into a framebuffer.
    ///
    /// `last_outcome` feeds the short cue caption in the status line;
    /// `show_intro` overlays the help screen before play starts.
    pub fn render(
        &self,
        session: &LevelSession,
        last_outcome: Option<MoveOutcome>,
        show_intro: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid = session.grid();
        let board_w = grid.width() as u16;
        let board_h = grid.height() as u16;
        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = viewport.height.saturating_sub(board_h + 2) / 2;

        self.draw_board(&mut fb, grid, start_x, start_y);
        self.draw_caption(&mut fb, session, last_outcome, viewport);

        if show_intro {
            self.draw_overlay(&mut fb, viewport, INTRO_TEXT);
        } else {
            match session.phase() {
                SessionPhase::Playing => {}
                SessionPhase::LevelComplete => {
                    let solved = format!(
                        "Level {} solved in {}!",
                        session.current_level_index() + 1,
                        (self.steps_label)(session.steps())
                    );
                    self.draw_overlay(&mut fb, viewport, &[solved.as_str(), "", CONTINUE_PROMPT]);
                }
                SessionPhase::Finished => {
                    self.draw_overlay(
                        &mut fb,
                        viewport,
                        &["All levels complete!", "", "press any key to quit"],
                    );
                }
            }
        }

        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, grid: &GridState, start_x: u16, start_y: u16) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = Pos::new(x as i32, y as i32);
                let (ch, style) = match grid.tile_at(pos) {
                    Tile::Wall => ('█', CellStyle::new(Color::DarkGrey, Color::Reset)),
                    Tile::Floor => (' ', CellStyle::default()),
                    Tile::Goal => ('·', CellStyle::new(Color::Yellow, Color::Reset).bold()),
                };
                fb.put_char(start_x + x as u16, start_y + y as u16, ch, style);
            }
        }

        for &pos in grid.boxes() {
            let style = if grid.is_goal(pos) {
                CellStyle::new(Color::Green, Color::Reset).bold()
            } else {
                CellStyle::new(Color::DarkYellow, Color::Reset)
            };
            fb.put_char(
                start_x + pos.x as u16,
                start_y + pos.y as u16,
                '■',
                style,
            );
        }

        let player = grid.player();
        fb.put_char(
            start_x + player.x as u16,
            start_y + player.y as u16,
            '@',
            CellStyle::new(Color::Cyan, Color::Reset).bold(),
        );
    }

    fn draw_caption(
        &self,
        fb: &mut FrameBuffer,
        session: &LevelSession,
        last_outcome: Option<MoveOutcome>,
        viewport: Viewport,
    ) {
        let cue = match last_outcome {
            Some(MoveOutcome::Stepped) => "  step",
            Some(MoveOutcome::Pushed) => "  push",
            Some(MoveOutcome::Blocked) | None => "",
        };
        let caption = format!(
            "Sokoban  level {}/{}  {}{}",
            session.current_level_index() + 1,
            session.level_count(),
            (self.steps_label)(session.steps()),
            cue,
        );
        let y = viewport.height.saturating_sub(1);
        fb.put_str(0, y, &caption, CellStyle::default());
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, viewport: Viewport, lines: &[&str]) {
        let style = CellStyle::new(Color::White, Color::DarkBlue).bold();
        let box_w = lines
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
            + 4;
        let box_h = lines.len() as u16 + 2;
        let x0 = viewport.width.saturating_sub(box_w) / 2;
        let y0 = viewport.height.saturating_sub(box_h) / 2;

        fb.fill_rect(x0, y0, box_w, box_h, ' ', style);
        for (i, line) in lines.iter().enumerate() {
            let lx = x0 + (box_w.saturating_sub(line.chars().count() as u16)) / 2;
            fb.put_str(lx, y0 + 1 + i as u16, line, style);
        }
    }
}

const CONTINUE_PROMPT: &str = "press any key to continue";

const INTRO_TEXT: &[&str] = &[
    "Sokoban",
    "",
    "Push every box onto a marked goal tile.",
    "Only one box moves at a time.",
    "",
    "arrows / wasd  move",
    "r              reset level",
    "n              next level",
    "q / Esc        quit",
    "",
    "press any key to start",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_levels;
    use crate::core::LevelSession;
    use crate::types::Direction;

    fn chars_at_row(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).unwrap().ch)
            .collect()
    }

    #[test]
    fn board_glyphs_land_in_the_framebuffer() {
        let session = LevelSession::new(parse_levels("#####\n#@B.#\n#..P#\n#####").unwrap());
        let view = GameView::default();
        let fb = view.render(&session, None, false, Viewport::new(5, 6));

        // Board is drawn at the top-left of a viewport that exactly fits it.
        assert_eq!(chars_at_row(&fb, 0), "█████");
        assert_eq!(chars_at_row(&fb, 1), "█@■ █");
        assert_eq!(chars_at_row(&fb, 2), "█  ·█");
    }

    #[test]
    fn caption_shows_level_and_step_label() {
        let mut session = LevelSession::new(parse_levels("#####\n#@B.#\n#..P#\n#####").unwrap());
        session.apply_move(Direction::Right);

        let view = GameView::default();
        let fb = view.render(&session, Some(MoveOutcome::Pushed), false, Viewport::new(40, 10));
        let caption = chars_at_row(&fb, 9);
        assert!(caption.contains("level 1/1"));
        assert!(caption.contains("1 step"));
        assert!(caption.contains("push"));
    }

    #[test]
    fn injected_label_is_used() {
        let session = LevelSession::new(parse_levels("#@B.P#").unwrap());
        let view = GameView::new(|n| format!("<{}>", n));
        let fb = view.render(&session, None, false, Viewport::new(40, 5));
        assert!(chars_at_row(&fb, 4).contains("<0>"));
    }

    #[test]
    fn english_step_label_agrees_with_count() {
        assert_eq!(english_steps(0), "0 steps");
        assert_eq!(english_steps(1), "1 step");
        assert_eq!(english_steps(2), "2 steps");
    }
}
