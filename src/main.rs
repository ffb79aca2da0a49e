//! Terminal Sokoban runner.
//!
//! Loads the level file, then drives the session from keyboard events: one
//! event in, one outcome out, redraw. The engine never blocks; the loop
//! waits on crossterm events.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_sokoban::core::{load_levels, LevelSession, SessionPhase};
use tui_sokoban::input::{handle_key_event, should_quit};
use tui_sokoban::term::{GameView, TerminalRenderer, Viewport};
use tui_sokoban::types::Command;

#[derive(Parser)]
#[command(version, about = "Terminal Sokoban")]
struct Args {
    /// Level file: blocks of `.#PB@` rows separated by blank lines.
    #[arg(default_value = "levels.txt")]
    levels: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load before touching the terminal so errors print normally.
    let levels = load_levels(&args.levels)
        .with_context(|| format!("loading {}", args.levels.display()))?;
    let mut session = LevelSession::new(levels);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut LevelSession) -> Result<()> {
    let view = GameView::default();
    let mut show_intro = true;
    let mut last_outcome = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(session, last_outcome, show_intro, Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if show_intro {
                    show_intro = false;
                    continue;
                }
                match session.phase() {
                    SessionPhase::Playing => {
                        if let Some(command) = handle_key_event(key) {
                            match command {
                                Command::Move(dir) => {
                                    last_outcome = Some(session.apply_move(dir));
                                }
                                Command::Reset => {
                                    session.reset();
                                    last_outcome = None;
                                }
                                Command::NextLevel => {
                                    session.advance();
                                    last_outcome = None;
                                }
                            }
                        }
                    }
                    // Completion banner: any key moves on.
                    SessionPhase::LevelComplete => {
                        session.advance();
                        last_outcome = None;
                    }
                    SessionPhase::Finished => return Ok(()),
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
