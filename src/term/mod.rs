//! Terminal layer: framebuffer, renderer, and the pure game view.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{english_steps, GameView, StepsLabel, Viewport};
pub use renderer::TerminalRenderer;
