//! Core module - pure puzzle logic with no external dependencies
//!
//! Everything here is synchronous call-and-return: the host drives the
//! session one input at a time and reads outcomes back. No I/O, no UI, no
//! locking.

pub mod grid;
pub mod level;
pub mod session;

// Re-export commonly used types
pub use grid::GridState;
pub use level::{load_levels, parse_levels, Level, LevelError};
pub use session::{LevelSession, SessionPhase};
