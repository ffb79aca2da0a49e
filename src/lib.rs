//! Terminal Sokoban.
//!
//! The puzzle engine lives in [`core`] and is pure call-and-return state:
//! parse levels, apply moves, check wins, reset and advance. The [`term`]
//! and [`input`] modules are the thin host shell around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
