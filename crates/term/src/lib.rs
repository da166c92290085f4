//! Terminal output module.
//!
//! The tick step talks to the display only through the [`Surface`] trait:
//! clear, positioned writes of styled cells, and flush. [`TerminalRenderer`]
//! implements it on top of crossterm; [`MemorySurface`] keeps an in-memory
//! screen for headless runs and tests.

pub mod renderer;
pub mod surface;

pub use termstage_core as core;
pub use termstage_types as types;

pub use renderer::{encode_cells_into, encode_runs_into, TerminalRenderer};
pub use surface::{MemorySurface, Surface};
