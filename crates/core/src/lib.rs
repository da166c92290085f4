//! Core shell logic - pure, deterministic, and testable
//!
//! This crate holds everything the tick step computes, with **no terminal
//! I/O**: the double-buffered grid, changed-run detection, the input queue,
//! display geometry, and the scene state machine. The terminal layer only
//! ever sees the runs produced here.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size grid of styled cells
//! - [`frame`]: `render`/`frame` double buffer with commit and invalidate
//! - [`diff`]: per-row changed-run detection and replay
//! - [`queue`]: bounded drop-oldest input FIFO
//! - [`geometry`]: terminal size gate and the "display too small" notice
//! - [`text`]: centering helpers
//! - [`scene`]: scene states and the [`SceneMachine`]
//!
//! # Example
//!
//! ```
//! use termstage_core::{FrameBuffer, InputQueue};
//! use termstage_core::types::{CellStyle, InputEvent};
//!
//! let mut fb = FrameBuffer::new(8, 2);
//! fb.render_mut().put_str(0, 1, "hi", CellStyle::PLAIN);
//!
//! let runs = fb.diff();
//! assert_eq!(runs.len(), 1);
//! assert_eq!(runs[0].position(8), (0, 1));
//! fb.commit();
//!
//! let mut queue = InputQueue::new(2);
//! queue.push(InputEvent::named("up"));
//! assert_eq!(queue.pop_one(), Some(InputEvent::named("up")));
//! ```

pub mod diff;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod queue;
pub mod scene;
pub mod text;

pub use termstage_types as types;

pub use diff::{apply_runs, diff_runs, for_each_changed_run, DiffRun, RenderStats};
pub use frame::FrameBuffer;
pub use geometry::{DisplayGeometry, NoticeLine, TOO_SMALL_TITLE};
pub use grid::Grid;
pub use queue::InputQueue;
pub use scene::{Effect, SceneContext, SceneMachine, SceneState};
