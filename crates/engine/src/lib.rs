//! Engine module - session state and the tick loop
//!
//! [`Session`] is the single owner of geometry, frame buffers, the input
//! queue and the scene machine. [`run`] drives it from a fixed-rate ticker
//! and a terminal event channel on one task:
//!
//! ```text
//! tick   -> geometry gate -> pop one input -> scene update -> diff write -> commit
//! key    -> exit check -> queue
//! resize -> clear -> geometry -> forget frame -> size notice
//! ```

pub mod scheduler;
pub mod session;

pub use termstage_config as config;
pub use termstage_core as core;
pub use termstage_input as input;
pub use termstage_term as term;
pub use termstage_types as types;

pub use scheduler::{run, TickScheduler};
pub use session::{Intake, Session, TickOutcome};
