//! termstage (workspace facade crate).
//!
//! Re-exports the member crates under one roof as
//! `termstage::{types, core, input, term, config, engine}`.

pub use termstage_config as config;
pub use termstage_core as core;
pub use termstage_engine as engine;
pub use termstage_input as input;
pub use termstage_term as term;
pub use termstage_types as types;
