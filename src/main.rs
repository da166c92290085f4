//! termstage runner (default binary).
//!
//! Loads configuration, takes over the terminal, and runs the tick loop on a
//! single-threaded tokio runtime until the exit key or the "Exit" menu entry.

mod logging;

use anyhow::{Context, Result};

use termstage::config::Config;
use termstage::engine::{run, Session};
use termstage::input::spawn_event_source;
use termstage::term::{Surface, TerminalRenderer};

fn main() -> Result<()> {
    logging::init_from_env()?;

    // Configuration problems are reported before raw mode makes them unreadable.
    let config = Config::load_from_env().context("failed to load configuration")?;

    let mut term = TerminalRenderer::new();
    let (columns, rows) = term.size()?;
    let mut session = Session::new(&config, columns, rows);

    term.enter()?;
    let result = run_shell(&mut session, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    tracing::info!("terminal restored");
    result
}

fn run_shell(session: &mut Session, term: &mut TerminalRenderer) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build tokio runtime")?;
    let events = spawn_event_source();
    runtime.block_on(run(session, term, events))
}
