//! Fixed-rate tick scheduling and the main loop.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::session::{Intake, Session, TickOutcome};
use crate::term::Surface;
use crate::types::TermEvent;

/// Tick clock derived from a framerate.
///
/// The tick number is computed from elapsed time rather than counted, so
/// animations stay in step with wall time even when ticks are skipped.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    period: Duration,
    started: Instant,
}

impl TickScheduler {
    pub fn new(framerate: u32) -> Self {
        Self::starting_at(framerate, Instant::now())
    }

    pub fn starting_at(framerate: u32, started: Instant) -> Self {
        Self {
            period: Self::period_for(framerate),
            started,
        }
    }

    /// `1s / framerate`, with zero treated as one tick per second.
    pub fn period_for(framerate: u32) -> Duration {
        Duration::from_secs(1) / framerate.max(1)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Tick number at `now`: whole periods elapsed since start.
    pub fn tick_at(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started).as_nanos();
        (elapsed / self.period.as_nanos().max(1)) as u64
    }

    /// Interval firing at each period boundary; late ticks are skipped, not bunched.
    pub fn interval(&self) -> Interval {
        let mut interval = time::interval_at(self.started, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval
    }
}

/// Drive `session` until exit is requested or the event source closes.
///
/// Ticks, key presses and resizes are handled one at a time on the calling
/// task.
pub async fn run<S: Surface>(
    session: &mut Session,
    surface: &mut S,
    mut events: mpsc::UnboundedReceiver<TermEvent>,
) -> Result<()> {
    let scheduler = TickScheduler::new(session.framerate());
    let mut ticker = scheduler.interval();
    session.start(surface)?;
    info!(period_ms = scheduler.period().as_millis() as u64, "tick loop started");

    loop {
        tokio::select! {
            now = ticker.tick() => {
                if session.tick(scheduler.tick_at(now), surface)? == TickOutcome::Exit {
                    info!("exit chosen from menu");
                    return Ok(());
                }
            }
            event = events.recv() => match event {
                Some(TermEvent::Input(input)) => {
                    if session.accept_input(input) == Intake::Exit {
                        info!("exit key pressed");
                        return Ok(());
                    }
                }
                Some(TermEvent::Resize { columns, rows }) => {
                    session.resize(columns, rows, surface)?;
                }
                None => {
                    debug!("event source closed");
                    return Ok(());
                }
            },
        }
    }
}
