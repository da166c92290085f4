//! Session: all mutable shell state, owned in one place.
//!
//! The session is fed from three directions (ticks, key presses, resizes),
//! always on the same thread, one call at a time. Each call runs to
//! completion, so a resize can never land halfway through a tick.

use anyhow::Result;
use tracing::{debug, trace};

use crate::config::Config;
use crate::core::{
    DisplayGeometry, Effect, FrameBuffer, Grid, InputQueue, RenderStats, SceneContext,
    SceneMachine, SceneState,
};
use crate::input::should_exit;
use crate::term::Surface;
use crate::types::{InputEvent, KeyBindings, SceneId};

/// Result of handing a key press to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intake {
    Queued,
    Exit,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The terminal is too small; nothing was updated or drawn.
    Suspended,
    Rendered(RenderStats),
    Exit,
}

pub struct Session {
    geometry: DisplayGeometry,
    buffers: FrameBuffer,
    queue: InputQueue,
    scenes: SceneMachine,
    bindings: KeyBindings,
    username: Option<String>,
    title: String,
    framerate: u32,
}

impl Session {
    /// Build a session for a terminal of `columns x rows`.
    ///
    /// The grid is always `minimum_columns x minimum_rows`, whatever the
    /// terminal size.
    pub fn new(config: &Config, columns: u16, rows: u16) -> Self {
        let limits = config.presets.limits();
        Self {
            geometry: DisplayGeometry::new(columns, rows, limits),
            buffers: FrameBuffer::new(limits.minimum_columns, limits.minimum_rows),
            queue: InputQueue::new(config.save.settings.input_queue),
            scenes: SceneMachine::new(),
            bindings: config.save.bindings(),
            username: config.save.profile().map(str::to_string),
            title: config.assets.title().to_string(),
            framerate: config.presets.framerate.max(1),
        }
    }

    pub fn scene(&self) -> SceneId {
        self.scenes.scene()
    }

    pub fn scene_state(&self) -> Option<&SceneState> {
        self.scenes.state()
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    /// What the terminal currently shows, as far as the grid is concerned.
    pub fn frame(&self) -> &Grid {
        self.buffers.frame()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn framerate(&self) -> u32 {
        self.framerate
    }

    /// Prepare the display: clear it and show the size notice if needed.
    pub fn start<S: Surface>(&mut self, surface: &mut S) -> Result<()> {
        surface.clear()?;
        self.buffers.invalidate();
        self.show_notice(surface)?;
        surface.flush()
    }

    /// Take a key press from the event source.
    ///
    /// The exit key short-circuits the queue; everything else waits for the
    /// next tick.
    pub fn accept_input(&mut self, event: InputEvent) -> Intake {
        if should_exit(&event, &self.bindings) {
            debug!(key = %event.name, "exit key pressed");
            return Intake::Exit;
        }
        let dropped = self.queue.push(event);
        if dropped > 0 {
            debug!(dropped, capacity = self.queue.capacity(), "input queue full, dropped oldest");
        }
        Intake::Queued
    }

    /// Apply a terminal resize.
    ///
    /// The terminal is cleared and the on-screen frame forgotten, so the
    /// next rendered tick repaints everything. Scene state is kept.
    pub fn resize<S: Surface>(&mut self, columns: u16, rows: u16, surface: &mut S) -> Result<()> {
        surface.clear()?;
        self.geometry.resize(columns, rows);
        self.buffers.invalidate();
        debug!(
            columns,
            rows,
            satisfied = self.geometry.is_satisfied(),
            "terminal resized"
        );
        self.show_notice(surface)?;
        surface.flush()
    }

    /// Run one tick: pop at most one input, update the scene, write the diff.
    pub fn tick<S: Surface>(&mut self, tick: u64, surface: &mut S) -> Result<TickOutcome> {
        if !self.geometry.is_satisfied() {
            return Ok(TickOutcome::Suspended);
        }

        let input = self.queue.pop_one();
        let ctx = SceneContext {
            bindings: &self.bindings,
            username: self.username.as_deref(),
            title: &self.title,
            limits: self.geometry.limits(),
            framerate: self.framerate,
            input_queue: self.queue.capacity(),
            tick,
        };

        match self
            .scenes
            .update(input.as_ref(), &ctx, self.buffers.render_mut())
        {
            Effect::None => {}
            Effect::Transition { from, to } => debug!(%from, %to, "scene transition"),
            Effect::Exit => {
                debug!("exit selected");
                return Ok(TickOutcome::Exit);
            }
        }

        let stats = self.present(surface)?;
        trace!(tick, runs = stats.runs, cells = stats.cells, "frame presented");
        Ok(TickOutcome::Rendered(stats))
    }

    fn present<S: Surface>(&mut self, surface: &mut S) -> Result<RenderStats> {
        let runs = self.buffers.diff();
        let width = self.buffers.width();
        let mut stats = RenderStats::default();
        for run in &runs {
            let (x, y) = run.position(width);
            surface.write_at(x, y, &run.cells)?;
            stats.runs += 1;
            stats.cells += run.len();
        }
        if stats.runs > 0 {
            surface.flush()?;
        }
        self.buffers.commit();
        Ok(stats)
    }

    fn show_notice<S: Surface>(&self, surface: &mut S) -> Result<()> {
        if let Some(lines) = self.geometry.notice() {
            for line in &lines {
                surface.write_at(line.x, line.y, &line.cells)?;
            }
        }
        Ok(())
    }
}
