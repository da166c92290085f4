//! Scene state machine.
//!
//! Exactly one scene is active. Each tick the machine receives at most one
//! input event, lets the active scene react to it, then has the (possibly
//! new) scene draw itself into the render grid. Scene-private state lives in
//! a [`SceneState`] variant that is created lazily on entry and dropped on
//! exit, so re-entering a scene always starts fresh.

mod menu;
pub mod settings;
pub mod start;

use crate::grid::Grid;
use crate::types::{Control, GeometryLimits, InputEvent, KeyBindings, SceneId};

pub use menu::{marker_padding, Choice};
pub use settings::{SettingsState, SETTINGS_CHOICES};
pub use start::{StartState, START_CHOICES};
pub use test::TestState;

/// Read-only session data a scene may consult while updating and drawing.
#[derive(Debug, Clone, Copy)]
pub struct SceneContext<'a> {
    pub bindings: &'a KeyBindings,
    /// Profile name from the save file, if one exists.
    pub username: Option<&'a str>,
    pub title: &'a str,
    pub limits: GeometryLimits,
    pub framerate: u32,
    pub input_queue: usize,
    /// Ticks elapsed since startup; drives animation.
    pub tick: u64,
}

/// What an update asks of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Transition { from: SceneId, to: SceneId },
    Exit,
}

/// Scene-level reaction to one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Stay,
    Goto(SceneId),
    Exit,
}

/// Transient state of the active scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneState {
    Start(StartState),
    Settings(SettingsState),
    Test(TestState),
}

impl SceneState {
    pub fn enter(id: SceneId, ctx: &SceneContext<'_>) -> Self {
        match id {
            SceneId::Start => SceneState::Start(StartState::enter(ctx)),
            SceneId::Settings => SceneState::Settings(SettingsState::default()),
            SceneId::Test => SceneState::Test(TestState::default()),
        }
    }

    pub fn id(&self) -> SceneId {
        match self {
            SceneState::Start(_) => SceneId::Start,
            SceneState::Settings(_) => SceneId::Settings,
            SceneState::Test(_) => SceneId::Test,
        }
    }

    /// Every key press reaching the scene, bound or not.
    fn observe(&mut self, event: &InputEvent) {
        if let SceneState::Test(s) = self {
            s.observe(event);
        }
    }

    /// A session consumes the exit key at intake, so scenes treat
    /// [`Control::Exit`] like any other key they do not use.
    fn handle(&mut self, control: Control) -> Step {
        match self {
            SceneState::Start(s) => s.handle(control),
            SceneState::Settings(s) => s.handle(control),
            SceneState::Test(s) => s.handle(control),
        }
    }

    fn draw(&self, ctx: &SceneContext<'_>, grid: &mut Grid) {
        match self {
            SceneState::Start(s) => s.draw(ctx, grid),
            SceneState::Settings(s) => s.draw(ctx, grid),
            SceneState::Test(s) => s.draw(ctx, grid),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SceneMachine {
    scene: SceneId,
    state: Option<SceneState>,
}

impl Default for SceneMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneMachine {
    pub fn new() -> Self {
        Self::starting_at(SceneId::Start)
    }

    pub fn starting_at(scene: SceneId) -> Self {
        Self { scene, state: None }
    }

    pub fn scene(&self) -> SceneId {
        self.scene
    }

    /// State of the active scene, once it has been entered.
    pub fn state(&self) -> Option<&SceneState> {
        self.state.as_ref()
    }

    /// Run one tick: react to `input` (if any), then redraw into `grid`.
    ///
    /// Keys not bound to a control change no selection, though the test
    /// scene still records their names. On a transition the new scene is
    /// entered and drawn in the same tick. On exit nothing is drawn.
    pub fn update(
        &mut self,
        input: Option<&InputEvent>,
        ctx: &SceneContext<'_>,
        grid: &mut Grid,
    ) -> Effect {
        let mut effect = Effect::None;

        if let Some(event) = input {
            let scene = self.scene;
            let state = self
                .state
                .get_or_insert_with(|| SceneState::enter(scene, ctx));
            state.observe(event);
            if let Some(control) = ctx.bindings.control_for(event) {
                match state.handle(control) {
                    Step::Stay => {}
                    Step::Exit => return Effect::Exit,
                    Step::Goto(to) => {
                        effect = Effect::Transition { from: scene, to };
                        self.scene = to;
                        self.state = None;
                    }
                }
            }
        }

        let scene = self.scene;
        let state = self
            .state
            .get_or_insert_with(|| SceneState::enter(scene, ctx));
        state.draw(ctx, grid);
        effect
    }
}
