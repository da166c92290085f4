//! Start menu: title banner plus Continue / New Game / Settings / Exit.
//!
//! "Continue" is only available when the save file has a profile. Without
//! one it is drawn dimmed and the selection cannot move onto it.

use super::menu::{draw_hint, draw_menu, marker_padding, Choice};
use super::{SceneContext, Step};
use crate::grid::Grid;
use crate::text::put_block_centered;
use crate::types::{CellStyle, Control, SceneId, TITLE_ROW};

pub const START_CHOICES: [&str; 4] = ["Continue", "New Game", "Settings", "Exit"];

const CONTINUE: usize = 0;
const NEW_GAME: usize = 1;
const SETTINGS: usize = 2;
const EXIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartState {
    index: usize,
    has_profile: bool,
}

impl StartState {
    pub fn enter(ctx: &SceneContext<'_>) -> Self {
        Self::new(ctx.username.is_some_and(|name| !name.is_empty()))
    }

    pub fn new(has_profile: bool) -> Self {
        Self {
            index: NEW_GAME,
            has_profile,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn has_profile(&self) -> bool {
        self.has_profile
    }

    /// Lowest selectable index.
    pub fn floor(&self) -> usize {
        if self.has_profile {
            CONTINUE
        } else {
            NEW_GAME
        }
    }

    pub fn choices(&self) -> [Choice; 4] {
        std::array::from_fn(|i| Choice {
            label: START_CHOICES[i],
            enabled: i != CONTINUE || self.has_profile,
        })
    }

    pub(crate) fn handle(&mut self, control: Control) -> Step {
        match control {
            Control::Up => {
                self.index = self.index.saturating_sub(1).max(self.floor());
                Step::Stay
            }
            Control::Down => {
                self.index = (self.index + 1).min(START_CHOICES.len() - 1);
                Step::Stay
            }
            Control::Select => match self.index {
                CONTINUE | NEW_GAME => Step::Goto(SceneId::Test),
                SETTINGS => Step::Goto(SceneId::Settings),
                EXIT => Step::Exit,
                _ => Step::Stay,
            },
            _ => Step::Stay,
        }
    }

    pub(crate) fn draw(&self, ctx: &SceneContext<'_>, grid: &mut Grid) {
        let title_rows = put_block_centered(grid, TITLE_ROW, ctx.title, CellStyle::PLAIN.bold());
        let top = TITLE_ROW.saturating_add(title_rows).saturating_add(3);
        draw_menu(
            grid,
            top,
            2,
            &self.choices(),
            self.index,
            marker_padding(ctx.tick, ctx.framerate),
        );
        draw_hint(grid, ctx.bindings, "select");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_stops_at_new_game_without_profile() {
        let mut s = StartState::new(false);
        assert_eq!(s.index(), 1);
        s.handle(Control::Up);
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn up_reaches_continue_with_profile() {
        let mut s = StartState::new(true);
        s.handle(Control::Up);
        assert_eq!(s.index(), 0);
        s.handle(Control::Up);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn down_stops_at_last_choice() {
        let mut s = StartState::new(false);
        s.handle(Control::Down);
        s.handle(Control::Down);
        assert_eq!(s.index(), 3);
        s.handle(Control::Down);
        assert_eq!(s.index(), 3);
    }

    #[test]
    fn select_effects() {
        let mut s = StartState::new(true);
        assert_eq!(s.handle(Control::Select), Step::Goto(SceneId::Test));
        s.handle(Control::Up);
        assert_eq!(s.handle(Control::Select), Step::Goto(SceneId::Test));
        s.handle(Control::Down);
        s.handle(Control::Down);
        assert_eq!(s.handle(Control::Select), Step::Goto(SceneId::Settings));
        s.handle(Control::Down);
        assert_eq!(s.handle(Control::Select), Step::Exit);
    }

    #[test]
    fn continue_disabled_without_profile() {
        let s = StartState::new(false);
        let choices = s.choices();
        assert!(!choices[0].enabled);
        assert!(choices[1..].iter().all(|c| c.enabled));
        assert!(StartState::new(true).choices()[0].enabled);
    }
}
