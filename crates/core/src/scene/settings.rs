//! Settings viewer: key bindings and display parameters, read-only.

use super::menu::{draw_hint, draw_menu, marker_padding, Choice};
use super::{SceneContext, Step};
use crate::grid::Grid;
use crate::text::{centered_x, put_centered};
use crate::types::{CellStyle, Control, Rgb, SceneId, TITLE_ROW};

pub const SETTINGS_CHOICES: [&str; 3] = ["Controls", "Display", "Back"];

const CONTROLS: usize = 0;
const DISPLAY: usize = 1;
const BACK: usize = 2;

/// Width of the label and value columns in the details panel.
const PANEL_COLUMN: u16 = 14;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    index: usize,
}

impl SettingsState {
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn handle(&mut self, control: Control) -> Step {
        match control {
            Control::Up => {
                self.index = self.index.saturating_sub(1);
                Step::Stay
            }
            Control::Down => {
                self.index = (self.index + 1).min(SETTINGS_CHOICES.len() - 1);
                Step::Stay
            }
            Control::Select if self.index == BACK => Step::Goto(SceneId::Start),
            _ => Step::Stay,
        }
    }

    /// Label/value rows describing the highlighted section.
    pub fn details(&self, ctx: &SceneContext<'_>) -> Vec<(&'static str, String)> {
        match self.index {
            CONTROLS => vec![
                ("Up", ctx.bindings.up.clone()),
                ("Down", ctx.bindings.down.clone()),
                ("Select", ctx.bindings.select.clone()),
                ("Exit", ctx.bindings.exit.clone()),
            ],
            DISPLAY => {
                let l = ctx.limits;
                vec![
                    ("Framerate", format!("{} ticks/s", ctx.framerate)),
                    (
                        "Minimum size",
                        format!("{} x {}", l.minimum_columns, l.minimum_rows),
                    ),
                    (
                        "Notice size",
                        format!("{} x {}", l.required_columns, l.required_rows),
                    ),
                    ("Input queue", ctx.input_queue.to_string()),
                ]
            }
            _ => Vec::new(),
        }
    }

    pub(crate) fn draw(&self, ctx: &SceneContext<'_>, grid: &mut Grid) {
        put_centered(grid, TITLE_ROW, "Settings", CellStyle::PLAIN.bold());

        let choices = SETTINGS_CHOICES.map(|label| Choice {
            label,
            enabled: true,
        });
        let top = TITLE_ROW + 4;
        draw_menu(
            grid,
            top,
            2,
            &choices,
            self.index,
            marker_padding(ctx.tick, ctx.framerate),
        );

        let panel_top = top + (SETTINGS_CHOICES.len() as u16) * 2 + 2;
        let value_style = CellStyle::fg(Rgb::CYAN_BRIGHT);
        let x = centered_x(grid.width(), PANEL_COLUMN * 2);
        for (i, (label, value)) in self.details(ctx).iter().enumerate() {
            let y = panel_top + i as u16;
            grid.put_str(x, y, label, CellStyle::PLAIN);
            let w = PANEL_COLUMN as usize;
            grid.put_str(x + PANEL_COLUMN, y, &format!("{value:>w$}"), value_style);
        }
        if self.index == BACK {
            put_centered(
                grid,
                panel_top,
                "Return to the start menu",
                CellStyle::fg(Rgb::GRAY),
            );
        }

        draw_hint(grid, ctx.bindings, "select");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GeometryLimits, KeyBindings};

    #[test]
    fn only_back_leaves_the_scene() {
        let mut s = SettingsState::default();
        assert_eq!(s.handle(Control::Select), Step::Stay);
        s.handle(Control::Down);
        assert_eq!(s.handle(Control::Select), Step::Stay);
        s.handle(Control::Down);
        assert_eq!(s.handle(Control::Select), Step::Goto(SceneId::Start));
    }

    #[test]
    fn index_is_clamped_at_both_ends() {
        let mut s = SettingsState::default();
        s.handle(Control::Up);
        assert_eq!(s.index(), 0);
        for _ in 0..5 {
            s.handle(Control::Down);
        }
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn details_follow_selection() {
        let bindings = KeyBindings::default();
        let ctx = SceneContext {
            bindings: &bindings,
            username: None,
            title: "",
            limits: GeometryLimits::default(),
            framerate: 24,
            input_queue: 7,
            tick: 0,
        };
        let mut s = SettingsState::default();
        assert!(s
            .details(&ctx)
            .contains(&("Select", "return".to_string())));
        s.handle(Control::Down);
        let display = s.details(&ctx);
        assert!(display.contains(&("Framerate", "24 ticks/s".to_string())));
        assert!(display.contains(&("Input queue", "7".to_string())));
        s.handle(Control::Down);
        assert!(s.details(&ctx).is_empty());
    }
}
