//! Shared menu drawing: centered choices with a pulsing selection marker,
//! plus the key hint row.

use crate::grid::Grid;
use crate::text::{put_centered, put_spans_centered, Span};
use crate::types::{CellStyle, KeyBindings, Rgb};

/// Padding steps of the pulsing selection marker.
const PULSE: [usize; 4] = [0, 1, 2, 1];

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub enabled: bool,
}

/// Extra spaces between the selection markers and the label at `tick`.
///
/// One full pulse takes about a second at any framerate.
pub fn marker_padding(tick: u64, framerate: u32) -> usize {
    let step = u64::from((framerate / 4).max(1));
    PULSE[((tick / step) % PULSE.len() as u64) as usize]
}

pub(crate) fn selected_style() -> CellStyle {
    CellStyle::fg(Rgb::YELLOW_BRIGHT).bold()
}

/// Draw choices centered, one every `gap` rows starting at `top`.
pub(crate) fn draw_menu(
    grid: &mut Grid,
    top: u16,
    gap: u16,
    choices: &[Choice],
    selected: usize,
    padding: usize,
) {
    for (i, choice) in choices.iter().enumerate() {
        let y = top.saturating_add((i as u16).saturating_mul(gap));
        if i == selected && choice.enabled {
            let pad = " ".repeat(1 + padding);
            let line = format!(">{pad}{}{pad}<", choice.label);
            put_centered(grid, y, &line, selected_style());
        } else if choice.enabled {
            put_centered(grid, y, choice.label, CellStyle::PLAIN);
        } else {
            put_centered(grid, y, choice.label, CellStyle::fg(Rgb::GRAY).dim());
        }
    }
}

/// Key help on the second to last row.
pub(crate) fn draw_hint(grid: &mut Grid, bindings: &KeyBindings, select_label: &str) {
    let y = grid.height().saturating_sub(2);
    let key = CellStyle::fg(Rgb::CYAN_BRIGHT);
    let text = CellStyle::fg(Rgb::GRAY);
    let select_text = format!(" {select_label}   ");
    put_spans_centered(
        grid,
        y,
        &[
            Span::new(&bindings.up, key),
            Span::new("/", text),
            Span::new(&bindings.down, key),
            Span::new(" move   ", text),
            Span::new(&bindings.select, key),
            Span::new(&select_text, text),
            Span::new(&bindings.exit, key),
            Span::new(" quit", text),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_cycles_over_one_second() {
        let pads: Vec<usize> = (0..4).map(|i| marker_padding(i * 7, 30)).collect();
        assert_eq!(pads, vec![0, 1, 2, 1]);
        assert_eq!(marker_padding(28, 30), 0);
    }

    #[test]
    fn low_framerate_still_advances() {
        assert_eq!(marker_padding(0, 1), 0);
        assert_eq!(marker_padding(1, 1), 1);
        assert_eq!(marker_padding(2, 1), 2);
    }

    #[test]
    fn disabled_choice_is_dimmed_even_when_selected() {
        let mut g = Grid::new(20, 1);
        let choices = [Choice {
            label: "Off",
            enabled: false,
        }];
        draw_menu(&mut g, 0, 1, &choices, 0, 0);
        let row = g.row(0);
        let cell = row.iter().find(|c| c.ch == 'O').unwrap();
        assert!(cell.style.dim);
        assert!(!g.row_text(0).contains('>'));
    }
}
