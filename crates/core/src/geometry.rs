//! Terminal geometry tracking and the "display too small" notice.

use arrayvec::ArrayVec;

use crate::text::{centered_x, spans_to_cells, spans_width, styled, text_width, Span};
use crate::types::{Cell, CellStyle, GeometryLimits, Rgb};

pub const TOO_SMALL_TITLE: &str = "Display is too small!";

/// Styled text at an absolute terminal position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeLine {
    pub x: u16,
    pub y: u16,
    pub cells: Vec<Cell>,
}

impl NoticeLine {
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

/// Current terminal size and whether it can hold the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    columns: u16,
    rows: u16,
    limits: GeometryLimits,
}

impl DisplayGeometry {
    pub fn new(columns: u16, rows: u16, limits: GeometryLimits) -> Self {
        Self {
            columns,
            rows,
            limits,
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn limits(&self) -> GeometryLimits {
        self.limits
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
    }

    /// True when the terminal is at least the minimum size in both directions.
    pub fn is_satisfied(&self) -> bool {
        self.columns >= self.limits.minimum_columns && self.rows >= self.limits.minimum_rows
    }

    /// True when the terminal is too small for the grid but large enough for the notice.
    pub fn shows_notice(&self) -> bool {
        !self.is_satisfied()
            && self.columns >= self.limits.required_columns
            && self.rows >= self.limits.required_rows
    }

    /// Lines of the size notice, centered on the real terminal.
    ///
    /// The title sits on row `rows / 2 - 1` with the subtitle right below it.
    /// Each `current / minimum` pair is green when that dimension is large
    /// enough and red otherwise.
    pub fn notice(&self) -> Option<ArrayVec<NoticeLine, 2>> {
        if !self.shows_notice() {
            return None;
        }

        let title_style = CellStyle::fg(Rgb::YELLOW_BRIGHT);
        let pass = |ok: bool| {
            if ok {
                CellStyle::fg(Rgb::GREEN_BRIGHT)
            } else {
                CellStyle::fg(Rgb::RED_BRIGHT)
            }
        };

        let columns = format!("{} / {}", self.columns, self.limits.minimum_columns);
        let rows = format!("{} / {}", self.rows, self.limits.minimum_rows);
        let subtitle = [
            Span::plain("Minimum: "),
            Span::new(&columns, pass(self.columns >= self.limits.minimum_columns)),
            Span::plain(" x "),
            Span::new(&rows, pass(self.rows >= self.limits.minimum_rows)),
        ];

        let y = (self.rows / 2).saturating_sub(1);
        let mut lines = ArrayVec::new();
        lines.push(NoticeLine {
            x: centered_x(self.columns, text_width(TOO_SMALL_TITLE)),
            y,
            cells: styled(TOO_SMALL_TITLE, title_style),
        });
        lines.push(NoticeLine {
            x: centered_x(self.columns, spans_width(&subtitle)),
            y: y.saturating_add(1),
            cells: spans_to_cells(&subtitle),
        });
        Some(lines)
    }
}
