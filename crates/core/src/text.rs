//! Text placement helpers used by scene drawing and the size notice.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::grid::Grid;
use crate::types::{Cell, CellStyle};

/// A piece of text sharing one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub style: CellStyle,
}

impl<'a> Span<'a> {
    pub const fn new(text: &'a str, style: CellStyle) -> Self {
        Self { text, style }
    }

    pub const fn plain(text: &'a str) -> Self {
        Self {
            text,
            style: CellStyle::PLAIN,
        }
    }
}

/// Display width in terminal columns, saturated to `u16`.
pub fn text_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Left column that centers `content` columns inside `area` columns.
pub fn centered_x(area: u16, content: u16) -> u16 {
    area.saturating_sub(content) / 2
}

/// Cells for `text` laid out as [`Grid::put_str`] would lay them out.
pub fn styled(text: &str, style: CellStyle) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(text.len());
    push_styled(&mut cells, text, style);
    cells
}

pub fn spans_to_cells(spans: &[Span<'_>]) -> Vec<Cell> {
    let mut cells = Vec::new();
    for span in spans {
        push_styled(&mut cells, span.text, span.style);
    }
    cells
}

fn push_styled(cells: &mut Vec<Cell>, text: &str, style: CellStyle) {
    for ch in text.chars() {
        match ch.width() {
            Some(1) => cells.push(style.into_cell(ch)),
            Some(2) => {
                cells.push(style.into_cell(ch));
                cells.push(Cell::CONTINUATION);
            }
            _ => {}
        }
    }
}

pub fn spans_width(spans: &[Span<'_>]) -> u16 {
    spans
        .iter()
        .fold(0u16, |acc, s| acc.saturating_add(text_width(s.text)))
}

/// Write `text` centered on row `y`. Returns the starting column.
pub fn put_centered(grid: &mut Grid, y: u16, text: &str, style: CellStyle) -> u16 {
    let x = centered_x(grid.width(), text_width(text));
    grid.put_str(x, y, text, style);
    x
}

/// Write spans back to back, centered as one line on row `y`.
pub fn put_spans_centered(grid: &mut Grid, y: u16, spans: &[Span<'_>]) -> u16 {
    let x = centered_x(grid.width(), spans_width(spans));
    let mut cx = x;
    for span in spans {
        cx = grid.put_str(cx, y, span.text, span.style);
    }
    x
}

/// Write a multi-line block starting at row `y`.
///
/// Lines keep their relative indentation: the block is centered using its
/// widest line. Returns the number of lines written.
pub fn put_block_centered(grid: &mut Grid, y: u16, block: &str, style: CellStyle) -> u16 {
    let widest = block.lines().map(text_width).max().unwrap_or(0);
    let x = centered_x(grid.width(), widest);
    let mut rows = 0u16;
    for (i, line) in block.lines().enumerate() {
        grid.put_str(x, y.saturating_add(i as u16), line, style);
        rows = rows.saturating_add(1);
    }
    rows
}
