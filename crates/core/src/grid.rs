//! Fixed-size character grid.

use unicode_width::UnicodeWidthChar;

use crate::types::{Cell, CellStyle};

/// 2D grid of styled character cells, stored row-major.
///
/// Linear index of `(x, y)` is `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One visual row, or an empty slice past the bottom edge.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.cells[start..start + w]
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Overwrite cells starting at a linear index. Cells past the end are dropped.
    pub fn set_run(&mut self, index: usize, cells: &[Cell]) {
        if index >= self.cells.len() {
            return;
        }
        let end = (index + cells.len()).min(self.cells.len());
        self.cells[index..end].copy_from_slice(&cells[..end - index]);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write a string on one row, clipped at the right edge.
    ///
    /// Double-width characters take two cells, the second one a
    /// [`Cell::CONTINUATION`]; one that would straddle the edge is dropped.
    /// Zero-width and control characters are skipped. Returns the column
    /// after the last written character.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cx.saturating_add(w) > self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            if w == 2 {
                self.set(cx + 1, y, Cell::CONTINUATION);
            }
            cx += w;
        }
        cx
    }

    /// Row text without styling, trailing blanks included.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut g = Grid::new(3, 2);
        g.set(3, 0, CellStyle::PLAIN.into_cell('x'));
        g.set(0, 2, CellStyle::PLAIN.into_cell('x'));
        assert!(g.cells().iter().all(|c| *c == Cell::BLANK));
        assert_eq!(g.get(3, 0), None);
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut g = Grid::new(4, 1);
        let end = g.put_str(2, 0, "abc", CellStyle::PLAIN);
        assert_eq!(end, 4);
        assert_eq!(g.row_text(0), "  ab");
    }

    #[test]
    fn wide_chars_take_two_cells() {
        let mut g = Grid::new(6, 1);
        let end = g.put_str(1, 0, "ＡＢ", CellStyle::PLAIN);
        assert_eq!(end, 5);
        assert_eq!(g.get(1, 0).map(|c| c.ch), Some('Ａ'));
        assert_eq!(g.get(2, 0), Some(Cell::CONTINUATION));
        assert_eq!(g.get(3, 0).map(|c| c.ch), Some('Ｂ'));
        assert_eq!(g.get(5, 0), Some(Cell::BLANK));
        assert_eq!(g.row_text(0), " ＡＢ ");
    }

    #[test]
    fn wide_char_at_edge_is_dropped() {
        let mut g = Grid::new(3, 1);
        assert_eq!(g.put_str(1, 0, "aＡ", CellStyle::PLAIN), 2);
        assert_eq!(g.row_text(0), " a ");
    }

    #[test]
    fn linear_index_is_row_major() {
        let mut g = Grid::new(5, 3);
        g.put_char(2, 1, 'z', CellStyle::PLAIN);
        assert_eq!(g.cells()[5 + 2].ch, 'z');
    }

    #[test]
    fn set_run_truncates_at_end() {
        let mut g = Grid::new(2, 2);
        let cells = [CellStyle::PLAIN.into_cell('a'); 3];
        g.set_run(2, &cells);
        assert_eq!(g.row_text(1), "aa");
        g.set_run(4, &cells);
        assert_eq!(g.len(), 4);
    }
}
