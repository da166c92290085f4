//! The terminal boundary used by the tick step.

use anyhow::Result;

use crate::types::Cell;

/// A character display the shell can draw on.
///
/// Writes may be buffered until [`flush`](Surface::flush).
pub trait Surface {
    /// Current `(columns, rows)`.
    fn size(&self) -> Result<(u16, u16)>;

    /// Blank the whole display and home the cursor.
    fn clear(&mut self) -> Result<()>;

    /// Move the cursor to `(x, y)` and write `cells` verbatim.
    fn write_at(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

/// In-memory display for headless runs and tests.
///
/// Keeps a character screen of the current size plus counters for each
/// operation. Writes are clipped at the right edge, as on a terminal with
/// line wrap disabled.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    columns: u16,
    rows: u16,
    screen: Vec<Cell>,
    writes: usize,
    clears: usize,
    flushes: usize,
}

impl MemorySurface {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            screen: vec![Cell::BLANK; columns as usize * rows as usize],
            writes: 0,
            clears: 0,
            flushes: 0,
        }
    }

    /// Change the display size. Content is lost, as after a real resize + clear.
    pub fn set_size(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        self.screen = vec![Cell::BLANK; columns as usize * rows as usize];
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(self.screen[y as usize * self.columns as usize + x as usize])
    }

    pub fn row_text(&self, y: u16) -> String {
        (0..self.columns)
            .filter_map(|x| self.cell(x, y))
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }

    /// Whether any row contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        (0..self.rows).any(|y| self.row_text(y).contains(needle))
    }

    /// Number of positioned writes since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.columns, self.rows))
    }

    fn clear(&mut self) -> Result<()> {
        self.screen.fill(Cell::BLANK);
        self.clears += 1;
        Ok(())
    }

    fn write_at(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        self.writes += 1;
        if y >= self.rows {
            return Ok(());
        }
        let row = y as usize * self.columns as usize;
        for (dx, cell) in cells.iter().enumerate() {
            let cx = x as usize + dx;
            if cx >= self.columns as usize {
                break;
            }
            self.screen[row + cx] = *cell;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
