//! Changed-run detection between two grids.
//!
//! A run is a maximal span of cells on one row where the next frame differs
//! from the frame currently on screen. Runs never wrap onto the next row, so
//! each one can be written with a single cursor move followed by plain text.

use crate::grid::Grid;
use crate::types::Cell;

/// A span of changed cells, addressed by the linear index of its first cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRun {
    pub index: usize,
    pub cells: Vec<Cell>,
}

impl DiffRun {
    /// Cursor position `(column, row)` of the run's first cell.
    pub fn position(&self, width: u16) -> (u16, u16) {
        let w = (width as usize).max(1);
        ((self.index % w) as u16, (self.index / w) as u16)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

/// Counts from one presented frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub runs: usize,
    pub cells: usize,
}

/// Visit every changed run in scan order (left to right, top to bottom).
///
/// The callback receives the linear index of the run and the cells from
/// `next`. Grids of different sizes are treated as fully changed, one run
/// per row of `next`.
pub fn for_each_changed_run(prev: &Grid, next: &Grid, mut f: impl FnMut(usize, &[Cell])) {
    let w = next.width() as usize;
    if w == 0 {
        return;
    }

    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f((y as usize) * w, next.row(y));
        }
        return;
    }

    for y in 0..next.height() {
        let a = prev.row(y);
        let b = next.row(y);
        if a == b {
            continue;
        }

        let row_start = (y as usize) * w;
        let mut x = 0;
        while x < w {
            if a[x] == b[x] {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && a[x] != b[x] {
                x += 1;
            }
            f(row_start + start, &b[start..x]);
        }
    }
}

/// Collect the changed runs between `prev` and `next`.
pub fn diff_runs(prev: &Grid, next: &Grid) -> Vec<DiffRun> {
    let mut runs = Vec::new();
    for_each_changed_run(prev, next, |index, cells| {
        runs.push(DiffRun {
            index,
            cells: cells.to_vec(),
        });
    });
    runs
}

/// Write runs onto a grid, as the terminal would see them.
pub fn apply_runs(grid: &mut Grid, runs: &[DiffRun]) {
    for run in runs {
        grid.set_run(run.index, &run.cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellStyle;

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u16;
        let mut g = Grid::new(width, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            g.put_str(0, y as u16, row, CellStyle::PLAIN);
        }
        g
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = Grid::new(5, 1);
        let b = grid_from_rows(&[" XXX "]);

        let runs = diff_runs(&a, &b);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].index, 1);
        assert_eq!(runs[0].text(), "XXX");
    }

    #[test]
    fn identical_grids_produce_no_runs() {
        let a = grid_from_rows(&["abc", "def"]);
        let b = a.clone();
        assert!(diff_runs(&a, &b).is_empty());
    }

    #[test]
    fn equal_cell_splits_runs() {
        let a = grid_from_rows(&["aaaaa"]);
        let b = grid_from_rows(&["XaXXa"]);
        let runs = diff_runs(&a, &b);
        let got: Vec<(usize, String)> = runs.iter().map(|r| (r.index, r.text())).collect();
        assert_eq!(got, vec![(0, "X".to_string()), (2, "XX".to_string())]);
    }

    #[test]
    fn runs_split_at_row_boundary() {
        let a = grid_from_rows(&["....", "...."]);
        let b = grid_from_rows(&["..XX", "XX.."]);
        let runs = diff_runs(&a, &b);
        let got: Vec<(usize, String)> = runs.iter().map(|r| (r.index, r.text())).collect();
        assert_eq!(got, vec![(2, "XX".to_string()), (4, "XX".to_string())]);
        assert_eq!(runs[1].position(4), (0, 1));
    }

    #[test]
    fn full_grid_change_emits_one_run_per_row() {
        let a = grid_from_rows(&["...", "...", "..."]);
        let b = grid_from_rows(&["abc", "def", "ghi"]);
        let runs = diff_runs(&a, &b);
        assert_eq!(runs.len(), 3);
        for (y, run) in runs.iter().enumerate() {
            assert_eq!(run.index, y * 3);
            assert_eq!(run.len(), 3);
        }
    }

    #[test]
    fn style_only_change_is_a_difference() {
        let a = grid_from_rows(&["ab"]);
        let mut b = a.clone();
        b.put_char(1, 0, 'b', CellStyle::PLAIN.dim());
        let runs = diff_runs(&a, &b);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].index, 1);
    }

    #[test]
    fn size_mismatch_is_fully_dirty() {
        let a = Grid::new(2, 2);
        let b = grid_from_rows(&["xyz", "   "]);
        let runs = diff_runs(&a, &b);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].index, 3);
        assert_eq!(runs[1].text(), "   ");
    }

    #[test]
    fn replaying_runs_reconstructs_next() {
        let a = grid_from_rows(&["hello", "world", "     "]);
        let b = grid_from_rows(&["help ", "world", "  ok "]);
        let runs = diff_runs(&a, &b);
        let mut replay = a.clone();
        apply_runs(&mut replay, &runs);
        assert_eq!(replay, b);
    }
}
