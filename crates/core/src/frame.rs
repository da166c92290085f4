//! Double-buffered frame state.
//!
//! `render` is the frame being built during the current tick; `frame` mirrors
//! what the terminal currently shows. After the diff has been written the
//! buffers swap and `render` starts over from blank.

use crate::diff::{diff_runs, DiffRun};
use crate::grid::Grid;

#[derive(Debug, Clone)]
pub struct FrameBuffer {
    render: Grid,
    frame: Grid,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            render: Grid::new(width, height),
            frame: Grid::new(width, height),
        }
    }

    pub fn width(&self) -> u16 {
        self.render.width()
    }

    pub fn height(&self) -> u16 {
        self.render.height()
    }

    pub fn render(&self) -> &Grid {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut Grid {
        &mut self.render
    }

    pub fn frame(&self) -> &Grid {
        &self.frame
    }

    /// Runs that turn `frame` into `render`.
    pub fn diff(&self) -> Vec<DiffRun> {
        diff_runs(&self.frame, &self.render)
    }

    /// Commit `render` as the on-screen frame and blank `render` for the next tick.
    ///
    /// Swaps instead of cloning so both allocations are reused.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.frame, &mut self.render);
        self.render.clear();
    }

    /// Forget what is on screen.
    ///
    /// Call after the terminal has been cleared; the next diff then redraws
    /// every non-blank cell of `render`.
    pub fn invalidate(&mut self) {
        self.frame.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellStyle;

    #[test]
    fn commit_moves_render_into_frame_and_blanks_render() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.render_mut().put_str(0, 0, "ab", CellStyle::PLAIN);
        let expected = fb.render().clone();

        fb.commit();

        assert_eq!(fb.frame(), &expected);
        assert_eq!(fb.render(), &Grid::new(4, 2));
    }

    #[test]
    fn redrawing_same_content_produces_empty_diff() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.render_mut().put_str(1, 1, "xy", CellStyle::PLAIN);
        assert_eq!(fb.diff().len(), 1);
        fb.commit();

        fb.render_mut().put_str(1, 1, "xy", CellStyle::PLAIN);
        assert!(fb.diff().is_empty());
    }

    #[test]
    fn erased_content_shows_up_as_blank_run() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.render_mut().put_str(0, 0, "ab", CellStyle::PLAIN);
        fb.commit();

        let runs = fb.diff();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text(), "  ");
    }

    #[test]
    fn invalidate_forces_redraw_of_content() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.render_mut().put_str(0, 0, "ab", CellStyle::PLAIN);
        fb.commit();
        fb.invalidate();

        fb.render_mut().put_str(0, 0, "ab", CellStyle::PLAIN);
        let runs = fb.diff();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text(), "ab");
    }
}
