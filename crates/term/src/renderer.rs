//! TerminalRenderer: writes positioned cell runs to a real terminal.
//!
//! All output for a frame is queued into one byte buffer and written with a
//! single `write_all` on flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::DiffRun;
use crate::surface::Surface;
use crate::types::{Cell, CellStyle, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    current_style: Option<CellStyle>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            current_style: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Surface for TerminalRenderer {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn clear(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.current_style = None;
        Ok(())
    }

    fn write_at(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        encode_cells_into(&mut self.buf, x, y, cells, &mut self.current_style)
    }

    fn flush(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.current_style = None;
        self.flush_buf()
    }
}

/// Encode one positioned write into `out`.
///
/// Style changes are emitted only when a cell's style differs from
/// `current`, which is updated to the last style written. Continuation
/// cells are skipped: the wide character before them already covers the
/// column.
pub fn encode_cells_into(
    out: &mut Vec<u8>,
    x: u16,
    y: u16,
    cells: &[Cell],
    current: &mut Option<CellStyle>,
) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    for cell in cells.iter().filter(|c| !c.is_continuation()) {
        if *current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

/// Encode a whole frame's runs into `out`, ending with a style reset.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_runs_into(runs: &[DiffRun], width: u16, out: &mut Vec<u8>) -> Result<()> {
    let mut current = None;
    for run in runs {
        let (x, y) = run.position(width);
        encode_cells_into(out, x, y, &run.cells, &mut current)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match style.fg {
        Some(rgb) => out.queue(SetForegroundColor(rgb_to_color(rgb)))?,
        None => out.queue(SetForegroundColor(Color::Reset))?,
    };
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
