//! Headless cell raster.
//!
//! The pixel canvas is divided into fixed-size cells; a fill covers every cell
//! whose center lies inside it, and text puts one grapheme per column.

use std::ops::Range;

use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Style};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub style: Style,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(cols: u16, rows: u16) -> Self {
        let len = cols as usize * rows as usize;
        Self {
            cols,
            rows,
            cells: std::iter::repeat_with(|| Cell {
                symbol: " ".to_string(),
                style: Style::default(),
            })
            .take(len)
            .collect(),
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get(idx)
    }

    pub fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get_mut(idx)
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.rows {
            return &[];
        }
        let start = y as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Symbols of one row concatenated.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.symbol.as_str()).collect()
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Grid {
    cell_w: f64,
    cell_h: f64,
    canvas: Rect,
}

impl Grid {
    fn col_at(&self, x: f64) -> Option<u16> {
        cell_index(x, self.cell_w)
    }

    fn row_at(&self, y: f64) -> Option<u16> {
        cell_index(y, self.cell_h)
    }

    fn clip(&self, clip: Option<Rect>) -> Rect {
        clip.unwrap_or(self.canvas).intersect(self.canvas)
    }
}

fn cell_index(v: f64, unit: f64) -> Option<u16> {
    let i = (v / unit).floor();
    (i >= 0.0 && i < u16::MAX as f64).then_some(i as u16)
}

/// Cells whose centers fall in `lo..hi`.
fn center_span(lo: f64, hi: f64, unit: f64, limit: u16) -> Range<u16> {
    let to_index = |v: f64| (v / unit - 0.5).ceil().clamp(0.0, limit as f64) as u16;
    to_index(lo)..to_index(hi)
}

/// Cells are never narrower or shorter than one canvas pixel.
const MIN_CELL: f64 = 1.0;

#[derive(Debug)]
pub struct CellBackend {
    buf: CellBuffer,
    grid: Grid,
}

impl CellBackend {
    pub fn new(cols: u16, rows: u16, cell_w: f64, cell_h: f64) -> Self {
        let cell_w = cell_w.max(MIN_CELL);
        let cell_h = cell_h.max(MIN_CELL);
        Self {
            buf: CellBuffer::new(cols, rows),
            grid: Grid {
                cell_w,
                cell_h,
                canvas: Rect::sized(cols as f64 * cell_w, rows as f64 * cell_h),
            },
        }
    }

    /// Enough cells to cover a `width` x `height` pixel canvas.
    pub fn for_canvas(width: f64, height: f64, cell_w: f64, cell_h: f64) -> Self {
        let cell_w = cell_w.max(MIN_CELL);
        let cell_h = cell_h.max(MIN_CELL);
        let cols = (width / cell_w).ceil().clamp(0.0, u16::MAX as f64) as u16;
        let rows = (height / cell_h).ceil().clamp(0.0, u16::MAX as f64) as u16;
        Self::new(cols, rows, cell_w, cell_h)
    }

    pub fn buffer(&self) -> &CellBuffer {
        &self.buf
    }

    pub fn into_buffer(self) -> CellBuffer {
        self.buf
    }
}

impl Backend for CellBackend {
    fn draw(&mut self, cmds: &[PaintCmd]) {
        for cmd in cmds {
            match cmd {
                PaintCmd::FillRect { rect, color, clip } => {
                    fill_rect(&mut self.buf, &self.grid, *rect, *color, *clip)
                }
                PaintCmd::Text {
                    rect,
                    text,
                    color,
                    clip,
                } => draw_text(&mut self.buf, &self.grid, *rect, text, *color, *clip),
            }
        }
    }
}

fn fill_rect(buf: &mut CellBuffer, grid: &Grid, rect: Rect, color: Color, clip: Option<Rect>) {
    let area = rect.intersect(grid.clip(clip));
    if area.is_empty() {
        return;
    }
    let style = Style::default().bg(color);
    for y in center_span(area.y, area.bottom(), grid.cell_h, buf.rows()) {
        for x in center_span(area.x, area.right(), grid.cell_w, buf.cols()) {
            let Some(cell) = buf.cell_mut(x, y) else {
                continue;
            };
            cell.symbol = " ".to_string();
            cell.style = style;
        }
    }
}

fn draw_text(
    buf: &mut CellBuffer,
    grid: &Grid,
    rect: Rect,
    text: &str,
    color: Color,
    clip: Option<Rect>,
) {
    let total = UnicodeWidthStr::width(text);
    if total == 0 || rect.w <= 0.0 {
        return;
    }
    let clip = grid.clip(clip);
    let unit = rect.w / total as f64;
    let cy = rect.y + rect.h / 2.0;
    let Some(y) = grid.row_at(cy) else {
        return;
    };
    if y >= buf.rows() {
        return;
    }
    let style = Style::default().fg(color);

    let mut offset = 0usize;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if w == 0 {
            continue;
        }
        let left = rect.x + offset as f64 * unit;
        offset += w;

        // Do not partially render wide glyphs.
        let first = Pos::new(left + unit / 2.0, cy);
        let last = Pos::new(left + (w as f64 - 0.5) * unit, cy);
        if !clip.contains(first) || !clip.contains(last) {
            continue;
        }
        let Some(x) = grid.col_at(first.x) else {
            continue;
        };

        let Some(cell) = buf.cell_mut(x, y) else {
            continue;
        };
        cell.symbol = g.to_string();
        cell.style = cell.style.patch(style);

        // Basic wide-char handling: occupy next cells as spaces.
        for dx in 1..w as u16 {
            let Some(cell) = buf.cell_mut(x.saturating_add(dx), y) else {
                break;
            };
            cell.symbol = " ".to_string();
            cell.style = cell.style.patch(style);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/cells.rs"]
mod tests;
