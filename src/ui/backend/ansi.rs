//! Write a [`CellBuffer`] as truecolor ANSI text.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Color as CColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor,
};

use crate::ui::backend::cells::CellBuffer;
use crate::ui::core::style::{Color, Style};

fn to_crossterm(color: Color) -> CColor {
    CColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Emit every row of `buf`, changing colors only when the style changes.
pub fn write_buffer<W: Write>(out: &mut W, buf: &CellBuffer) -> io::Result<()> {
    for y in 0..buf.rows() {
        let mut current: Option<Style> = None;
        for cell in buf.row(y) {
            if current != Some(cell.style) {
                queue!(out, ResetColor)?;
                if let Some(fg) = cell.style.fg {
                    queue!(out, SetForegroundColor(to_crossterm(fg)))?;
                }
                if let Some(bg) = cell.style.bg {
                    queue!(out, SetBackgroundColor(to_crossterm(bg)))?;
                }
                current = Some(cell.style);
            }
            queue!(out, Print(&cell.symbol))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ansi.rs"]
mod tests;
