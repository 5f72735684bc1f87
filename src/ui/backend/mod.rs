//! Rendering backends.
//!
//! Elements only ever see a [`crate::ui::core::painter::DrawContext`]; the
//! recorded commands are turned into output here.

use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, cmds: &[PaintCmd]);
}

#[cfg(feature = "ansi")]
pub mod ansi;
pub mod cells;
