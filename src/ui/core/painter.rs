use std::ops::{Deref, DerefMut};

use super::font::{Font, FontBook, FontError};
use super::geom::{Pos, Rect};
use super::style::Color;

/// Drawing surface handed to elements during a render pass.
///
/// Coordinates passed to drawing calls are relative to the current origin,
/// which `translate` moves. `push`/`pop` save and restore origin, clip, color
/// and font together.
pub trait DrawContext {
    fn set_color(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect);

    /// Intersect the current clip with `rect`.
    fn clip_rect(&mut self, rect: Rect);

    fn reset_clip(&mut self);

    fn load_font(&mut self, face: &str, size: f64) -> Result<(), FontError>;

    /// Width of `text` in the active font.
    fn measure_string(&self, text: &str) -> f64;

    /// Draw `text` so that the fractional point (`ax`, `ay`) of its box lands on (`x`, `y`).
    fn draw_string_anchored(&mut self, text: &str, x: f64, y: f64, ax: f64, ay: f64);

    fn translate(&mut self, dx: f64, dy: f64);

    fn push(&mut self);

    fn pop(&mut self);

    /// Number of saved states currently on the stack.
    fn depth(&self) -> usize;
}

/// Saved drawing state; popped when dropped.
pub struct Saved<'a> {
    ctx: &'a mut dyn DrawContext,
}

impl<'a> Saved<'a> {
    pub fn new(ctx: &'a mut dyn DrawContext) -> Self {
        ctx.push();
        Self { ctx }
    }
}

impl<'a> Deref for Saved<'a> {
    type Target = dyn DrawContext + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<'a> DerefMut for Saved<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl Drop for Saved<'_> {
    fn drop(&mut self) {
        self.ctx.pop();
    }
}

/// Commands recorded by [`Painter`], in absolute canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCmd {
    FillRect {
        rect: Rect,
        color: Color,
        clip: Option<Rect>,
    },
    Text {
        /// Box covered by the text (width from measurement, height from the font).
        rect: Rect,
        text: String,
        color: Color,
        clip: Option<Rect>,
    },
}

#[derive(Clone, Debug)]
struct GraphicsState {
    origin: Pos,
    clip: Option<Rect>,
    color: Color,
    font: Font,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            origin: Pos::default(),
            clip: None,
            color: Color::BLACK,
            font: Font::fallback(),
        }
    }
}

/// Recording [`DrawContext`]; backends consume its commands.
#[derive(Debug)]
pub struct Painter {
    fonts: FontBook,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::with_fonts(FontBook::default())
    }

    pub fn with_fonts(fonts: FontBook) -> Self {
        Self {
            fonts,
            state: GraphicsState::default(),
            stack: Vec::new(),
            cmds: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn origin(&self) -> Pos {
        self.state.origin
    }

    pub fn clip(&self) -> Option<Rect> {
        self.state.clip
    }

    pub fn color(&self) -> Color {
        self.state.color
    }

    pub fn font(&self) -> &Font {
        &self.state.font
    }

    fn to_canvas(&self, rect: Rect) -> Rect {
        rect.translate(self.state.origin.x, self.state.origin.y)
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawContext for Painter {
    fn set_color(&mut self, color: Color) {
        self.state.color = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::FillRect {
            rect: self.to_canvas(rect),
            color: self.state.color,
            clip: self.state.clip,
        });
    }

    fn clip_rect(&mut self, rect: Rect) {
        let rect = self.to_canvas(rect);
        self.state.clip = Some(match self.state.clip {
            Some(clip) => clip.intersect(rect),
            None => rect,
        });
    }

    fn reset_clip(&mut self) {
        self.state.clip = None;
    }

    fn load_font(&mut self, face: &str, size: f64) -> Result<(), FontError> {
        self.state.font = self.fonts.load(face, size)?;
        Ok(())
    }

    fn measure_string(&self, text: &str) -> f64 {
        self.state.font.measure(text)
    }

    fn draw_string_anchored(&mut self, text: &str, x: f64, y: f64, ax: f64, ay: f64) {
        if text.is_empty() {
            return;
        }
        let w = self.measure_string(text);
        let h = self.state.font.height();
        let rect = Rect::new(x - ax * w, y - ay * h, w, h);
        self.cmds.push(PaintCmd::Text {
            rect: self.to_canvas(rect),
            text: text.to_string(),
            color: self.state.color,
            clip: self.state.clip,
        });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.origin.x += dx;
        self.state.origin.y += dy;
    }

    fn push(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn pop(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!("painter: pop without matching push"),
        }
    }

    fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
