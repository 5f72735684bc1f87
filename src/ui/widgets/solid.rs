use crate::ui::core::element::{Element, SizeRequest};
use crate::ui::core::geom::{Axis, Rect};
use crate::ui::core::painter::DrawContext;
use crate::ui::core::style::Color;

pub const PLACEHOLDER_GRAY: Color = Color::rgb(189, 189, 189);

/// Solid rectangle with a fixed size request on both axes.
#[derive(Clone, Debug)]
pub struct SolidBlock {
    alloc: Rect,
    color: Color,
    size: SizeRequest,
}

impl SolidBlock {
    pub fn new(color: Color) -> Self {
        Self {
            alloc: Rect::ZERO,
            color,
            size: SizeRequest::new(20.0, 100.0),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_GRAY)
    }

    pub fn with_size(mut self, minimum: f64, natural: f64) -> Self {
        self.size = SizeRequest::new(minimum, natural);
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Element for SolidBlock {
    fn measure(&self, _axis: Axis, _cross: f64) -> SizeRequest {
        self.size
    }

    fn allocate(&mut self, rect: Rect) {
        self.alloc = rect;
    }

    fn allocation(&self) -> Rect {
        self.alloc
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        ctx.set_color(self.color);
        ctx.fill_rect(Rect::sized(self.alloc.w, self.alloc.h));
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/solid.rs"]
mod tests;
