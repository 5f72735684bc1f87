use super::geom::{Axis, Rect};
use super::painter::DrawContext;

/// Extent an element asks for along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeRequest {
    pub minimum: f64,
    pub natural: f64,
}

impl SizeRequest {
    pub const fn new(minimum: f64, natural: f64) -> Self {
        Self { minimum, natural }
    }

    pub const fn fixed(size: f64) -> Self {
        Self::new(size, size)
    }
}

/// A node of the layout tree.
///
/// Layout runs in two passes: parents `measure` their children, then hand
/// each one a rectangle through `allocate`. `render` draws relative to the
/// element's own rectangle; the caller has already translated the context to
/// its origin.
pub trait Element {
    /// Minimum and natural extent along `axis`, given `cross` along the other axis.
    ///
    /// Must not depend on anything but the element's content and the arguments.
    fn measure(&self, axis: Axis, cross: f64) -> SizeRequest;

    fn allocate(&mut self, rect: Rect);

    /// The rectangle passed to the last `allocate` call, `Rect::ZERO` before that.
    fn allocation(&self) -> Rect;

    /// Draw into `ctx`. The save/restore depth must be unchanged on return.
    fn render(&self, ctx: &mut dyn DrawContext);

    fn as_scrollable(&self) -> Option<&dyn Scrollable> {
        None
    }

    fn as_scrollable_mut(&mut self) -> Option<&mut dyn Scrollable> {
        None
    }
}

/// Virtual scrolling along an element's main axis.
pub trait Scrollable {
    /// Takes effect on the next `allocate`. Not clamped.
    fn scroll_to(&mut self, offset: f64);

    fn scroll_offset(&self) -> f64;

    /// Main-axis extent of the laid out content.
    fn scroll_size(&self) -> f64;
}
