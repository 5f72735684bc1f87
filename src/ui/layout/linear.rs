use crate::ui::core::element::{Element, Scrollable, SizeRequest};
use crate::ui::core::geom::{Axis, Rect};
use crate::ui::core::painter::DrawContext;

use super::container::{ChildId, Container};

/// Lays children end to end along `orientation`.
///
/// Every child gets its natural main-axis size plus an equal share of the
/// leftover space; children are never shrunk below natural size, so content
/// may overflow. The whole cross extent (minus margins) goes to every child.
pub struct LinearLayout {
    children: Container,
    orientation: Axis,
    spacing: f64,
    margin: f64,
    scroll_offset: f64,
    scroll_size: f64,
}

impl LinearLayout {
    pub fn new(orientation: Axis, spacing: f64, margin: f64) -> Self {
        Self {
            children: Container::new(),
            orientation,
            spacing,
            margin,
            scroll_offset: 0.0,
            scroll_size: 0.0,
        }
    }

    pub fn horizontal(spacing: f64, margin: f64) -> Self {
        Self::new(Axis::Horizontal, spacing, margin)
    }

    pub fn vertical(spacing: f64, margin: f64) -> Self {
        Self::new(Axis::Vertical, spacing, margin)
    }

    pub fn set_clip_children(&mut self, clip: bool) {
        self.children.set_clip_children(clip);
    }

    pub fn add(&mut self, child: impl Element + 'static) -> ChildId {
        self.children.add(child)
    }

    pub fn add_boxed(&mut self, child: Box<dyn Element>) -> ChildId {
        self.children.add_boxed(child)
    }

    pub fn remove(&mut self, id: ChildId) -> Option<Box<dyn Element>> {
        self.children.remove(id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, id: ChildId) -> Option<&(dyn Element + 'static)> {
        self.children.child(id)
    }

    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut (dyn Element + 'static)> {
        self.children.child_mut(id)
    }

    pub fn children(&self) -> &Container {
        &self.children
    }

    fn total_spacing(&self) -> f64 {
        self.spacing * self.children.len().saturating_sub(1) as f64
    }
}

impl Element for LinearLayout {
    fn measure(&self, axis: Axis, cross: f64) -> SizeRequest {
        let margins = 2.0 * self.margin;

        if axis == self.orientation {
            let base = margins + self.total_spacing();
            self.children
                .iter()
                .map(|child| child.measure(axis, cross))
                .fold(SizeRequest::fixed(base), |acc, req| {
                    SizeRequest::new(acc.minimum + req.minimum, acc.natural + req.natural)
                })
        } else {
            let largest = self
                .children
                .iter()
                .map(|child| child.measure(axis, cross))
                .fold(SizeRequest::default(), |acc, req| {
                    SizeRequest::new(acc.minimum.max(req.minimum), acc.natural.max(req.natural))
                });
            SizeRequest::new(margins + largest.minimum, margins + largest.natural)
        }
    }

    fn allocate(&mut self, rect: Rect) {
        self.children.allocate(rect);

        let count = self.children.len();
        if count == 0 {
            return;
        }

        let (forsize, space) = match self.orientation {
            Axis::Horizontal => (rect.h, rect.w),
            Axis::Vertical => (rect.w, rect.h),
        };
        let forsize = (forsize - 2.0 * self.margin).max(0.0);
        let space = space - 2.0 * self.margin;

        // Measure everything before handing out any rectangle.
        let orientation = self.orientation;
        let naturals: Vec<f64> = self
            .children
            .iter()
            .map(|child| child.measure(orientation, forsize).natural)
            .collect();

        let size_total = naturals.iter().sum::<f64>() + self.total_spacing();
        let size_extra = (space - size_total).max(0.0);
        let to_distribute = size_extra / count as f64;

        tracing::trace!(
            ?orientation,
            count,
            space,
            size_total,
            to_distribute,
            "linear layout allocate"
        );

        let mut cursor = self.margin;
        for (child, natural) in self.children.iter_mut().zip(naturals) {
            let extent = natural + to_distribute;
            let alloc = Rect::new(self.scroll_offset + cursor, self.margin, extent, forsize);
            child.allocate(match orientation {
                Axis::Horizontal => alloc,
                Axis::Vertical => alloc.transpose(),
            });
            cursor += extent + self.spacing;
        }

        self.scroll_size = size_total;
    }

    fn allocation(&self) -> Rect {
        self.children.allocation()
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        self.children.render(ctx);
    }

    fn as_scrollable(&self) -> Option<&dyn Scrollable> {
        Some(self)
    }

    fn as_scrollable_mut(&mut self) -> Option<&mut dyn Scrollable> {
        Some(self)
    }
}

impl Scrollable for LinearLayout {
    fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn scroll_size(&self) -> f64 {
        self.scroll_size
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/layout/linear.rs"]
mod tests;
