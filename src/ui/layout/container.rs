use crate::ui::core::element::{Element, SizeRequest};
use crate::ui::core::geom::{Axis, Rect};
use crate::ui::core::painter::{DrawContext, Saved};

/// Handle to a child inside one container. Ids are never reused by that container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChildId(u64);

struct Child {
    id: ChildId,
    element: Box<dyn Element>,
}

/// Ordered set of children positioned by their owner.
///
/// A bare `Container` never moves its children: `allocate` only records its own
/// rectangle, and whoever owns the container (usually a layout such as
/// [`super::LinearLayout`]) assigns child rectangles. Rendering draws every child
/// at its allocation, in insertion order.
pub struct Container {
    children: Vec<Child>,
    next_id: u64,
    alloc: Rect,
    clip_children: bool,
}

impl Container {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            next_id: 0,
            alloc: Rect::ZERO,
            clip_children: false,
        }
    }

    /// Clip children to this container's own bounds while rendering.
    pub fn set_clip_children(&mut self, clip: bool) {
        self.clip_children = clip;
    }

    pub fn add(&mut self, child: impl Element + 'static) -> ChildId {
        self.add_boxed(Box::new(child))
    }

    pub fn add_boxed(&mut self, element: Box<dyn Element>) -> ChildId {
        let id = ChildId(self.next_id);
        self.next_id += 1;
        self.children.push(Child { id, element });
        id
    }

    pub fn remove(&mut self, id: ChildId) -> Option<Box<dyn Element>> {
        let idx = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(idx).element)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ChildId> + '_ {
        self.children.iter().map(|c| c.id)
    }

    pub fn child(&self, id: ChildId) -> Option<&(dyn Element + 'static)> {
        self.children
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.element.as_ref())
    }

    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut (dyn Element + 'static)> {
        self.children
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| c.element.as_mut())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Element + 'static)> + '_ {
        self.children.iter().map(|c| c.element.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn Element + 'static)> + '_ {
        self.children.iter_mut().map(|c| c.element.as_mut())
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Container {
    /// Extent needed to show every child at its current allocation.
    fn measure(&self, axis: Axis, _cross: f64) -> SizeRequest {
        let far_edge = self
            .iter()
            .map(|child| {
                let alloc = child.allocation();
                match axis {
                    Axis::Horizontal => alloc.right(),
                    Axis::Vertical => alloc.bottom(),
                }
            })
            .fold(0.0, f64::max);
        SizeRequest::fixed(far_edge)
    }

    fn allocate(&mut self, rect: Rect) {
        self.alloc = rect;
    }

    fn allocation(&self) -> Rect {
        self.alloc
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        let mut scope = Saved::new(ctx);
        if self.clip_children {
            scope.clip_rect(Rect::sized(self.alloc.w, self.alloc.h));
        }

        for child in &self.children {
            let alloc = child.element.allocation();
            let mut child_scope = Saved::new(&mut *scope);
            child_scope.translate(alloc.x, alloc.y);
            child.element.render(&mut *child_scope);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/layout/container.rs"]
mod tests;
