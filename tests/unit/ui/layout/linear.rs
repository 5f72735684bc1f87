use super::*;
use crate::ui::core::painter::{PaintCmd, Painter};
use crate::ui::widgets::solid::SolidBlock;

const EPS: f64 = 1e-9;

fn placeholders(layout: &mut LinearLayout, count: usize) -> Vec<ChildId> {
    (0..count)
        .map(|_| layout.add(SolidBlock::placeholder()))
        .collect()
}

fn allocations(layout: &LinearLayout, ids: &[ChildId]) -> Vec<Rect> {
    ids.iter()
        .map(|id| layout.child(*id).unwrap().allocation())
        .collect()
}

#[test]
fn three_children_share_slack_equally() {
    let mut layout = LinearLayout::horizontal(10.0, 10.0);
    let ids = placeholders(&mut layout, 3);

    layout.allocate(Rect::new(0.0, 0.0, 400.0, 300.0));

    let allocs = allocations(&layout, &ids);
    let xs: Vec<f64> = allocs.iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![10.0, 140.0, 270.0]);
    for r in &allocs {
        assert_eq!(r.w, 120.0);
        assert_eq!(r.y, 10.0);
        assert_eq!(r.h, 280.0);
    }
    assert_eq!(layout.allocation(), Rect::new(0.0, 0.0, 400.0, 300.0));
    assert_eq!(layout.scroll_size(), 320.0);
}

#[test]
fn slack_is_fully_distributed() {
    let (margin, spacing, space) = (7.0, 3.5, 1000.0);
    let mut layout = LinearLayout::horizontal(spacing, margin);
    layout.add(SolidBlock::placeholder().with_size(10.0, 33.3));
    layout.add(SolidBlock::placeholder().with_size(10.0, 71.0));
    layout.add(SolidBlock::placeholder().with_size(1.0, 0.5));
    layout.add(SolidBlock::placeholder().with_size(5.0, 250.0));
    let ids: Vec<ChildId> = layout.children().ids().collect();

    layout.allocate(Rect::new(0.0, 0.0, space, 50.0));

    let allocs = allocations(&layout, &ids);
    let used: f64 = allocs.iter().map(|r| r.w).sum::<f64>()
        + spacing * (ids.len() - 1) as f64
        + 2.0 * margin;
    assert!((used - space).abs() < 1e-6, "used {used}, space {space}");

    // Children are packed back to back.
    for pair in allocs.windows(2) {
        assert!((pair[1].x - (pair[0].right() + spacing)).abs() < EPS);
    }
}

#[test]
fn insufficient_space_never_shrinks_below_natural() {
    let mut layout = LinearLayout::horizontal(10.0, 10.0);
    let ids = placeholders(&mut layout, 3);

    layout.allocate(Rect::new(0.0, 0.0, 150.0, 50.0));

    for r in allocations(&layout, &ids) {
        assert_eq!(r.w, 100.0);
    }
    assert_eq!(layout.scroll_size(), 320.0);
    // Overflow is left as is.
    assert_eq!(allocations(&layout, &ids)[2].right(), 330.0);
}

#[test]
fn vertical_allocation_is_the_transpose_of_horizontal() {
    let mut horizontal = LinearLayout::horizontal(4.0, 6.0);
    let h_ids = placeholders(&mut horizontal, 3);
    let mut vertical = LinearLayout::vertical(4.0, 6.0);
    let v_ids = placeholders(&mut vertical, 3);

    let rect = Rect::new(0.0, 0.0, 500.0, 80.0);
    horizontal.allocate(rect);
    vertical.allocate(rect.transpose());

    let h = allocations(&horizontal, &h_ids);
    let v = allocations(&vertical, &v_ids);
    for (h, v) in h.iter().zip(&v) {
        assert_eq!(h.transpose(), *v);
    }
    assert_eq!(v[0], Rect::new(6.0, 6.0, 68.0, 160.0));
}

#[test]
fn scroll_offset_shifts_main_axis_origin_only() {
    let mut layout = LinearLayout::vertical(10.0, 5.0);
    let ids = placeholders(&mut layout, 4);
    let rect = Rect::new(0.0, 0.0, 200.0, 300.0);

    layout.scroll_to(0.0);
    layout.allocate(rect);
    let base = allocations(&layout, &ids);
    let base_size = layout.scroll_size();

    layout.scroll_to(-75.5);
    // Nothing moves until the next allocation.
    assert_eq!(allocations(&layout, &ids), base);
    assert_eq!(layout.scroll_offset(), -75.5);

    layout.allocate(rect);
    let shifted = allocations(&layout, &ids);
    for (a, b) in base.iter().zip(&shifted) {
        assert!((b.y - a.y + 75.5).abs() < EPS);
        assert_eq!(a.x, b.x);
        assert_eq!(a.w, b.w);
        assert_eq!(a.h, b.h);
    }
    assert_eq!(layout.scroll_size(), base_size);
}

#[test]
fn scroll_is_reachable_through_the_element_trait() {
    let mut boxed: Box<dyn Element> = Box::new(LinearLayout::horizontal(0.0, 0.0));
    boxed.as_scrollable_mut().unwrap().scroll_to(12.0);
    assert_eq!(boxed.as_scrollable().unwrap().scroll_offset(), 12.0);

    let mut block: Box<dyn Element> = Box::new(SolidBlock::placeholder());
    assert!(block.as_scrollable_mut().is_none());
}

#[test]
fn measure_sums_along_and_maxes_across() {
    let mut layout = LinearLayout::horizontal(10.0, 5.0);
    layout.add(SolidBlock::placeholder().with_size(20.0, 100.0));
    layout.add(SolidBlock::placeholder().with_size(30.0, 40.0));

    assert_eq!(
        layout.measure(Axis::Horizontal, 0.0),
        SizeRequest::new(10.0 + 10.0 + 50.0, 10.0 + 10.0 + 140.0)
    );
    assert_eq!(
        layout.measure(Axis::Vertical, 0.0),
        SizeRequest::new(10.0 + 30.0, 10.0 + 100.0)
    );
}

#[test]
fn measure_is_pure() {
    let mut outer = LinearLayout::horizontal(10.0, 10.0);
    let mut inner = LinearLayout::vertical(3.0, 1.0);
    inner.add(SolidBlock::placeholder());
    inner.add(SolidBlock::placeholder().with_size(5.0, 7.0));
    outer.add(inner);
    outer.add(SolidBlock::placeholder());

    for axis in [Axis::Horizontal, Axis::Vertical] {
        let first = outer.measure(axis, 42.0);
        let second = outer.measure(axis, 42.0);
        assert_eq!(first, second);
    }
    outer.allocate(Rect::new(0.0, 0.0, 640.0, 480.0));
    assert_eq!(
        outer.measure(Axis::Horizontal, 42.0),
        outer.measure(Axis::Horizontal, 42.0)
    );
}

#[test]
fn empty_layout_stores_rect_and_measures_margins() {
    let mut layout = LinearLayout::horizontal(10.0, 4.0);
    layout.allocate(Rect::new(1.0, 1.0, 50.0, 50.0));
    assert_eq!(layout.allocation(), Rect::new(1.0, 1.0, 50.0, 50.0));
    assert_eq!(layout.scroll_size(), 0.0);
    assert_eq!(layout.measure(Axis::Horizontal, 0.0), SizeRequest::fixed(8.0));
    assert_eq!(layout.measure(Axis::Vertical, 0.0), SizeRequest::fixed(8.0));
}

#[test]
fn nested_layout_renders_relative_to_parents() {
    let mut column = LinearLayout::vertical(10.0, 0.0);
    column.add(SolidBlock::placeholder());
    column.add(SolidBlock::placeholder());

    let mut row = LinearLayout::horizontal(10.0, 10.0);
    row.add(SolidBlock::placeholder());
    row.add(column);

    row.allocate(Rect::new(0.0, 0.0, 230.0, 230.0));

    let mut p = Painter::new();
    row.render(&mut p);
    assert_eq!(p.depth(), 0);

    let fills: Vec<Rect> = p
        .cmds()
        .iter()
        .filter_map(|cmd| match cmd {
            PaintCmd::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(
        fills,
        vec![
            Rect::new(10.0, 10.0, 100.0, 210.0),
            Rect::new(120.0, 10.0, 100.0, 100.0),
            Rect::new(120.0, 120.0, 100.0, 100.0),
        ]
    );
}

#[test]
fn removed_children_no_longer_take_space() {
    let mut layout = LinearLayout::horizontal(0.0, 0.0);
    let ids = placeholders(&mut layout, 2);
    assert!(layout.remove(ids[0]).is_some());
    assert_eq!(layout.len(), 1);

    layout.allocate(Rect::new(0.0, 0.0, 300.0, 10.0));
    assert_eq!(layout.child(ids[1]).unwrap().allocation().w, 300.0);
}

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Measure(Axis, f64),
    Allocate(Rect),
}

struct Recorder {
    log: std::rc::Rc<std::cell::RefCell<Vec<Call>>>,
    alloc: Rect,
}

impl Element for Recorder {
    fn measure(&self, axis: Axis, cross: f64) -> SizeRequest {
        self.log.borrow_mut().push(Call::Measure(axis, cross));
        SizeRequest::new(5.0, 50.0)
    }

    fn allocate(&mut self, rect: Rect) {
        self.log.borrow_mut().push(Call::Allocate(rect));
        self.alloc = rect;
    }

    fn allocation(&self) -> Rect {
        self.alloc
    }

    fn render(&self, _ctx: &mut dyn DrawContext) {}
}

fn recorded_layout(
    orientation: Axis,
    count: usize,
) -> (LinearLayout, std::rc::Rc<std::cell::RefCell<Vec<Call>>>) {
    let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut layout = LinearLayout::new(orientation, 2.0, 10.0);
    for _ in 0..count {
        layout.add(Recorder {
            log: log.clone(),
            alloc: Rect::ZERO,
        });
    }
    (layout, log)
}

#[test]
fn children_are_measured_with_cross_extent_minus_margins() {
    let (mut layout, log) = recorded_layout(Axis::Vertical, 2);
    layout.allocate(Rect::sized(300.0, 200.0));

    let log = log.borrow();
    let measures: Vec<_> = log
        .iter()
        .filter(|c| matches!(c, Call::Measure(..)))
        .collect();
    assert_eq!(measures.len(), 2);
    for call in measures {
        assert_eq!(*call, Call::Measure(Axis::Vertical, 280.0));
    }
    assert!(log
        .iter()
        .any(|c| *c == Call::Allocate(Rect::new(10.0, 10.0, 280.0, 50.0 + 39.0))));
}

#[test]
fn cross_extent_is_clamped_when_margins_do_not_fit() {
    let (mut layout, log) = recorded_layout(Axis::Vertical, 1);
    layout.allocate(Rect::sized(15.0, 200.0));

    let log = log.borrow();
    assert_eq!(log[0], Call::Measure(Axis::Vertical, 0.0));
    match &log[1] {
        Call::Allocate(rect) => assert_eq!(rect.w, 0.0),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn every_child_is_measured_before_any_allocation() {
    let (mut layout, log) = recorded_layout(Axis::Horizontal, 3);
    layout.allocate(Rect::sized(400.0, 100.0));

    let log = log.borrow();
    assert_eq!(log.len(), 6);
    assert!(log[..3].iter().all(|c| *c == Call::Measure(Axis::Horizontal, 80.0)));
    assert!(log[3..].iter().all(|c| matches!(c, Call::Allocate(_))));
}
