use super::*;
use crate::ui::backend::cells::CellBackend;
use crate::ui::backend::Backend;
use crate::ui::core::painter::{PaintCmd, Painter};
use crate::ui::core::style::Color;
use crate::ui::widgets::solid::SolidBlock;

fn block_at(color: Color, rect: Rect) -> SolidBlock {
    let mut block = SolidBlock::new(color);
    block.allocate(rect);
    block
}

fn fill_rects(p: &Painter) -> Vec<(Rect, Color, Option<Rect>)> {
    p.cmds()
        .iter()
        .filter_map(|cmd| match cmd {
            PaintCmd::FillRect { rect, color, clip } => Some((*rect, *color, *clip)),
            _ => None,
        })
        .collect()
}

#[test]
fn allocation_is_zero_until_allocated() {
    let mut c = Container::new();
    assert_eq!(c.allocation(), Rect::ZERO);
    c.allocate(Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(c.allocation(), Rect::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn add_and_remove_by_id() {
    let mut c = Container::new();
    let a = c.add(SolidBlock::placeholder());
    let b = c.add(SolidBlock::placeholder());
    let d = c.add(SolidBlock::placeholder());
    assert_eq!(c.len(), 3);
    assert_ne!(a, b);

    assert!(c.remove(b).is_some());
    assert!(c.remove(b).is_none());
    assert_eq!(c.ids().collect::<Vec<_>>(), vec![a, d]);

    // Ids are not recycled.
    let e = c.add(SolidBlock::placeholder());
    assert_ne!(e, b);
    assert!(c.child(e).is_some());
    assert!(c.child(b).is_none());
}

#[test]
fn child_mut_reaches_the_stored_element() {
    let mut c = Container::new();
    let id = c.add(SolidBlock::placeholder());
    c.child_mut(id)
        .unwrap()
        .allocate(Rect::new(5.0, 6.0, 7.0, 8.0));
    assert_eq!(
        c.child(id).unwrap().allocation(),
        Rect::new(5.0, 6.0, 7.0, 8.0)
    );
}

#[test]
fn render_translates_each_child_in_order_and_restores_state() {
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);
    let mut c = Container::new();
    c.add(block_at(red, Rect::new(10.0, 20.0, 5.0, 5.0)));
    c.add(block_at(blue, Rect::new(30.0, 0.0, 2.0, 3.0)));

    let mut p = Painter::new();
    p.translate(100.0, 100.0);
    c.render(&mut p);

    assert_eq!(
        fill_rects(&p),
        vec![
            (Rect::new(110.0, 120.0, 5.0, 5.0), red, None),
            (Rect::new(130.0, 100.0, 2.0, 3.0), blue, None),
        ]
    );
    assert_eq!(p.depth(), 0);
    assert_eq!(p.origin().x, 100.0);
    // Child color changes do not leak out.
    assert_eq!(p.color(), Color::BLACK);
}

#[test]
fn clip_children_limits_children_to_own_bounds() {
    let mut c = Container::new();
    c.set_clip_children(true);
    c.allocate(Rect::new(0.0, 0.0, 10.0, 10.0));
    c.add(block_at(Color::WHITE, Rect::new(5.0, 5.0, 20.0, 20.0)));

    let mut p = Painter::new();
    p.translate(50.0, 50.0);
    c.render(&mut p);

    let fills = fill_rects(&p);
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].2, Some(Rect::new(50.0, 50.0, 10.0, 10.0)));
    assert_eq!(p.clip(), None);
}

#[test]
fn clipped_child_is_truncated_in_raster_output() {
    let white = Color::WHITE;
    let mut c = Container::new();
    c.set_clip_children(true);
    c.allocate(Rect::new(0.0, 0.0, 4.0, 4.0));
    // Child extends two cells past the container's right and bottom edges.
    c.add(block_at(white, Rect::new(2.0, 2.0, 4.0, 4.0)));

    let mut p = Painter::new();
    c.render(&mut p);

    let mut backend = CellBackend::new(8, 8, 1.0, 1.0);
    backend.draw(p.cmds());
    let buf = backend.buffer();

    assert_eq!(buf.cell(3, 3).unwrap().style.bg, Some(white));
    assert_eq!(buf.cell(4, 3).unwrap().style.bg, None);
    assert_eq!(buf.cell(3, 4).unwrap().style.bg, None);
    assert_eq!(buf.cell(5, 5).unwrap().style.bg, None);

    // Without clipping the whole child shows up.
    c.set_clip_children(false);
    let mut p = Painter::new();
    c.render(&mut p);
    let mut backend = CellBackend::new(8, 8, 1.0, 1.0);
    backend.draw(p.cmds());
    assert_eq!(backend.buffer().cell(5, 5).unwrap().style.bg, Some(white));
}

#[test]
fn measure_covers_positioned_children() {
    let mut c = Container::new();
    assert_eq!(c.measure(Axis::Horizontal, 0.0), SizeRequest::fixed(0.0));

    c.add(block_at(Color::WHITE, Rect::new(10.0, 0.0, 5.0, 40.0)));
    c.add(block_at(Color::WHITE, Rect::new(0.0, 5.0, 30.0, 5.0)));
    assert_eq!(c.measure(Axis::Horizontal, 0.0), SizeRequest::fixed(30.0));
    assert_eq!(c.measure(Axis::Vertical, 0.0), SizeRequest::fixed(40.0));
}
