pub mod element;
pub mod font;
pub mod geom;
pub mod painter;
pub mod style;
