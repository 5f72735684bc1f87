//! Composite elements.

mod container;
mod linear;

pub use container::{ChildId, Container};
pub use linear::LinearLayout;
