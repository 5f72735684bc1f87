//! 应用层：配色与演示布局

pub mod demo;
pub mod theme;

pub use demo::{build_demo, render_demo, AppError};
pub use theme::ColorScheme;
