//! 视图层模块
//!
//! - CodeView: 按 token 着色的源码视图

pub mod code_view;

pub use code_view::{line_markers, line_runs, CodeView, ColorMarker, ColorRun, TokenCursor};
