//! Demo scene: a horizontal flow holding a placeholder block, the code view and
//! a vertical flow of three more blocks.

use std::io;
use std::path::PathBuf;

use crate::app::theme::ColorScheme;
use crate::services::config::{ConfigError, Settings};
use crate::syntax::TokenizeError;
use crate::ui::backend::cells::{CellBackend, CellBuffer};
use crate::ui::backend::Backend;
use crate::ui::core::element::Element;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::{DrawContext, Painter};
use crate::ui::core::style::Color;
use crate::ui::layout::LinearLayout;
use crate::ui::widgets::solid::SolidBlock;
use crate::views::CodeView;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Read(PathBuf, io::Error),
    Config(ConfigError),
    Tokenize(TokenizeError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "IO error: {}", e),
            AppError::Read(p, e) => write!(f, "Cannot read {}: {}", p.display(), e),
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Tokenize(e) => write!(f, "Tokenize error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) | AppError::Read(_, e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Tokenize(e) => Some(e),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<TokenizeError> for AppError {
    fn from(e: TokenizeError) -> Self {
        AppError::Tokenize(e)
    }
}

pub fn build_demo(source: &str, settings: &Settings) -> Result<LinearLayout, AppError> {
    let mut scheme = ColorScheme::paper();
    scheme.apply_settings(&settings.theme);
    let code = CodeView::from_go_source(source, scheme, settings.typography.clone())?;

    let layout = &settings.layout;
    let mut column = LinearLayout::vertical(layout.inner_spacing, layout.inner_margin);
    for _ in 0..3 {
        column.add(SolidBlock::placeholder());
    }

    let mut root = LinearLayout::horizontal(layout.spacing, layout.margin);
    root.add(SolidBlock::placeholder());
    root.add(code);
    root.add(column);
    Ok(root)
}

/// Lay `root` out on the configured canvas and rasterize it.
pub fn render_demo(root: &mut LinearLayout, settings: &Settings) -> CellBuffer {
    let canvas = Rect::sized(settings.canvas.width, settings.canvas.height);
    root.allocate(canvas);

    let mut painter = Painter::new();
    painter.set_color(Color::WHITE);
    painter.fill_rect(canvas);
    root.render(&mut painter);
    tracing::debug!(cmds = painter.cmds().len(), "rendered demo scene");

    let raster = &settings.raster;
    let mut backend = CellBackend::for_canvas(
        canvas.w,
        canvas.h,
        raster.cell_width,
        raster.cell_height,
    );
    backend.draw(painter.cmds());
    backend.into_buffer()
}

#[cfg(test)]
#[path = "../../tests/unit/app/demo.rs"]
mod tests;
