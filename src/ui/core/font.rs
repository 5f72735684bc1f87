//! Font registry used by the recording painter.
//!
//! Faces are registered with fixed monospace metrics expressed as fractions of
//! the em size, so text measurement stays deterministic without glyph data.

use rustc_hash::FxHashMap;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_FACE: &str = "DejaVu Sans Mono";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Horizontal advance of one terminal column, in em.
    pub advance: f64,
    /// Line box height, in em.
    pub height: f64,
}

impl FontMetrics {
    pub const MONOSPACE: FontMetrics = FontMetrics {
        advance: 0.6,
        height: 1.2,
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    face: String,
    size: f64,
    metrics: FontMetrics,
}

impl Font {
    /// Font used before anything has been loaded (7x13 bitmap-like).
    pub fn fallback() -> Self {
        Self {
            face: "fallback".to_string(),
            size: 13.0,
            metrics: FontMetrics {
                advance: 7.0 / 13.0,
                height: 1.0,
            },
        }
    }

    pub fn face(&self) -> &str {
        &self.face
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn advance(&self) -> f64 {
        self.size * self.metrics.advance
    }

    pub fn height(&self) -> f64 {
        self.size * self.metrics.height
    }

    pub fn measure(&self, text: &str) -> f64 {
        UnicodeWidthStr::width(text) as f64 * self.advance()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FontError {
    UnknownFace(String),
    InvalidSize(f64),
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::UnknownFace(face) => write!(f, "Unknown font face: {}", face),
            FontError::InvalidSize(size) => write!(f, "Invalid font size: {}", size),
        }
    }
}

impl std::error::Error for FontError {}

#[derive(Clone, Debug)]
pub struct FontBook {
    faces: FxHashMap<String, FontMetrics>,
}

impl FontBook {
    pub fn empty() -> Self {
        Self {
            faces: FxHashMap::default(),
        }
    }

    pub fn register(&mut self, face: impl Into<String>, metrics: FontMetrics) {
        self.faces.insert(face.into(), metrics);
    }

    pub fn contains(&self, face: &str) -> bool {
        self.faces.contains_key(face.trim())
    }

    pub fn load(&self, face: &str, size: f64) -> Result<Font, FontError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }
        let face = face.trim();
        let metrics = self
            .faces
            .get(face)
            .copied()
            .ok_or_else(|| FontError::UnknownFace(face.to_string()))?;
        Ok(Font {
            face: face.to_string(),
            size,
            metrics,
        })
    }
}

impl Default for FontBook {
    fn default() -> Self {
        let mut book = Self::empty();
        book.register(DEFAULT_FACE, FontMetrics::MONOSPACE);
        book.register("monospace", FontMetrics::MONOSPACE);
        book
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/font.rs"]
mod tests;
