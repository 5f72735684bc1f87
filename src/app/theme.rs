//! 代码视图配色方案，颜色集中在这里，渲染代码只查表。

use rustc_hash::FxHashMap;

use crate::services::config::ThemeSettings;
use crate::syntax::TokenKind;
use crate::ui::core::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub text: Color,
    pub back: Color,
    pub tokens: FxHashMap<TokenKind, Color>,
}

mod paper {
    use crate::ui::core::style::Color;

    pub const BASE00: Color = Color::rgb(0xf3, 0xf3, 0xf3);
    pub const BASE03: Color = Color::rgb(0x94, 0x94, 0x94);
    pub const BASE05: Color = Color::rgb(0x4d, 0x4d, 0x4c);
    pub const BASE08: Color = Color::rgb(0x89, 0x59, 0xa8);
    pub const BASE09: Color = Color::rgb(0xd7, 0x5f, 0x00);
    pub const BASE0B: Color = Color::rgb(0x71, 0x8c, 0x00);
    pub const BASE0E: Color = Color::rgb(0xd7, 0x00, 0x5f);
}

impl ColorScheme {
    /// Light "Paper" palette.
    pub fn paper() -> Self {
        let mut tokens = FxHashMap::default();
        tokens.insert(TokenKind::Illegal, paper::BASE05);
        tokens.insert(TokenKind::Comment, paper::BASE03);
        tokens.insert(TokenKind::Ident, paper::BASE08);
        for kind in [
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Imag,
            TokenKind::Char,
        ] {
            tokens.insert(kind, paper::BASE09);
        }
        tokens.insert(TokenKind::String, paper::BASE0B);
        for kind in TokenKind::operators() {
            tokens.insert(kind, paper::BASE05);
        }
        for kind in TokenKind::keywords() {
            tokens.insert(kind, paper::BASE0E);
        }

        Self {
            text: paper::BASE05,
            back: paper::BASE00,
            tokens,
        }
    }

    /// Color for `kind`, or the plain text color when the scheme has none.
    pub fn token_color(&self, kind: TokenKind) -> Color {
        self.tokens.get(&kind).copied().unwrap_or(self.text)
    }

    pub fn set_token_color(&mut self, kind: TokenKind, color: Color) {
        self.tokens.insert(kind, color);
    }

    /// Apply hex overrides; unparsable values are ignored.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        if let Some(c) = parse_override(&settings.text) {
            self.text = c;
        }
        if let Some(c) = parse_override(&settings.back) {
            self.back = c;
        }
        if let Some(c) = parse_override(&settings.comment) {
            self.set_token_color(TokenKind::Comment, c);
        }
        if let Some(c) = parse_override(&settings.ident) {
            self.set_token_color(TokenKind::Ident, c);
        }
        if let Some(c) = parse_override(&settings.number) {
            for kind in [
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Imag,
                TokenKind::Char,
            ] {
                self.set_token_color(kind, c);
            }
        }
        if let Some(c) = parse_override(&settings.string) {
            self.set_token_color(TokenKind::String, c);
        }
        if let Some(c) = parse_override(&settings.keyword) {
            for kind in TokenKind::keywords() {
                self.set_token_color(kind, c);
            }
        }
        if let Some(c) = parse_override(&settings.operator) {
            for kind in TokenKind::operators() {
                self.set_token_color(kind, c);
            }
        }
    }
}

fn parse_override(value: &Option<String>) -> Option<Color> {
    let value = value.as_deref()?;
    let color = Color::parse_hex(value);
    if color.is_none() {
        tracing::warn!(value, "ignoring invalid theme color");
    }
    color
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::paper()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
