//! Token-colorized source rendering.

use crate::app::theme::ColorScheme;
use crate::services::config::Typography;
use crate::syntax::{self, Token, TokenizeError};
use crate::ui::core::element::{Element, SizeRequest};
use crate::ui::core::geom::{Axis, Rect};
use crate::ui::core::painter::{DrawContext, Saved};
use crate::ui::core::style::Color;

/// Color switch at a byte index of a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMarker {
    pub index: usize,
    pub color: Color,
}

/// Slice of a line drawn in one color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRun<'a> {
    pub text: &'a str,
    pub color: Color,
}

/// Forward-only cursor over a position-ordered token slice.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    next: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, next: 0 }
    }

    /// Consume the tokens starting on `line` (1-based).
    ///
    /// Tokens whose line is already behind are dropped so they cannot stall the cursor.
    pub fn take_line(&mut self, line: usize) -> &'a [Token] {
        while let Some(tok) = self.tokens.get(self.next) {
            if tok.pos.line >= line {
                break;
            }
            tracing::trace!(line = tok.pos.line, current = line, "skipping out-of-order token");
            self.next += 1;
        }

        let start = self.next;
        while self
            .tokens
            .get(self.next)
            .is_some_and(|tok| tok.pos.line == line)
        {
            self.next += 1;
        }
        &self.tokens[start..self.next]
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.next
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Color markers for one line. Indices never decrease and stay on char boundaries.
pub fn line_markers(line: &str, tokens: &[Token], scheme: &ColorScheme) -> Vec<ColorMarker> {
    let len = line.len();
    let mut markers = Vec::with_capacity(tokens.len() * 2 + 2);
    markers.push(ColorMarker {
        index: 0,
        color: scheme.text,
    });

    let mut floor = 0;
    for tok in tokens {
        let start = floor_char_boundary(line, tok.pos.column.saturating_sub(1)).max(floor);
        let end = floor_char_boundary(line, start.saturating_add(tok.run_len())).max(start);
        markers.push(ColorMarker {
            index: start,
            color: scheme.token_color(tok.kind),
        });
        markers.push(ColorMarker {
            index: end,
            color: scheme.text,
        });
        floor = end;
    }

    markers.push(ColorMarker {
        index: len,
        color: scheme.text,
    });
    markers
}

/// Split `line` into colored runs. Concatenating the runs yields `line`.
pub fn line_runs<'a>(line: &'a str, tokens: &[Token], scheme: &ColorScheme) -> Vec<ColorRun<'a>> {
    line_markers(line, tokens, scheme)
        .windows(2)
        .filter(|pair| pair[0].index != pair[1].index)
        .map(|pair| ColorRun {
            text: &line[pair[0].index..pair[1].index],
            color: pair[0].color,
        })
        .collect()
}

pub struct CodeView {
    alloc: Rect,
    source: String,
    tokens: Vec<Token>,
    scheme: ColorScheme,
    typography: Typography,
    line_count: usize,
    longest_line: usize,
}

impl CodeView {
    pub fn new(
        source: impl Into<String>,
        tokens: Vec<Token>,
        scheme: ColorScheme,
        typography: Typography,
    ) -> Self {
        let source = source.into();
        let mut line_count = 0;
        let mut longest_line = 0;
        for line in source.split('\n') {
            line_count += 1;
            longest_line = longest_line.max(line.chars().count());
        }

        Self {
            alloc: Rect::ZERO,
            source,
            tokens,
            scheme,
            typography,
            line_count,
            longest_line,
        }
    }

    pub fn from_go_source(
        source: impl Into<String>,
        scheme: ColorScheme,
        typography: Typography,
    ) -> Result<Self, TokenizeError> {
        let source = source.into();
        let tokens = syntax::go::tokenize(&source)?;
        Ok(Self::new(source, tokens, scheme, typography))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn longest_line(&self) -> usize {
        self.longest_line
    }

    fn display_lines(&self) -> impl Iterator<Item = &str> {
        self.source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

impl Element for CodeView {
    fn measure(&self, axis: Axis, _cross: f64) -> SizeRequest {
        let lh = self.typography.line_height;
        match axis {
            Axis::Horizontal => {
                SizeRequest::fixed(self.longest_line as f64 * self.typography.char_width)
            }
            Axis::Vertical => SizeRequest::new(3.0 * lh, self.line_count as f64 * lh),
        }
    }

    fn allocate(&mut self, rect: Rect) {
        self.alloc = rect;
    }

    fn allocation(&self) -> Rect {
        self.alloc
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        let mut scope = Saved::new(ctx);
        let bounds = Rect::sized(self.alloc.w, self.alloc.h);

        scope.set_color(self.scheme.back);
        scope.fill_rect(bounds);
        scope.clip_rect(bounds);

        scope.set_color(self.scheme.text);
        let ty = &self.typography;
        if let Err(err) = scope.load_font(&ty.font_face, ty.font_size) {
            tracing::warn!(error = %err, "code view: font unavailable, skipping text");
            return;
        }

        let tab = " ".repeat(ty.tab_width);
        let mut cursor = TokenCursor::new(&self.tokens);
        let mut line_y = ty.line_height / 2.0;
        for (i, line) in self.display_lines().enumerate() {
            let tokens = cursor.take_line(i + 1);
            let mut line_x = 0.0;
            for run in line_runs(line, tokens, &self.scheme) {
                let text = run.text.replace('\t', &tab);
                let width = scope.measure_string(&text);
                scope.set_color(run.color);
                scope.draw_string_anchored(&text, line_x, line_y, 0.0, 0.5);
                line_x += width;
            }
            line_y += ty.line_height;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/code_view.rs"]
mod tests;
