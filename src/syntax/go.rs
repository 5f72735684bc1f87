use tree_sitter::{Node, Parser};

use super::{TextPos, Token, TokenKind, TokenizeError};

/// Lex Go source into tokens ordered by position, comments included.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut parser = Parser::new();
    parser
        .set_language(tree_sitter_go::language())
        .map_err(|e| TokenizeError::Language(format!("{e:?}")))?;
    let tree = parser.parse(source, None).ok_or(TokenizeError::Parse)?;

    let mut tokens = Vec::new();
    let mut stack = vec![tree.root_node()];
    while let Some(node) = stack.pop() {
        if node.is_missing() {
            continue;
        }

        if is_whole_token(node.kind()) || node.child_count() == 0 {
            if let Some(token) = leaf_token(node, source) {
                tokens.push(token);
            }
            continue;
        }

        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }

    tracing::debug!(tokens = tokens.len(), "tokenized go source");
    Ok(tokens)
}

fn is_whole_token(kind: &str) -> bool {
    matches!(
        kind,
        "comment"
            | "interpreted_string_literal"
            | "raw_string_literal"
            | "rune_literal"
            | "int_literal"
            | "float_literal"
            | "imaginary_literal"
    )
}

fn leaf_token(node: Node<'_>, source: &str) -> Option<Token> {
    let text = source.get(node.byte_range())?;
    if text.is_empty() {
        return None;
    }
    let kind = classify(node, text)?;
    let start = node.start_position();
    Some(Token::new(
        TextPos::new(start.row + 1, start.column + 1),
        kind,
        text,
    ))
}

fn classify(node: Node<'_>, text: &str) -> Option<TokenKind> {
    let kind = match node.kind() {
        // implicit statement terminator
        "\n" => return None,
        "comment" => TokenKind::Comment,
        "interpreted_string_literal" | "raw_string_literal" => TokenKind::String,
        "rune_literal" => TokenKind::Char,
        "int_literal" => TokenKind::Int,
        "float_literal" => TokenKind::Float,
        "imaginary_literal" => TokenKind::Imag,
        "identifier" | "field_identifier" | "type_identifier" | "package_identifier"
        | "label_name" | "blank_identifier" | "true" | "false" | "nil" | "iota" => {
            TokenKind::Ident
        }
        "ERROR" => TokenKind::Illegal,
        other => TokenKind::from_keyword(other)
            .or_else(|| TokenKind::from_operator(text))
            .unwrap_or(if node.is_named() {
                TokenKind::Ident
            } else {
                TokenKind::Illegal
            }),
    };
    Some(kind)
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/go.rs"]
mod tests;
