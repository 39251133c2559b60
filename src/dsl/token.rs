// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Placeholder tokenizer.
//!
//! Splits a raw query string into literal SQL text and `{name:Type}`
//! placeholders. Scanning is left to right and matches never overlap, so
//! concatenating the tokens back reproduces the input exactly.

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+):(\w+)\}").expect("placeholder pattern is valid"));

/// A piece of a raw query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// SQL text kept verbatim.
    Literal(&'a str),

    /// `{name:type_name}` placeholder. `type_name` is not resolved yet.
    Placeholder {
        name:      &'a str,
        type_name: &'a str
    }
}

impl Token<'_> {
    /// Source text of the token.
    #[must_use]
    pub fn source(&self) -> String {
        match self {
            Self::Literal(text) => (*text).to_owned(),
            Self::Placeholder { name, type_name } => format!("{{{name}:{type_name}}}")
        }
    }
}

/// Split `raw` into literal and placeholder tokens.
///
/// Empty literals are never emitted: adjacent placeholders produce no
/// literal between them, and an empty input produces no tokens.
///
/// # Examples
///
/// ```rust
/// use cdal::dsl::{Token, tokenize};
///
/// let tokens = tokenize("WHERE id = {id:PrimaryKey}");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Literal("WHERE id = "),
///         Token::Placeholder { name: "id", type_name: "PrimaryKey" },
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(raw: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for captures in PLACEHOLDER.captures_iter(raw) {
        let whole = captures.get_match();
        let (_, [name, type_name]) = captures.extract();

        if whole.start() > cursor {
            tokens.push(Token::Literal(&raw[cursor..whole.start()]));
        }
        tokens.push(Token::Placeholder { name, type_name });
        cursor = whole.end();
    }

    if cursor < raw.len() {
        tokens.push(Token::Literal(&raw[cursor..]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_placeholders_is_one_literal() {
        assert_eq!(
            tokenize("ORDER BY name"),
            vec![Token::Literal("ORDER BY name")]
        );
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn adjacent_placeholders() {
        assert_eq!(
            tokenize("{a:Integer}{b:Real}"),
            vec![
                Token::Placeholder {
                    name:      "a",
                    type_name: "Integer"
                },
                Token::Placeholder {
                    name:      "b",
                    type_name: "Real"
                },
            ]
        );
    }

    #[test]
    fn malformed_braces_stay_literal() {
        let raw = "WHERE a = {x} OR b = {y:} OR c = {:Text} OR d = { z:Text }";
        assert_eq!(tokenize(raw), vec![Token::Literal(raw)]);
    }

    #[test]
    fn unknown_type_names_are_still_tokens() {
        assert_eq!(
            tokenize("{kind:Enum}"),
            vec![Token::Placeholder {
                name:      "kind",
                type_name: "Enum"
            }]
        );
    }

    #[test]
    fn tokens_reassemble_input() {
        let raw = "WHERE owner = {owner:ForeignKey} AND title LIKE {title:Text} ORDER BY id";
        let rebuilt: String = tokenize(raw).iter().map(Token::source).collect();
        assert_eq!(rebuilt, raw);
    }
}
