//! Error types for the tinylang scanner and parser

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lexer::TokenKind;

/// Errors that can abort the pipeline before parsing begins
///
/// Syntax errors never appear here: the parser counts and collects them in
/// a [`crate::ParseReport`] instead of propagating, so that one pass over
/// the input reports every detectable error.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The source file could not be opened or read
    ///
    /// **Triggered by:** A missing, unreadable, or non-UTF-8 input file
    /// **Example:** `parse_file("no_such_file.tiny")`
    #[error("Cannot read source file {path}: {message}")]
    Io {
        /// Path that failed to open
        path: String,
        /// Underlying I/O error description
        message: String,
    },
}

/// Result type alias using tinylang's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// A single syntax error detected during parsing
///
/// Produced at a `match` site when the lookahead token's kind is not in the
/// expected set. The parser resynchronizes (skips one token) and keeps
/// going, so a parse yields a list of these rather than failing on the
/// first.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("Expected {}, found '{found}' at line {line}, column {column}", expected_names(.expected))]
pub struct SyntaxError {
    /// Token kinds that would have been accepted at this point
    pub expected: Vec<TokenKind>,
    /// Lexeme of the token actually found
    pub found: String,
    /// Line where the offending token starts (1-indexed)
    pub line: usize,
    /// Column where the offending token starts (1-indexed)
    pub column: usize,
}

fn expected_names(kinds: &[TokenKind]) -> String {
    let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        _ => names.join(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_single_expected() {
        let err = SyntaxError {
            expected: vec![TokenKind::Assign],
            found: "+".to_string(),
            line: 1,
            column: 3,
        };
        assert_eq!(
            err.to_string(),
            "Expected ASSIGN, found '+' at line 1, column 3"
        );
    }

    #[test]
    fn test_syntax_error_expected_set() {
        let err = SyntaxError {
            expected: vec![TokenKind::LParen, TokenKind::Int, TokenKind::Identifier],
            found: "eof".to_string(),
            line: 2,
            column: 1,
        };
        assert_eq!(
            err.to_string(),
            "Expected LPAREN, INT or ID, found 'eof' at line 2, column 1"
        );
    }
}
