use serde::{Deserialize, Serialize};

/// Lexeme carried by every end-of-input token
pub const EOF_LEXEME: &str = "eof";

/// A single token from the source code
///
/// Tokens are produced once by the [`Scanner`](super::Scanner) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token ([`EOF_LEXEME`] for end of input)
    pub lexeme: String,
    /// Line number where token starts (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }

    /// Creates the end-of-input token at the given position
    pub fn eof(line: usize, column: usize) -> Self {
        Token::new(TokenKind::Eof, EOF_LEXEME.to_string(), line, column)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}('{}')", self.kind, self.lexeme)
    }
}

/// All possible token kinds in TINY
///
/// One closed enumeration shared by scanner and parser; the grammar has no
/// multi-character operators, so every operator kind maps to exactly one
/// source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// End of input marker
    Eof,
    /// Maximal run of whitespace characters
    Whitespace,
    /// Identifier: one or more alphabetic characters (digits not allowed)
    Identifier,
    /// The `print` keyword
    Print,
    /// Integer literal: one or more digits
    Int,
    /// Addition operator (+)
    AddOp,
    /// Subtraction operator (-)
    SubOp,
    /// Multiplication operator (*)
    MulOp,
    /// Division operator (/)
    DivOp,
    /// Left parenthesis (
    LParen,
    /// Right parenthesis )
    RParen,
    /// Assignment operator (=)
    Assign,
    /// Any character outside the TINY alphabet
    Unknown,
}

impl TokenKind {
    /// Get keyword kind from an alphabetic lexeme, if it is one
    ///
    /// `print` is the only keyword in TINY; every other letter run is an
    /// identifier.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "print" => Some(TokenKind::Print),
            _ => None,
        }
    }

    /// Check if this is the whitespace kind (skipped by the parser)
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Check if this is the end-of-input kind
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Whitespace => "WS",
            TokenKind::Identifier => "ID",
            TokenKind::Print => "PRINT",
            TokenKind::Int => "INT",
            TokenKind::AddOp => "ADDOP",
            TokenKind::SubOp => "SUBOP",
            TokenKind::MulOp => "MULTOP",
            TokenKind::DivOp => "DIVOP",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}
