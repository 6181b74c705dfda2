use std::path::Path;

use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for TINY source code
///
/// Produces one token per [`next_token`](Scanner::next_token) call, on
/// demand. Letter, digit, and whitespace runs are scanned with maximal
/// munch; operators and punctuation are single characters. The scanner
/// never fails on malformed input: anything outside the TINY alphabet
/// becomes an [`Unknown`](TokenKind::Unknown) token and significance is
/// left to the parser.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Creates a scanner bound to a source file
    ///
    /// This is the only fallible entry point: a missing or unreadable file
    /// is reported once here, before any scanning begins.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Scanner::new(&source))
    }

    /// Scans and returns the next token
    ///
    /// Once the input is exhausted this returns an end-of-input token and
    /// is safe to call repeatedly; no further reads occur.
    pub fn next_token(&mut self) -> Token {
        self.start = self.current;

        let token = if self.is_at_end() {
            Token::eof(self.line, self.column)
        } else {
            let c = self.peek();
            if c.is_whitespace() {
                self.scan_whitespace()
            } else if c.is_ascii_alphabetic() {
                self.scan_word()
            } else if c.is_ascii_digit() {
                self.scan_number()
            } else {
                self.scan_operator()
            }
        };

        tracing::debug!(kind = %token.kind, lexeme = %token.lexeme, "next token");
        token
    }

    /// Drains the scanner into a token vector
    ///
    /// Whitespace tokens are included; the final element is always the
    /// end-of-input token.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn scan_whitespace(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
        self.make_token(TokenKind::Whitespace, line, column)
    }

    fn scan_word(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        while !self.is_at_end() && self.peek().is_ascii_alphabetic() {
            self.advance();
        }
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, line, column)
    }

    fn scan_number(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }
        self.make_token(TokenKind::Int, line, column)
    }

    fn scan_operator(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let kind = match self.advance() {
            '+' => TokenKind::AddOp,
            '-' => TokenKind::SubOp,
            '*' => TokenKind::MulOp,
            '/' => TokenKind::DivOp,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '=' => TokenKind::Assign,
            _ => TokenKind::Unknown,
        };
        self.make_token(kind, line, column)
    }

    fn make_token(&self, kind: TokenKind, line: usize, column: usize) -> Token {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        Token::new(kind, lexeme, line, column)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> char {
        self.source[self.current]
    }
}
