//! # Tinylang - Scanner and LL(1) Parser for the TINY Language
//!
//! A lexical scanner and predictive (LL(1)) recursive-descent parser for
//! TINY, a minimal imperative language with assignment, arithmetic
//! expressions, and a print statement:
//!
//! ```text
//! PGM    -->  STMT+
//! STMT   -->  ASSIGN | "print" EXP
//! ASSIGN -->  ID "=" EXP
//! EXP    -->  TERM ETAIL
//! ETAIL  -->  "+" TERM ETAIL | "-" TERM ETAIL | EPSILON
//! TERM   -->  FACTOR TTAIL
//! TTAIL  -->  "*" FACTOR TTAIL | "/" FACTOR TTAIL | EPSILON
//! FACTOR -->  "(" EXP ")" | INT | ID
//! ```
//!
//! The parser is a recognizer: it validates the token stream against the
//! grammar and reports every syntax error it can find in one pass, but
//! builds no AST and evaluates nothing. A failed match skips one token and
//! continues (resynchronization), so parsing always terminates with a full
//! error tally instead of aborting on the first problem.
//!
//! ## Quick Start
//!
//! ```rust
//! use tinylang::{Parser, Scanner};
//!
//! let scanner = Scanner::new("x = 1 + 2 print x * 3");
//! let report = Parser::new(scanner).parse();
//!
//! assert!(report.is_valid());
//! assert_eq!(report.error_count(), 0);
//! ```
//!
//! Or use the pipeline helpers:
//!
//! ```rust
//! let report = tinylang::parse_source("x =");
//! assert_eq!(report.error_count(), 1);
//! println!("{}", report.errors()[0]);
//! // Expected LPAREN, INT or ID, found 'eof' at line 1, column 4
//! ```
//!
//! ## Tokens on their own
//!
//! The scanner is usable standalone as a pull-based token source:
//!
//! ```rust
//! use tinylang::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("123abc");
//! assert_eq!(scanner.next_token().kind, TokenKind::Int);
//! assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
//! assert_eq!(scanner.next_token().kind, TokenKind::Eof);
//! ```
//!
//! ## Diagnostics
//!
//! Every token decision, rule entry/exit, and detected error is emitted
//! through [`tracing`]; install a subscriber to see the full parse trace.
//! The structured results live in the returned [`ParseReport`].

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{Error, Result, SyntaxError};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{ParseReport, Parser};

use std::path::Path;

/// Parses TINY source text and returns the collected syntax errors
pub fn parse_source(source: &str) -> ParseReport {
    Parser::new(Scanner::new(source)).parse()
}

/// Parses a TINY source file
///
/// The only error this returns is the resource-boundary one: an unreadable
/// file. Syntax errors are inside the [`ParseReport`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParseReport> {
    Ok(Parser::new(Scanner::from_path(path)?).parse())
}
