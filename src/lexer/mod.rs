//! Lexical analysis for TINY
//!
//! Converts source text into a stream of tokens, one at a time, on demand.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind, EOF_LEXEME};
