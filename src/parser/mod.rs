//! TINY parser module
//!
//! Recognizes token streams against the TINY grammar via predictive
//! recursive descent with one-token lookahead. No AST is built: the parser
//! only validates and reports.

mod ll1;

pub use ll1::{ParseReport, Parser};
