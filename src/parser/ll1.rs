use serde::{Deserialize, Serialize};

use crate::error::SyntaxError;
use crate::lexer::{Scanner, Token, TokenKind};

/// Outcome of parsing one TINY program
///
/// Collects every syntax error detected in a single pass over the input.
/// An empty error list means the program is grammatically valid TINY.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    errors: Vec<SyntaxError>,
}

impl ParseReport {
    /// The detected syntax errors, in source order
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Total number of syntax errors detected
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Whether the input was grammatically valid TINY
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Predictive recursive-descent parser for the TINY grammar
///
/// ```text
/// PGM    -->  STMT+
/// STMT   -->  ASSIGN | "print" EXP
/// ASSIGN -->  ID "=" EXP
/// EXP    -->  TERM ETAIL
/// ETAIL  -->  "+" TERM ETAIL | "-" TERM ETAIL | EPSILON
/// TERM   -->  FACTOR TTAIL
/// TTAIL  -->  "*" FACTOR TTAIL | "/" FACTOR TTAIL | EPSILON
/// FACTOR -->  "(" EXP ")" | INT | ID
/// ```
///
/// One method per nonterminal, driven by a single non-whitespace lookahead
/// token pulled from the owned [`Scanner`]. Syntax errors are counted, not
/// thrown: a failed `match` records the error and still advances one
/// token, so parsing always reaches end of input and reports everything it
/// can find in one pass.
pub struct Parser {
    scanner: Scanner,
    lookahead: Token,
    errors: Vec<SyntaxError>,
}

impl Parser {
    /// Creates a parser bound to a scanner, priming the one-token lookahead
    pub fn new(mut scanner: Scanner) -> Self {
        let lookahead = Self::next_significant(&mut scanner);
        Parser {
            scanner,
            lookahead,
            errors: Vec::new(),
        }
    }

    /// Parses an entire program and returns the collected errors
    pub fn parse(mut self) -> ParseReport {
        self.program();
        ParseReport {
            errors: self.errors,
        }
    }

    /// PGM --> STMT+
    fn program(&mut self) {
        while !self.lookahead.kind.is_eof() {
            self.statement();
        }
        tracing::info!(errors = self.errors.len(), "parse complete");
    }

    /// STMT --> ASSIGN | "print" EXP
    fn statement(&mut self) {
        tracing::trace!("entering STMT rule");

        if self.check(TokenKind::Print) {
            tracing::debug!(lexeme = %self.lookahead.lexeme, "found PRINT token");
            self.match_kinds(&[TokenKind::Print]);
            self.exp();
        } else {
            self.assign();
        }

        tracing::trace!("exiting STMT rule");
    }

    /// ASSIGN --> ID "=" EXP
    fn assign(&mut self) {
        tracing::trace!("entering ASSIGN rule");

        self.match_kinds(&[TokenKind::Identifier]);
        self.match_kinds(&[TokenKind::Assign]);
        self.exp();

        tracing::trace!("exiting ASSIGN rule");
    }

    /// EXP --> TERM ETAIL
    fn exp(&mut self) {
        tracing::trace!("entering EXP rule");

        self.term();
        self.etail();

        tracing::trace!("exiting EXP rule");
    }

    /// ETAIL --> "+" TERM ETAIL | "-" TERM ETAIL | EPSILON
    fn etail(&mut self) {
        tracing::trace!("entering ETAIL rule");

        if self.check(TokenKind::AddOp) || self.check(TokenKind::SubOp) {
            let op = self.lookahead.kind;
            self.match_kinds(&[op]);
            self.term();
            self.etail();
        } else {
            tracing::trace!("choosing EPSILON production in ETAIL");
        }

        tracing::trace!("exiting ETAIL rule");
    }

    /// TERM --> FACTOR TTAIL
    fn term(&mut self) {
        tracing::trace!("entering TERM rule");

        self.factor();
        self.ttail();

        tracing::trace!("exiting TERM rule");
    }

    /// TTAIL --> "*" FACTOR TTAIL | "/" FACTOR TTAIL | EPSILON
    fn ttail(&mut self) {
        tracing::trace!("entering TTAIL rule");

        if self.check(TokenKind::MulOp) || self.check(TokenKind::DivOp) {
            let op = self.lookahead.kind;
            self.match_kinds(&[op]);
            self.factor();
            self.ttail();
        } else {
            tracing::trace!("choosing EPSILON production in TTAIL");
        }

        tracing::trace!("exiting TTAIL rule");
    }

    /// FACTOR --> "(" EXP ")" | INT | ID
    fn factor(&mut self) {
        tracing::trace!("entering FACTOR rule");

        if self.check(TokenKind::LParen) {
            self.match_kinds(&[TokenKind::LParen]);
            self.exp();
            self.match_kinds(&[TokenKind::RParen]);
        } else if self.check(TokenKind::Int) || self.check(TokenKind::Identifier) {
            let leaf = self.lookahead.kind;
            self.match_kinds(&[leaf]);
        } else {
            self.match_kinds(&[TokenKind::LParen, TokenKind::Int, TokenKind::Identifier]);
        }

        tracing::trace!("exiting FACTOR rule");
    }

    /// Checks the lookahead against an expected set and always advances
    ///
    /// On mismatch the error is recorded and the offending token skipped;
    /// the unconditional advance is what guarantees termination on
    /// malformed input.
    fn match_kinds(&mut self, expected: &[TokenKind]) {
        if expected.contains(&self.lookahead.kind) {
            tracing::debug!(token = %self.lookahead, "matched token");
        } else {
            let err = SyntaxError {
                expected: expected.to_vec(),
                found: self.lookahead.lexeme.clone(),
                line: self.lookahead.line,
                column: self.lookahead.column,
            };
            tracing::debug!(%err, "syntax error");
            self.errors.push(err);
        }
        self.consume();
    }

    /// Advances the lookahead to the next non-whitespace token
    fn consume(&mut self) {
        self.lookahead = Self::next_significant(&mut self.scanner);
    }

    fn next_significant(scanner: &mut Scanner) -> Token {
        loop {
            let token = scanner.next_token();
            if !token.kind.is_whitespace() {
                return token;
            }
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParseReport {
        Parser::new(Scanner::new(source)).parse()
    }

    #[test]
    fn test_valid_assignment() {
        let report = parse("x=1+2");
        assert!(report.is_valid());
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn test_valid_print_statement() {
        let report = parse("print 3*(4-1)");
        assert!(report.is_valid());
    }

    #[test]
    fn test_missing_rhs_reports_factor_error() {
        let report = parse("x=");
        assert!(!report.is_valid());

        let err = &report.errors()[0];
        assert_eq!(
            err.expected,
            vec![TokenKind::LParen, TokenKind::Int, TokenKind::Identifier]
        );
        assert_eq!(err.found, "eof");
    }

    #[test]
    fn test_missing_assign_operator() {
        let report = parse("x 1");
        assert!(!report.is_valid());
        assert_eq!(report.errors()[0].expected, vec![TokenKind::Assign]);
        assert_eq!(report.errors()[0].found, "1");
    }

    #[test]
    fn test_unknown_token_becomes_syntax_error() {
        // '@' lexes as UNKNOWN, which no match site accepts
        let report = parse("x = @");
        assert!(!report.is_valid());
        assert_eq!(report.errors()[0].found, "@");
    }

    #[test]
    fn test_recovery_continues_past_first_error() {
        // First statement is broken, second is fine; both get parsed
        let report = parse("x = + 2 y = 3");
        assert!(!report.is_valid());
        // The resync policy may cascade, but it must not lose the tail:
        // a later valid statement adds no further errors beyond the cascade.
        let report_tail = parse("y = 3");
        assert!(report_tail.is_valid());
    }

    #[test]
    fn test_empty_input_is_valid() {
        // PGM --> STMT+ is vacuously satisfied; the loop never runs
        let report = parse("");
        assert!(report.is_valid());
    }
}
