//! Recursive-descent parser for boolean expressions
//!
//! One token of lookahead, operators left-associative within a precedence level:
//!
//! ```text
//! expression     → implication ;
//! implication    → binary ( ( "->" | "==" ) binary )* ;
//! binary         → unary ( ( "&" | "|" ) unary )* ;
//! unary          → "!" unary | primary ;
//! primary        → IDENTIFIER
//!                | ( "one" | "all" ) IDENTIFIER "in" IDENTIFIER
//!                | "(" expression ")" ;
//! ```
//!
//! Parsing stops at the first error. The error is returned as a [`Diagnostic`]
//! rather than unwinding, so callers decide whether to carry on with the next input.
//! Nesting of `!` and parentheses is capped at [`MAX_NESTING`] so deep input is
//! rejected before it can exhaust the stack.

use super::error::{Diagnostic, ParseExprError};
use super::lexer::scan;
use super::token::{Span, Token, TokenKind};
use super::Expr;
use crate::log::targets;
use log::debug;

type ParseResult = Result<Expr<String>, Diagnostic>;

/// Deepest combined nesting of `!` and parentheses the parser accepts
pub const MAX_NESTING: usize = 256;

impl Expr {
    /// Parse a boolean expression from a string
    ///
    /// Supports the operators `!`, `&`, `|`, `->`, `==`, parentheses, and the
    /// quantified forms `one x in X` / `all x in X` (`any` and `of` are synonyms).
    ///
    /// On failure the error carries every lexical error, or the first parse error.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_constraints::Expr;
    ///
    /// let expr = Expr::parse("!a | b").unwrap();
    /// assert_eq!(expr, Expr::atom("a").not().or(Expr::atom("b")));
    ///
    /// let err = Expr::parse("a &").unwrap_err();
    /// assert_eq!(err.diagnostics.len(), 1);
    /// ```
    pub fn parse(source: &str) -> Result<Self, ParseExprError> {
        let (tokens, mut diagnostics) = scan(source);
        if diagnostics.has_errors() {
            return Err(ParseExprError::new(source, diagnostics));
        }
        Parser::new(&tokens).parse().map_err(|diagnostic| {
            diagnostics.push(diagnostic);
            ParseExprError::new(source, diagnostics)
        })
    }
}

/// Parser over a token slice terminated by an EOF token
pub struct Parser<'t, 'src> {
    tokens: &'t [Token<'src>],
    current: usize,
    depth: usize,
}

impl<'t, 'src> Parser<'t, 'src> {
    /// Create a parser over `tokens`
    ///
    /// The slice is expected to end with [`TokenKind::Eof`], as produced by
    /// [`Lexer::scan`](super::Lexer::scan).
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Parser {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parse one complete expression, rejecting trailing tokens
    pub fn parse(mut self) -> ParseResult {
        let expr = self.expression()?;
        if !self.is_at_end() {
            return Err(self.error(self.peek(), "unexpected token after end of expression"));
        }
        Ok(expr)
    }

    fn expression(&mut self) -> ParseResult {
        self.implication()
    }

    fn implication(&mut self) -> ParseResult {
        let mut expr = self.binary()?;

        while let Some(operator) = self.match_any(&[TokenKind::Implies, TokenKind::Equivalent]) {
            let right = self.binary()?;
            expr = match operator.kind {
                TokenKind::Implies => expr.implies(right),
                _ => expr.equivalent(right),
            };
        }

        Ok(expr)
    }

    fn binary(&mut self) -> ParseResult {
        let mut expr = self.unary()?;

        while let Some(operator) = self.match_any(&[TokenKind::And, TokenKind::Or]) {
            let right = self.unary()?;
            expr = match operator.kind {
                TokenKind::And => expr.and(right),
                _ => expr.or(right),
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult {
        if let Some(operator) = self.match_any(&[TokenKind::Not]) {
            let right = self.nested(operator, Self::unary)?;
            return Ok(right.not());
        }
        self.primary()
    }

    fn primary(&mut self) -> ParseResult {
        if let Some(name) = self.match_any(&[TokenKind::Identifier]) {
            return Ok(Expr::atom(name.lexeme));
        }

        if let Some(quantifier) = self.match_any(&[TokenKind::One, TokenKind::All]) {
            let element = self.consume(
                TokenKind::Identifier,
                &format!("expect element name after '{}'", quantifier.lexeme),
            )?;
            self.consume(TokenKind::In, "expect 'in' after element name")?;
            let set = self.consume(TokenKind::Identifier, "expect set name after 'in'")?;
            return Ok(match quantifier.kind {
                TokenKind::One => Expr::gen_disj(element.lexeme, set.lexeme),
                _ => Expr::gen_conj(element.lexeme, set.lexeme),
            });
        }

        if let Some(paren) = self.match_any(&[TokenKind::LeftParen]) {
            let expr = self.nested(paren, Self::expression)?;
            self.consume(TokenKind::RightParen, "expect ')' after expression")?;
            return Ok(expr);
        }

        Err(self.error(self.peek(), "expect expression"))
    }

    /// Run `rule` one nesting level deeper, failing at `opener` past [`MAX_NESTING`]
    fn nested(&mut self, opener: Token<'src>, rule: fn(&mut Self) -> ParseResult) -> ParseResult {
        if self.depth >= MAX_NESTING {
            return Err(self.error(opener, "expression nested too deeply"));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token<'src>, Diagnostic> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.error(self.peek(), message))
    }

    fn error(&self, token: Token<'src>, message: &str) -> Diagnostic {
        debug!(target: targets::PARSER, "{} at {:?}", message, token);
        Diagnostic::parse(&token, message)
    }

    fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token<'src>> {
        if kinds.iter().any(|&kind| self.check(kind)) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn advance(&mut self) -> Token<'src> {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> Token<'src> {
        // A slice without a trailing EOF still ends the parse cleanly.
        self.tokens.get(self.current).copied().unwrap_or_else(|| {
            let end = self.tokens.last().map_or(0, |t| t.span.to);
            Token::new(TokenKind::Eof, "", Span::empty(end))
        })
    }

    fn previous(&self) -> Token<'src> {
        self.tokens[self.current - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{DiagnosticKind, Location};

    fn parse(source: &str) -> Expr {
        Expr::parse(source).unwrap()
    }

    fn parse_err(source: &str) -> Diagnostic {
        let err = Expr::parse(source).unwrap_err();
        assert_eq!(err.diagnostics.len(), 1, "{:?}", err.diagnostics);
        err.diagnostics[0].clone()
    }

    fn a() -> Expr {
        Expr::atom("a")
    }
    fn b() -> Expr {
        Expr::atom("b")
    }
    fn c() -> Expr {
        Expr::atom("c")
    }

    #[test]
    fn test_atom() {
        assert_eq!(parse("a"), a());
        assert_eq!(parse("  a  "), a());
    }

    #[test]
    fn test_binary_is_left_associative_without_precedence_between_and_or() {
        assert_eq!(parse("a & b | c"), a().and(b()).or(c()));
        assert_eq!(parse("a | b & c"), a().or(b()).and(c()));
    }

    #[test]
    fn test_implication_binds_weaker_than_binary() {
        assert_eq!(parse("a & b -> c"), a().and(b()).implies(c()));
        assert_eq!(parse("a -> b == c"), a().implies(b()).equivalent(c()));
        assert_eq!(parse("a -> b -> c"), a().implies(b()).implies(c()));
    }

    #[test]
    fn test_unary_binds_tightest() {
        assert_eq!(parse("!a & b"), a().not().and(b()));
        assert_eq!(parse("!!a"), a().not().not());
        assert_eq!(parse("!(a & b)"), a().and(b()).not());
    }

    #[test]
    fn test_parentheses_group() {
        assert_eq!(parse("a & (b -> c)"), a().and(b().implies(c())));
        assert_eq!(parse("((a))"), a());
    }

    #[test]
    fn test_quantified_forms() {
        assert_eq!(parse("one x in X"), Expr::gen_disj("x", "X"));
        assert_eq!(parse("any x of X"), Expr::gen_disj("x", "X"));
        assert_eq!(parse("all y in Y"), Expr::gen_conj("y", "Y"));
        assert_eq!(
            parse("(one x in X) -> a"),
            Expr::gen_disj("x", "X").implies(a())
        );
        assert_eq!(parse("!all y of Y"), Expr::gen_conj("y", "Y").not());
    }

    #[test]
    fn test_missing_operand_reports_at_end() {
        let diag = parse_err("a &");
        assert_eq!(diag.kind, DiagnosticKind::Parse);
        assert_eq!(diag.location, Location::End { offset: 3 });
        assert_eq!(diag.to_string(), "Error at end: expect expression");
    }

    #[test]
    fn test_unmatched_paren() {
        let diag = parse_err("(a & b");
        assert_eq!(diag.message.as_ref(), "expect ')' after expression");
        assert!(matches!(diag.location, Location::End { .. }));
    }

    #[test]
    fn test_trailing_tokens_are_rejected() {
        let diag = parse_err("a b");
        assert_eq!(diag.message.as_ref(), "unexpected token after end of expression");
        assert_eq!(
            diag.location,
            Location::Span {
                span: Span::new(2, 3),
                lexeme: "b".into()
            }
        );
        let diag = parse_err("a)");
        assert_eq!(diag.to_string(), "Error at ')': unexpected token after end of expression");
    }

    #[test]
    fn test_quantifier_errors() {
        assert_eq!(
            parse_err("one in X").message.as_ref(),
            "expect element name after 'one'"
        );
        assert_eq!(
            parse_err("any x X").message.as_ref(),
            "expect 'in' after element name"
        );
        assert_eq!(parse_err("all x in").message.as_ref(), "expect set name after 'in'");
        // Keywords cannot be used as atom names
        assert_eq!(parse_err("in").message.as_ref(), "expect expression");
    }

    #[test]
    fn test_operator_in_operand_position() {
        let diag = parse_err("a & | b");
        assert_eq!(diag.to_string(), "Error at '|': expect expression");
        assert_eq!(diag.render("a & | b"), "Error at '|': expect expression\na & | b\n    ^");
    }

    #[test]
    fn test_lex_errors_skip_parsing() {
        let err = Expr::parse("a @ & #").unwrap_err();
        assert_eq!(err.diagnostics.len(), 2);
        assert!(err
            .diagnostics
            .iter()
            .all(|d| d.kind == DiagnosticKind::Lex));
    }

    #[test]
    fn test_parser_over_scanned_tokens() {
        let (tokens, diagnostics) = scan("a == b");
        assert!(!diagnostics.has_errors());
        assert_eq!(Parser::new(&tokens).parse(), Ok(a().equivalent(b())));
    }

    #[test]
    fn test_empty_input() {
        let diag = parse_err("");
        assert_eq!(diag.location, Location::End { offset: 0 });
    }

    #[test]
    fn test_deep_parentheses_are_rejected() {
        let deep = format!("{}a{}", "(".repeat(2000), ")".repeat(2000));
        let diag = parse_err(&deep);
        assert_eq!(diag.message.as_ref(), "expression nested too deeply");
        assert_eq!(
            diag.location,
            Location::Span {
                span: Span::new(MAX_NESTING, MAX_NESTING + 1),
                lexeme: "(".into()
            }
        );
    }

    #[test]
    fn test_deep_negation_is_rejected() {
        let deep = format!("{}a", "!".repeat(20000));
        let diag = parse_err(&deep);
        assert_eq!(diag.to_string(), "Error at '!': expression nested too deeply");
    }

    #[test]
    fn test_nesting_up_to_the_limit_parses() {
        let half = MAX_NESTING / 2;
        let source = format!("{}{}a{}", "(".repeat(half), "!".repeat(half), ")".repeat(half));
        let mut expected = a();
        for _ in 0..half {
            expected = expected.not();
        }
        assert_eq!(parse(&source), expected);

        let siblings = vec!["(a)"; 4 * MAX_NESTING].join(" & ");
        assert!(Expr::parse(&siblings).is_ok());
    }
}
