//! Single-pass scanner turning source text into [`Token`]s
//!
//! The lexer never stops at a bad character: it records a diagnostic and keeps
//! going, so one pass reports every lexical error in the input.

use super::error::{Diagnostic, Diagnostics};
use super::token::{Span, Token, TokenKind};
use crate::log::targets;
use log::trace;

/// Scan `source` with a fresh diagnostics collector
///
/// The returned token list always ends with a zero-width [`TokenKind::Eof`] token.
/// Callers should check [`Diagnostics::has_errors`] before parsing.
pub fn scan(source: &str) -> (Vec<Token<'_>>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = Lexer::new(source).scan(&mut diagnostics);
    (tokens, diagnostics)
}

pub struct Lexer<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    tokens: Vec<Token<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            start: 0,
            current: 0,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole source, reporting unrecognised characters into `diagnostics`
    pub fn scan(mut self, diagnostics: &mut Diagnostics) -> Vec<Token<'src>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(diagnostics);
        }

        let end = self.source.len();
        self.tokens
            .push(Token::new(TokenKind::Eof, "", Span::empty(end)));
        self.tokens
    }

    fn scan_token(&mut self, diagnostics: &mut Diagnostics) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '!' => self.add_token(TokenKind::Not),
            '&' => self.add_token(TokenKind::And),
            '|' => self.add_token(TokenKind::Or),
            '-' if self.match_char('>') => self.add_token(TokenKind::Implies),
            '=' if self.match_char('=') => self.add_token(TokenKind::Equivalent),
            ' ' | '\r' | '\t' => {}
            c if is_alpha(c) => self.identifier(),
            c => {
                let span = Span::new(self.start, self.current);
                let lexeme = &self.source[self.start..self.current];
                trace!(target: targets::LEXER, "unexpected {:?} at {}", c, span.from);
                diagnostics.push(Diagnostic::lex(
                    span,
                    lexeme,
                    format!("unexpected character '{}'", c),
                ));
            }
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alpha_numeric) {
            self.advance();
        }
        let text = &self.source[self.start..self.current];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.source[self.current..].chars().next()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let span = Span::new(self.start, self.current);
        let lexeme = &self.source[self.start..self.current];
        self.tokens.push(Token::new(kind, lexeme, span));
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
