//! Tokens produced by the [`Lexer`](super::Lexer)

use std::fmt;

/// Half-open byte range `[from, to)` into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub from: usize,
    pub to: usize,
}

impl Span {
    pub fn new(from: usize, to: usize) -> Self {
        Span { from, to }
    }

    /// Zero-width span at `offset`
    pub fn empty(offset: usize) -> Self {
        Span {
            from: offset,
            to: offset,
        }
    }
}

/// Kind of a lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    /// `!`
    Not,
    /// `&`
    And,
    /// `|`
    Or,
    /// `->`
    Implies,
    /// `==`
    Equivalent,
    Identifier,
    /// `one` or `any`
    One,
    /// `all`
    All,
    /// `in` or `of`
    In,
    Eof,
}

impl TokenKind {
    /// Keyword kind for an identifier-shaped lexeme, if it is reserved
    pub fn keyword(lexeme: &str) -> Option<TokenKind> {
        match lexeme {
            "one" | "any" => Some(TokenKind::One),
            "all" => Some(TokenKind::All),
            "in" | "of" => Some(TokenKind::In),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Implies => "IMPLIES",
            TokenKind::Equivalent => "EQUIVALENT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::One => "ONE",
            TokenKind::All => "ALL",
            TokenKind::In => "IN",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A token borrowing its lexeme from the scanned source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Token { kind, lexeme, span }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)
    }
}
