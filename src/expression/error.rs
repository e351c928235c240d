//! Diagnostics for lexing and parsing boolean expressions
//!
//! Both stages report into an explicit [`Diagnostics`] collector that the caller
//! owns. Each [`Diagnostic`] remembers where it happened, so it can be rendered
//! with a caret pointer under the offending part of the source line.

use super::token::{Span, Token, TokenKind};
use std::fmt;
use std::io;
use std::sync::Arc;

/// Stage that produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Unrecognised character
    Lex,
    /// Unexpected or missing token
    Parse,
}

/// Where in the source a diagnostic points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A character span; `lexeme` is the offending text
    Span { span: Span, lexeme: Arc<str> },
    /// The input ended before the parser was done
    End { offset: usize },
}

impl Location {
    /// Location of a token, using [`Location::End`] for the EOF token
    pub fn of_token(token: &Token<'_>) -> Self {
        if token.kind == TokenKind::Eof {
            Location::End {
                offset: token.span.from,
            }
        } else {
            Location::Span {
                span: token.span,
                lexeme: Arc::from(token.lexeme),
            }
        }
    }

    /// Byte offset the caret starts at
    pub fn offset(&self) -> usize {
        match self {
            Location::Span { span, .. } => span.from,
            Location::End { offset } => *offset,
        }
    }
}

/// A single lexer or parser error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: Arc<str>,
    pub location: Location,
}

impl Diagnostic {
    pub fn lex(span: Span, lexeme: &str, message: impl Into<Arc<str>>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Lex,
            message: message.into(),
            location: Location::Span {
                span,
                lexeme: Arc::from(lexeme),
            },
        }
    }

    pub fn parse(token: &Token<'_>, message: impl Into<Arc<str>>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Parse,
            message: message.into(),
            location: Location::of_token(token),
        }
    }

    /// Render the diagnostic as a header line, the source line and a caret line
    ///
    /// Tabs in the source are shown as single spaces so the caret stays aligned.
    pub fn render(&self, source: &str) -> String {
        let offset = self.location.offset();
        // Caret columns count characters, not bytes.
        let column = source
            .get(..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset);
        let width = match &self.location {
            Location::Span { lexeme, .. } => lexeme.chars().count().max(1),
            Location::End { .. } => 1,
        };
        format!(
            "{}\n{}\n{}{}",
            self,
            source.replace('\t', " "),
            " ".repeat(column),
            "^".repeat(width)
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.location) {
            (DiagnosticKind::Lex, _) => write!(f, "Error: {}", self.message),
            (DiagnosticKind::Parse, Location::End { .. }) => {
                write!(f, "Error at end: {}", self.message)
            }
            (DiagnosticKind::Parse, Location::Span { lexeme, .. }) => {
                write!(f, "Error at '{}': {}", lexeme, self.message)
            }
        }
    }
}

impl std::error::Error for Diagnostic {}

/// Collector for diagnostics, threaded through the lexer and handed back to the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Errors that can occur when parsing a boolean expression
///
/// This error type is returned by [`Expr::parse`](super::Expr::parse). It keeps the
/// original source so every diagnostic can be rendered with its caret line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseExprError {
    /// The original input string that failed to parse
    pub input: Arc<str>,
    /// All lexical errors, or the single parse error
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseExprError {
    pub fn new(input: &str, diagnostics: Diagnostics) -> Self {
        ParseExprError {
            input: Arc::from(input),
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// Render every diagnostic with its caret pointer, separated by newlines
    pub fn render(&self) -> String {
        self.diagnostics
            .iter()
            .map(|d| d.render(&self.input))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ParseExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diagnostics.as_slice() {
            [] => write!(f, "Failed to parse boolean expression {:?}", self.input),
            [single] => write!(
                f,
                "Failed to parse boolean expression at position {}: {}",
                single.location.offset(),
                single.message
            ),
            many => write!(
                f,
                "Failed to parse boolean expression: {} errors, first at position {}: {}",
                many.len(),
                many[0].location.offset(),
                many[0].message
            ),
        }
    }
}

impl std::error::Error for ParseExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.diagnostics
            .first()
            .map(|d| d as &(dyn std::error::Error + 'static))
    }
}

impl From<ParseExprError> for io::Error {
    fn from(err: ParseExprError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eof(offset: usize) -> Token<'static> {
        Token::new(TokenKind::Eof, "", Span::empty(offset))
    }

    #[test]
    fn test_parse_error_at_end_renders_single_caret() {
        let source = "a &";
        let diag = Diagnostic::parse(&eof(3), "expect expression");
        assert_eq!(diag.to_string(), "Error at end: expect expression");
        assert_eq!(diag.render(source), "Error at end: expect expression\na &\n   ^");
    }

    #[test]
    fn test_parse_error_at_token_underlines_lexeme() {
        let source = "a b_c";
        let token = Token::new(TokenKind::Identifier, "b_c", Span::new(2, 5));
        let diag = Diagnostic::parse(&token, "unexpected token after end of expression");
        let rendered = diag.render(source);
        assert!(rendered.starts_with("Error at 'b_c': unexpected token"));
        assert!(rendered.ends_with("\n  ^^^"));
    }

    #[test]
    fn test_tabs_are_rendered_as_spaces() {
        let source = "\ta # b";
        let diag = Diagnostic::lex(Span::new(3, 4), "#", "unexpected character '#'");
        assert_eq!(
            diag.render(source),
            "Error: unexpected character '#'\n a # b\n   ^"
        );
    }

    #[test]
    fn test_parse_expr_error_display() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::parse(&eof(3), "expect expression"));
        let err = ParseExprError::new("a &", diagnostics);
        assert_eq!(
            err.to_string(),
            "Failed to parse boolean expression at position 3: expect expression"
        );
        assert_eq!(err.render(), "Error at end: expect expression\na &\n   ^");
    }

    #[test]
    fn test_parse_expr_error_display_summarises_many() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::lex(Span::new(2, 3), "$", "unexpected character '$'"));
        diagnostics.push(Diagnostic::lex(Span::new(6, 7), "#", "unexpected character '#'"));
        let err = ParseExprError::new("a $ b # c", diagnostics);
        assert_eq!(
            err.to_string(),
            "Failed to parse boolean expression: 2 errors, first at position 2: unexpected character '$'"
        );
        assert_eq!(err.render().lines().count(), 6);
    }

    #[test]
    fn test_parse_expr_error_to_io_error() {
        let err = ParseExprError::new("#", Diagnostics::new());
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_error_trait_source() {
        use std::error::Error;

        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::lex(Span::new(0, 1), "#", "unexpected character '#'"));
        let err = ParseExprError::new("#", diagnostics);
        assert!(err.source().is_some());
        assert!(ParseExprError::new("", Diagnostics::new()).source().is_none());
    }
}
