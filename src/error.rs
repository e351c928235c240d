//! Error types for the constraint compiler
//!
//! Parse failures carry their own diagnostics; this module wraps them together
//! with I/O failures from reading input, so callers can match on one type.

use crate::expression::ParseExprError;
use std::fmt;
use std::io;

/// The main error type for compiling boolean expressions
#[derive(Debug)]
pub enum CompileError {
    /// The source text failed to lex or parse
    ///
    /// Holds every lexical error of the input, or the first parse error.
    Parse(ParseExprError),

    /// IO error wrapper
    ///
    /// Wraps standard IO errors that occur while reading source text.
    Io(io::Error),
}

impl CompileError {
    /// The parse error, if this is one
    pub fn as_parse_error(&self) -> Option<&ParseExprError> {
        match self {
            CompileError::Parse(err) => Some(err),
            CompileError::Io(_) => None,
        }
    }

    /// Diagnostics with caret pointers for parse errors, or the plain message otherwise
    pub fn render(&self) -> String {
        match self {
            CompileError::Parse(err) => err.render(),
            CompileError::Io(err) => err.to_string(),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Parse(err) => write!(f, "{}", err),
            CompileError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Parse(err) => Some(err),
            CompileError::Io(err) => Some(err),
        }
    }
}

impl From<ParseExprError> for CompileError {
    fn from(err: ParseExprError) -> Self {
        CompileError::Parse(err)
    }
}

impl From<io::Error> for CompileError {
    fn from(err: io::Error) -> Self {
        CompileError::Io(err)
    }
}

// Conversion from CompileError to io::Error for use in io::Result contexts
impl From<CompileError> for io::Error {
    fn from(err: CompileError) -> Self {
        match err {
            CompileError::Io(io_err) => io_err,
            CompileError::Parse(parse_err) => parse_err.into(),
        }
    }
}
