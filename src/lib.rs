//! # Boolean Constraints
//!
//! This crate compiles a small boolean-expression language into pseudo-boolean
//! linear constraints, the input format of many constraint and SAT-style solvers.
//!
//! ## Overview
//!
//! Compilation runs in three stages:
//!
//! 1. **Parsing** - source text is scanned into tokens and parsed by a
//!    recursive-descent parser into an [`Expr`] tree.
//! 2. **CNF conversion** - the tree is rewritten into conjunctive normal form
//!    ([`Cnf`]), a set of [`Clause`]s, with subsumed clauses removed.
//! 3. **Constraint building** - each clause becomes one [`ClauseConstraint`],
//!    a linear inequality with `±1` coefficients.
//!
//! Besides plain variables the language has two set-quantified forms:
//! `one x in X` (some member of `X` is true) and `all x in X` (every member
//! is). They are kept whole through CNF conversion and encoded as set sums,
//! cardinalities or universally quantified constraint families.
//!
//! ## Compiling Source Text
//!
//! ```
//! use boolean_constraints::{compile, ReportConfig};
//!
//! # fn main() -> Result<(), boolean_constraints::CompileError> {
//! let compilation = compile("(one x in X) -> a")?;
//!
//! assert_eq!(format!("{:#}", compilation.cnf), "[[a, ¬{⋁ x ∈ X}]]");
//! assert_eq!(compilation.constraints[0].to_string(), "(∀ x ∈ X) : a - x ≥ 0");
//!
//! print!("{}", compilation.report(&ReportConfig::default()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Expressions
//!
//! Expressions can also be built in code, with methods, operators or the
//! [`bexpr!`] macro:
//!
//! ```
//! use boolean_constraints::{bexpr, Expr};
//!
//! let a = Expr::atom("a");
//! let b = Expr::atom("b");
//!
//! let with_methods = a.clone().implies(b.clone().not());
//! let with_macro = bexpr!(a -> !b);
//! assert_eq!(with_methods, with_macro);
//!
//! let with_operators = !&a | !&b;
//! assert_eq!(with_operators.to_cnf(), with_macro.to_cnf());
//! ```
//!
//! ## Diagnostics
//!
//! Lexing reports every bad character in one pass; parsing stops at the first
//! error. Both render with a caret under the offending input:
//!
//! ```
//! use boolean_constraints::Expr;
//!
//! let err = Expr::parse("a & (b | c").unwrap_err();
//! assert_eq!(
//!     err.render(),
//!     "Error at end: expect ')' after expression\na & (b | c\n          ^"
//! );
//! ```

// Public modules
pub mod cnf;
pub mod constraint;
pub mod error;
pub mod expression;

mod compile;
pub(crate) mod log;

// Re-export high-level public API
pub use boolean_constraints_macros::bexpr;
pub use cnf::{Clause, Cnf};
pub use compile::{compile, Compilation};
pub use constraint::ClauseConstraint;
pub use error::CompileError;
pub use expression::Expr;

/// Output notation for [`Compilation::report`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Unicode mathematical text
    #[default]
    Text,
    /// LaTeX math, each item wrapped in `$...$`
    Latex,
}

/// Configuration for compilation reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Notation used for every section
    pub notation: Notation,
    /// Print the parsed input expression
    pub show_input: bool,
    /// Print the conjunctive normal form
    pub show_cnf: bool,
    /// Print one constraint per clause
    pub show_constraints: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            notation: Notation::Text,
            show_input: true,
            show_cnf: true,
            show_constraints: true,
        }
    }
}

impl ReportConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_shows_everything() {
        let config = ReportConfig::new();
        assert_eq!(config.notation, Notation::Text);
        assert!(config.show_input && config.show_cnf && config.show_constraints);
    }

    #[test]
    fn test_operators_and_macro_agree() {
        let a = Expr::atom("a");
        let x = Expr::gen_disj("x", "X");
        assert_eq!(&a & &x, bexpr!(a & x));
        assert_eq!(!&a | !&x, bexpr!(!a | !x));
        assert_eq!(a.clone() | x.clone(), bexpr!("a" | one "x" in "X"));
    }
}
