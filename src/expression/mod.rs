//! Boolean expression types with operator overloading and parsing support
//!
//! This module provides the expression tree that the rest of the crate compiles.
//! Expressions can be built programmatically, with operator overloading, with the
//! `bexpr!` macro, or parsed from source text.
//!
//! # Main Types
//!
//! - [`Expr`] - A boolean formula over atoms and the two set-quantified forms:
//!   1. Constructor API: `Expr::atom("a").and(Expr::atom("b"))`
//!   2. Operator overloading: `!&a | &b`
//!   3. **`bexpr!` macro**: `bexpr!("a" -> one "x" in "X")`
//! - [`Literal`] - A borrowed view of a generalized atom or its negation.
//! - [`Interpretation`] - Truth values and finite sets used for evaluation.
//!
//! # Source Language
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
//! `any` is accepted as a synonym of `one`, and `of` as a synonym of `in`.
//!
//! ```
//! use boolean_constraints::Expr;
//!
//! # fn main() -> Result<(), boolean_constraints::expression::ParseExprError> {
//! let expr = Expr::parse("(one x in X) -> a")?;
//! assert_eq!(expr, Expr::gen_disj("x", "X").implies(Expr::atom("a")));
//! println!("{}", expr);   // (one x in X -> a)
//! println!("{:#}", expr); // ({⋁ x ∈ X} ⟶ a)
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod eval;
pub mod lexer;
mod operators;
pub mod parser;
pub mod token;

pub use error::{Diagnostic, DiagnosticKind, Diagnostics, Location, ParseExprError};
pub use eval::Interpretation;
pub use lexer::{scan, Lexer};
pub use parser::Parser;
pub use token::{Span, Token, TokenKind};

use std::collections::BTreeSet;

/// A boolean expression over atoms labelled by `T`
///
/// Each node owns its children, so expressions are finite trees without sharing.
/// Equality, hashing and ordering are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Expr<T = String> {
    /// A boolean variable
    Atom(T),
    /// Logical negation
    Not(Box<Expr<T>>),
    /// Logical conjunction
    And(Box<Expr<T>>, Box<Expr<T>>),
    /// Logical disjunction
    Or(Box<Expr<T>>, Box<Expr<T>>),
    /// Implication `a -> b`
    Implies(Box<Expr<T>>, Box<Expr<T>>),
    /// Equivalence `a == b`
    Equivalent(Box<Expr<T>>, Box<Expr<T>>),
    /// `one element in set`: the disjunction of the element over the members of a set
    GenDisj {
        /// The bound element
        element: T,
        /// The name of the set the element ranges over
        set: T,
    },
    /// `all element in set`: the conjunction of the element over the members of a set
    GenConj {
        /// The bound element
        element: T,
        /// The name of the set the element ranges over
        set: T,
    },
}

/// The generalized atom underneath a [`Literal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenAtom<'a, T> {
    /// A plain variable
    Atom(&'a T),
    /// A set-quantified disjunction
    Disj { element: &'a T, set: &'a T },
    /// A set-quantified conjunction
    Conj { element: &'a T, set: &'a T },
}

/// A generalized atom together with its polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a, T> {
    /// `false` if the atom appears under a negation
    pub positive: bool,
    /// The atom itself
    pub atom: GenAtom<'a, T>,
}

impl Expr {
    /// Create an atom with the given name
    pub fn atom(name: impl Into<String>) -> Self {
        Expr::Atom(name.into())
    }

    /// Create `one element in set`
    pub fn gen_disj(element: impl Into<String>, set: impl Into<String>) -> Self {
        Expr::GenDisj {
            element: element.into(),
            set: set.into(),
        }
    }

    /// Create `all element in set`
    pub fn gen_conj(element: impl Into<String>, set: impl Into<String>) -> Self {
        Expr::GenConj {
            element: element.into(),
            set: set.into(),
        }
    }
}

impl<T> Expr<T> {
    /// Logical NOT of this expression
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    /// Logical AND of this expression and `other`
    pub fn and(self, other: Self) -> Self {
        Expr::And(Box::new(self), Box::new(other))
    }

    /// Logical OR of this expression and `other`
    pub fn or(self, other: Self) -> Self {
        Expr::Or(Box::new(self), Box::new(other))
    }

    /// Implication from this expression to `other`
    pub fn implies(self, other: Self) -> Self {
        Expr::Implies(Box::new(self), Box::new(other))
    }

    /// Equivalence of this expression and `other`
    pub fn equivalent(self, other: Self) -> Self {
        Expr::Equivalent(Box::new(self), Box::new(other))
    }

    /// Returns `true` for atoms and the two set-quantified forms
    pub fn is_gen_atom(&self) -> bool {
        matches!(
            self,
            Expr::Atom(_) | Expr::GenDisj { .. } | Expr::GenConj { .. }
        )
    }

    /// Returns `true` for a generalized atom or a negated generalized atom
    pub fn is_literal(&self) -> bool {
        self.as_literal().is_some()
    }

    /// View this expression as a literal, if it is one
    pub fn as_literal(&self) -> Option<Literal<'_, T>> {
        match self {
            Expr::Not(inner) => inner.as_gen_atom().map(|atom| Literal {
                positive: false,
                atom,
            }),
            _ => self.as_gen_atom().map(|atom| Literal {
                positive: true,
                atom,
            }),
        }
    }

    fn as_gen_atom(&self) -> Option<GenAtom<'_, T>> {
        match self {
            Expr::Atom(label) => Some(GenAtom::Atom(label)),
            Expr::GenDisj { element, set } => Some(GenAtom::Disj { element, set }),
            Expr::GenConj { element, set } => Some(GenAtom::Conj { element, set }),
            _ => None,
        }
    }

    /// Number of nodes in the expression tree
    pub fn size(&self) -> usize {
        match self {
            Expr::Atom(_) | Expr::GenDisj { .. } | Expr::GenConj { .. } => 1,
            Expr::Not(inner) => 1 + inner.size(),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Implies(a, b) | Expr::Equivalent(a, b) => {
                1 + a.size() + b.size()
            }
        }
    }
}

impl<T: Ord + Clone> Expr<T> {
    /// Collect the labels of all plain atoms, sorted and deduplicated
    ///
    /// Elements bound by `one`/`all` are not atoms and are not collected.
    pub fn atoms(&self) -> BTreeSet<T> {
        let mut out = BTreeSet::new();
        self.visit(&mut |expr| {
            if let Expr::Atom(label) = expr {
                out.insert(label.clone());
            }
        });
        out
    }

    /// Collect the names of all sets referenced by generalized atoms
    pub fn sets(&self) -> BTreeSet<T> {
        let mut out = BTreeSet::new();
        self.visit(&mut |expr| {
            if let Expr::GenDisj { set, .. } | Expr::GenConj { set, .. } = expr {
                out.insert(set.clone());
            }
        });
        out
    }

    fn visit(&self, f: &mut impl FnMut(&Expr<T>)) {
        f(self);
        match self {
            Expr::Atom(_) | Expr::GenDisj { .. } | Expr::GenConj { .. } => {}
            Expr::Not(inner) => inner.visit(f),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Implies(a, b) | Expr::Equivalent(a, b) => {
                a.visit(f);
                b.visit(f);
            }
        }
    }
}

impl<T: Ord + Clone + std::fmt::Debug> Expr<T> {
    /// Convert this expression to conjunctive normal form
    ///
    /// See [`crate::cnf::to_cnf`].
    pub fn to_cnf(&self) -> crate::cnf::Cnf<T> {
        crate::cnf::to_cnf(self)
    }
}
