//! Conjunctive normal form for boolean expressions
//!
//! A [`Cnf`] is a set of [`Clause`]s, and a clause is a set of literals. Both are
//! sorted sets, so duplicates collapse and iteration order is deterministic.
//!
//! # Examples
//!
//! ```
//! use boolean_constraints::Expr;
//!
//! let cnf = Expr::parse("a == b").unwrap().to_cnf();
//! assert_eq!(cnf.len(), 2);
//! assert_eq!(cnf.to_string(), "[[a, !b], [b, !a]]");
//! assert_eq!(format!("{:#}", cnf), "[[a, ¬b], [b, ¬a]]");
//! ```

mod transform;

pub use transform::to_cnf;

use crate::expression::{Expr, Interpretation, Literal};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// Returns `true` iff every member of `disjunction` is a literal
pub fn is_clause<T>(disjunction: &BTreeSet<Expr<T>>) -> bool {
    disjunction.iter().all(Expr::is_literal)
}

/// Error returned when building a [`Clause`] from a member that is not a literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotALiteral<T = String>(pub Expr<T>);

impl<T: fmt::Display> fmt::Display for NotALiteral<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a literal", self.0)
    }
}

impl<T: fmt::Display + fmt::Debug> std::error::Error for NotALiteral<T> {}

/// A disjunction of literals
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause<T = String>(BTreeSet<Expr<T>>);

impl<T: Ord> Clause<T> {
    /// Build a clause, rejecting any member that is not a literal
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_constraints::cnf::Clause;
    /// use boolean_constraints::Expr;
    ///
    /// let clause = Clause::new([Expr::atom("a"), Expr::atom("b").not()]).unwrap();
    /// assert_eq!(clause.len(), 2);
    /// assert!(Clause::new([Expr::atom("a").and(Expr::atom("b"))]).is_err());
    /// ```
    pub fn new(members: impl IntoIterator<Item = Expr<T>>) -> Result<Self, NotALiteral<T>> {
        let mut literals = BTreeSet::new();
        for member in members {
            if !member.is_literal() {
                return Err(NotALiteral(member));
            }
            literals.insert(member);
        }
        Ok(Clause(literals))
    }

    /// Returns `true` if `literal` is one of the clause's members
    pub fn contains(&self, literal: &Expr<T>) -> bool {
        self.0.contains(literal)
    }

    /// Returns `true` if every literal of `self` is also in `other`
    pub fn is_subset(&self, other: &Clause<T>) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl<T> Clause<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Expr<T>> {
        self.0.iter()
    }

    /// The members viewed as literals
    pub fn literals(&self) -> impl Iterator<Item = Literal<'_, T>> {
        self.0.iter().map(|member| match member.as_literal() {
            Some(literal) => literal,
            None => unreachable!("clause member is not a literal"),
        })
    }
}

impl<T: Eq + Hash> Clause<T> {
    /// A clause holds if any of its literals does
    pub fn evaluate(&self, interpretation: &Interpretation<T>) -> bool {
        self.0.iter().any(|literal| literal.evaluate(interpretation))
    }
}

impl<'a, T> IntoIterator for &'a Clause<T> {
    type Item = &'a Expr<T>;
    type IntoIter = btree_set::Iter<'a, Expr<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A conjunction of clauses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnf<T = String>(BTreeSet<Clause<T>>);

impl<T: Ord> Cnf<T> {
    /// Collect clauses into a CNF without removing subsumed clauses
    pub fn new(clauses: impl IntoIterator<Item = Clause<T>>) -> Self {
        Cnf(clauses.into_iter().collect())
    }

    /// Returns `true` if `clause` is one of the conjuncts
    pub fn contains(&self, clause: &Clause<T>) -> bool {
        self.0.contains(clause)
    }

    /// Drop every clause that is a strict superset of another clause
    ///
    /// A subsumed clause is implied by the smaller clause, so the conjunction keeps
    /// its meaning.
    pub fn remove_subsumed(self) -> Self {
        let keep: Vec<bool> = self
            .0
            .iter()
            .map(|clause| !self.subsumes(clause))
            .collect();
        Cnf(self
            .0
            .into_iter()
            .zip(keep)
            .filter_map(|(clause, keep)| keep.then_some(clause))
            .collect())
    }

    /// Returns `true` if some clause is a strict subset of `clause`
    fn subsumes(&self, clause: &Clause<T>) -> bool {
        self.0
            .iter()
            .any(|other| other.len() < clause.len() && other.is_subset(clause))
    }

    /// Returns `true` if no clause is a strict superset of another
    pub fn is_subsumption_free(&self) -> bool {
        self.0.iter().all(|clause| !self.subsumes(clause))
    }
}

impl<T> Cnf<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Clause<T>> {
        self.0.iter()
    }
}

impl<T: Eq + Hash> Cnf<T> {
    /// A CNF holds if every clause does
    pub fn evaluate(&self, interpretation: &Interpretation<T>) -> bool {
        self.0.iter().all(|clause| clause.evaluate(interpretation))
    }
}

impl<'a, T> IntoIterator for &'a Cnf<T> {
    type Item = &'a Clause<T>;
    type IntoIter = btree_set::Iter<'a, Clause<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> IntoIterator for Cnf<T> {
    type Item = Clause<T>;
    type IntoIter = btree_set::IntoIter<Clause<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// `[a, !b]`, or `[a, ¬b]` with `{:#}`
impl<T: fmt::Display> fmt::Display for Clause<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, literal) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if f.alternate() {
                write!(f, "{:#}", literal)?;
            } else {
                write!(f, "{}", literal)?;
            }
        }
        f.write_str("]")
    }
}

/// `[[a, !b], [c]]`, or the unicode literal form with `{:#}`
impl<T: fmt::Display> fmt::Display for Cnf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, clause) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if f.alternate() {
                write!(f, "{:#}", clause)?;
            } else {
                write!(f, "{}", clause)?;
            }
        }
        f.write_str("]")
    }
}

impl<T: fmt::Display> Clause<T> {
    /// `(a \lor \neg b)`
    pub fn to_latex(&self) -> String {
        let literals: Vec<String> = self.0.iter().map(Expr::to_latex).collect();
        format!("({})", literals.join(" \\lor "))
    }
}

impl<T: fmt::Display> Cnf<T> {
    /// `(a \lor \neg b) \land (c)`, or `\top` for the empty conjunction
    pub fn to_latex(&self) -> String {
        if self.0.is_empty() {
            return "\\top".to_string();
        }
        let clauses: Vec<String> = self.0.iter().map(Clause::to_latex).collect();
        clauses.join(" \\land ")
    }
}
