//! Pseudo-boolean constraints built from CNF clauses
//!
//! Every clause becomes one linear inequality over 0/1 variables. A clause
//! `(x1 ∨ ¬x2)` reads `x1 + (1 - x2) ≥ 1`, which is stored as `x1 - x2 ≥ 0`:
//! each negated variable moves a `1` to the right-hand side.
//!
//! Generalized literals are encoded as follows:
//!
//! | literal            | encoding                                              |
//! |--------------------|-------------------------------------------------------|
//! | `one e in S`       | `(∑ e ∈ S)` on the left                               |
//! | `!one e in S`      | `-e` on the left, `-1` on the right, for all `e ∈ S`  |
//! | `all e in S`       | `+e` on the left, for all `e ∈ S`                     |
//! | `!all e in S`      | `-(∑ e ∈ S)` on the left, `-‖S‖` on the right          |
//!
//! # Examples
//!
//! ```
//! use boolean_constraints::constraint::constraints;
//! use boolean_constraints::Expr;
//!
//! let cnf = Expr::parse("(one x in X) -> a").unwrap().to_cnf();
//! let constraints = constraints(&cnf);
//! assert_eq!(constraints.len(), 1);
//! assert_eq!(constraints[0].to_string(), "(∀ x ∈ X) : a - x ≥ 0");
//! ```

mod display;
mod eval;

use crate::cnf::{Clause, Cnf};
use crate::expression::{GenAtom, Literal};
use crate::log::targets;
use log::{debug, trace};
use std::collections::BTreeSet;
use std::fmt::Debug;

/// An element ranging over a named set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetTerm<T = String> {
    pub element: T,
    pub set: T,
}

impl<T> SetTerm<T> {
    pub fn new(element: T, set: T) -> Self {
        SetTerm { element, set }
    }
}

/// Left-hand side of a constraint: a sum of ±1 terms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lhs<T = String> {
    /// Variables with coefficient `+1`
    pub pos_var: Vec<T>,
    /// Variables with coefficient `-1`
    pub neg_var: Vec<T>,
    /// Set sums with coefficient `+1`
    pub pos_set: Vec<SetTerm<T>>,
    /// Set sums with coefficient `-1`
    pub neg_set: Vec<SetTerm<T>>,
}

impl<T> Default for Lhs<T> {
    fn default() -> Self {
        Lhs {
            pos_var: Vec::new(),
            neg_var: Vec::new(),
            pos_set: Vec::new(),
            neg_set: Vec::new(),
        }
    }
}

impl<T> Lhs<T> {
    pub fn is_empty(&self) -> bool {
        self.pos_var.is_empty()
            && self.neg_var.is_empty()
            && self.pos_set.is_empty()
            && self.neg_set.is_empty()
    }
}

/// Right-hand side of a constraint: a constant minus set cardinalities
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rhs<T = String> {
    pub constant: i64,
    /// Sets whose cardinality is subtracted from the constant
    pub neg_set: Vec<SetTerm<T>>,
}

/// The linear inequality `lhs ≥ rhs` for one clause, required for every binding
/// of the universally quantified elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClauseConstraint<T = String> {
    pub all_quant: BTreeSet<SetTerm<T>>,
    pub lhs: Lhs<T>,
    pub rhs: Rhs<T>,
}

impl<T: Ord + Clone> ClauseConstraint<T> {
    /// Encode one clause
    ///
    /// Literals are visited in the clause's sorted order, so the term lists are
    /// deterministic.
    pub fn from_clause(clause: &Clause<T>) -> Self {
        let mut all_quant = BTreeSet::new();
        let mut lhs = Lhs::default();
        let mut rhs = Rhs {
            constant: 1,
            neg_set: Vec::new(),
        };

        for Literal { positive, atom } in clause.literals() {
            match (positive, atom) {
                (true, GenAtom::Atom(name)) => lhs.pos_var.push(name.clone()),
                (false, GenAtom::Atom(name)) => {
                    lhs.neg_var.push(name.clone());
                    rhs.constant -= 1;
                }
                (true, GenAtom::Disj { element, set }) => {
                    lhs.pos_set.push(SetTerm::new(element.clone(), set.clone()));
                }
                // ¬∃e∈S. e  ≡  ∀e∈S. ¬e
                (false, GenAtom::Disj { element, set }) => {
                    all_quant.insert(SetTerm::new(element.clone(), set.clone()));
                    lhs.neg_var.push(element.clone());
                    rhs.constant -= 1;
                }
                (true, GenAtom::Conj { element, set }) => {
                    all_quant.insert(SetTerm::new(element.clone(), set.clone()));
                    lhs.pos_var.push(element.clone());
                }
                // ¬∀e∈S. e: at least one member is false, ‖S‖ - ∑ e ≥ 1
                (false, GenAtom::Conj { element, set }) => {
                    let term = SetTerm::new(element.clone(), set.clone());
                    lhs.neg_set.push(term.clone());
                    rhs.neg_set.push(term);
                }
            }
        }

        ClauseConstraint { all_quant, lhs, rhs }
    }

    /// Returns `true` if the constraint is quantified over some set
    pub fn is_quantified(&self) -> bool {
        !self.all_quant.is_empty()
    }
}

/// Encode every clause of a CNF, in clause order
pub fn constraints<T: Ord + Clone + Debug>(cnf: &Cnf<T>) -> Vec<ClauseConstraint<T>> {
    let constraints: Vec<_> = cnf
        .iter()
        .map(|clause| {
            let constraint = ClauseConstraint::from_clause(clause);
            trace!(target: targets::CONSTRAINT, "{:?} => {:?}", clause, constraint);
            constraint
        })
        .collect();
    debug!(
        target: targets::CONSTRAINT,
        "{} constraints, {} quantified",
        constraints.len(),
        constraints.iter().filter(|c| c.is_quantified()).count()
    );
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expr;

    fn constraint_of(literals: &[&str]) -> ClauseConstraint {
        let clause = Clause::new(literals.iter().map(|l| Expr::parse(l).unwrap())).unwrap();
        ClauseConstraint::from_clause(&clause)
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_plain_literals() {
        let constraint = constraint_of(&["a", "!b", "c", "!d"]);
        assert!(constraint.all_quant.is_empty());
        assert_eq!(constraint.lhs.pos_var, names(&["a", "c"]));
        assert_eq!(constraint.lhs.neg_var, names(&["b", "d"]));
        assert_eq!(constraint.rhs.constant, -1);
        assert!(constraint.rhs.neg_set.is_empty());
    }

    #[test]
    fn test_rhs_counts_negated_variables() {
        for k in 0..4 {
            let mut literals = vec!["p".to_string()];
            literals.extend((0..k).map(|i| format!("!n{}", i)));
            let literals: Vec<&str> = literals.iter().map(String::as_str).collect();
            assert_eq!(constraint_of(&literals).rhs.constant, 1 - k as i64);
        }
    }

    #[test]
    fn test_positive_gen_disj_is_a_set_sum() {
        let constraint = constraint_of(&["one x in X"]);
        assert!(constraint.all_quant.is_empty());
        assert_eq!(constraint.lhs.pos_set, vec![SetTerm::new("x".to_string(), "X".to_string())]);
        assert_eq!(constraint.rhs.constant, 1);
    }

    #[test]
    fn test_negative_gen_disj_is_quantified() {
        let constraint = constraint_of(&["!one x in X", "a"]);
        let term = SetTerm::new("x".to_string(), "X".to_string());
        assert_eq!(constraint.all_quant, BTreeSet::from([term]));
        assert_eq!(constraint.lhs.pos_var, names(&["a"]));
        assert_eq!(constraint.lhs.neg_var, names(&["x"]));
        assert_eq!(constraint.rhs.constant, 0);
    }

    #[test]
    fn test_positive_gen_conj_is_quantified() {
        let constraint = constraint_of(&["all y in Y", "!b"]);
        let term = SetTerm::new("y".to_string(), "Y".to_string());
        assert_eq!(constraint.all_quant, BTreeSet::from([term]));
        assert_eq!(constraint.lhs.pos_var, names(&["y"]));
        assert_eq!(constraint.lhs.neg_var, names(&["b"]));
        assert_eq!(constraint.rhs.constant, 0);
    }

    #[test]
    fn test_negative_gen_conj_subtracts_cardinality() {
        let constraint = constraint_of(&["!all z in Z"]);
        let term = SetTerm::new("z".to_string(), "Z".to_string());
        assert!(constraint.all_quant.is_empty());
        assert_eq!(constraint.lhs.neg_set, vec![term.clone()]);
        assert_eq!(constraint.rhs.neg_set, vec![term]);
        assert_eq!(constraint.rhs.constant, 1);
    }

    #[test]
    fn test_constraints_follow_clause_order() {
        let cnf = Expr::parse("a == b").unwrap().to_cnf();
        let constraints = constraints(&cnf);
        assert_eq!(constraints.len(), 2);
        assert_eq!(constraints[0].lhs.pos_var, names(&["a"]));
        assert_eq!(constraints[1].lhs.pos_var, names(&["b"]));
    }
}
