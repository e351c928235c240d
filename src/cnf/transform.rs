//! Rewriting an expression into conjunctive normal form
//!
//! The conversion works on a list of disjunctions, seeded with one disjunction
//! holding the input expression. A non-literal member is taken out of some
//! disjunction and replaced by simpler members, either in the same disjunction or
//! in two copies of it (the only rules that multiply the clause count are the ones
//! distributing a conjunction). When every disjunction holds only literals the
//! result is collected into a set and subsumed clauses are dropped once.

use super::{Clause, Cnf};
use crate::expression::Expr;
use crate::log::targets;
use log::{debug, trace};
use std::collections::BTreeSet;
use std::fmt::Debug;

/// A disjunction under construction: finished literals plus members still to rewrite
struct WorkClause<T> {
    literals: BTreeSet<Expr<T>>,
    pending: Vec<Expr<T>>,
}

impl<T: Ord + Clone> WorkClause<T> {
    fn split(mut self, left: Vec<Expr<T>>, right: Vec<Expr<T>>) -> (Self, Self) {
        let mut other = WorkClause {
            literals: self.literals.clone(),
            pending: self.pending.clone(),
        };
        other.pending.extend(left);
        self.pending.extend(right);
        (other, self)
    }
}

/// Outcome of rewriting one non-literal member of a disjunction
enum Rewrite<T> {
    /// Replace the member with these members in the same disjunction
    Extend(Vec<Expr<T>>),
    /// Replace the disjunction with two copies, extended by each side
    Split(Vec<Expr<T>>, Vec<Expr<T>>),
}

/// Returns a conjunctive normal form of `expr`
///
/// The result is logically equivalent to `expr`, every clause holds only
/// literals, and no clause is a strict superset of another.
///
/// # Examples
///
/// ```
/// use boolean_constraints::cnf::to_cnf;
/// use boolean_constraints::Expr;
///
/// let expr = Expr::parse("(one x in X) -> a").unwrap();
/// let cnf = to_cnf(&expr);
/// assert_eq!(cnf.len(), 1);
/// assert_eq!(format!("{:#}", cnf), "[[a, ¬{⋁ x ∈ X}]]");
/// ```
pub fn to_cnf<T: Ord + Clone + Debug>(expr: &Expr<T>) -> Cnf<T> {
    let mut work = vec![WorkClause {
        literals: BTreeSet::new(),
        pending: vec![expr.clone()],
    }];
    let mut clauses = BTreeSet::new();
    let mut steps = 0usize;

    while let Some(mut disjunction) = work.pop() {
        let Some(member) = disjunction.pending.pop() else {
            clauses.insert(Clause(disjunction.literals));
            continue;
        };

        if member.is_literal() {
            disjunction.literals.insert(member);
            work.push(disjunction);
            continue;
        }

        steps += 1;
        trace!(target: targets::CNF, "rewrite {:?}", member);
        match rewrite(member) {
            Rewrite::Extend(members) => {
                disjunction.pending.extend(members);
                work.push(disjunction);
            }
            Rewrite::Split(left, right) => {
                let (first, second) = disjunction.split(left, right);
                work.push(first);
                work.push(second);
            }
        }
    }

    let found = clauses.len();
    let cnf = Cnf(clauses).remove_subsumed();
    debug!(
        target: targets::CNF,
        "{} rewrites, {} clauses at fixpoint, {} after subsumption",
        steps,
        found,
        cnf.len()
    );
    if cnf.len() < found {
        debug!(target: targets::SUBSUMPTION, "dropped {} subsumed clauses", found - cnf.len());
    }
    cnf
}

/// Rewrite one non-literal disjunction member
///
/// Panics if given a literal: literals are filtered out before rewriting.
fn rewrite<T: Clone>(expr: Expr<T>) -> Rewrite<T> {
    match expr {
        Expr::Not(inner) => match *inner {
            // double negation
            Expr::Not(a) => Rewrite::Extend(vec![*a]),
            // de Morgan
            Expr::And(a, b) => Rewrite::Extend(vec![Expr::Not(a), Expr::Not(b)]),
            Expr::Or(a, b) => Rewrite::Split(vec![Expr::Not(a)], vec![Expr::Not(b)]),
            // ¬(a → b) ≡ a ∧ ¬b
            Expr::Implies(a, b) => Rewrite::Extend(vec![Expr::And(a, Box::new(Expr::Not(b)))]),
            // ¬(a ↔ b) ≡ (a ∨ b) ∧ (¬a ∨ ¬b)
            Expr::Equivalent(a, b) => {
                let (a, b) = (*a, *b);
                Rewrite::Split(vec![a.clone(), b.clone()], vec![a.not(), b.not()])
            }
            Expr::Atom(_) | Expr::GenDisj { .. } | Expr::GenConj { .. } => {
                unreachable!("negated generalized atom is a literal")
            }
        },
        Expr::And(a, b) => Rewrite::Split(vec![*a], vec![*b]),
        Expr::Or(a, b) => Rewrite::Extend(vec![*a, *b]),
        Expr::Implies(a, b) => Rewrite::Extend(vec![Expr::Or(Box::new(Expr::Not(a)), b)]),
        Expr::Equivalent(a, b) => {
            let (a, b) = (*a, *b);
            Rewrite::Extend(vec![a
                .clone()
                .implies(b.clone())
                .and(b.implies(a))])
        }
        Expr::Atom(_) | Expr::GenDisj { .. } | Expr::GenConj { .. } => {
            unreachable!("generalized atom is a literal")
        }
    }
}
