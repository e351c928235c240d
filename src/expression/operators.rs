//! Operator overloading for boolean expressions
//!
//! The operators mirror the source language: `!` for NOT, `&` for AND and `|`
//! for OR. Implication and equivalence have no Rust operator and are only
//! available as [`Expr::implies`] and [`Expr::equivalent`].

use super::Expr;
use std::ops::{BitAnd, BitOr, Not};

/// Logical AND operator: `a & b`
///
/// # Examples
///
/// ```
/// use boolean_constraints::Expr;
///
/// let a = Expr::atom("a");
/// let b = Expr::atom("b");
/// assert_eq!(a.clone() & b.clone(), a.and(b));
/// ```
impl<T> BitAnd for Expr<T> {
    type Output = Expr<T>;

    fn bitand(self, rhs: Expr<T>) -> Expr<T> {
        self.and(rhs)
    }
}

/// Logical AND operator for references: `&a & &b`
///
/// Clones both operands, since the result owns its children.
impl<T: Clone> BitAnd for &Expr<T> {
    type Output = Expr<T>;

    fn bitand(self, rhs: &Expr<T>) -> Expr<T> {
        self.clone().and(rhs.clone())
    }
}

/// Logical OR operator: `a | b`
impl<T> BitOr for Expr<T> {
    type Output = Expr<T>;

    fn bitor(self, rhs: Expr<T>) -> Expr<T> {
        self.or(rhs)
    }
}

/// Logical OR operator for references: `&a | &b`
impl<T: Clone> BitOr for &Expr<T> {
    type Output = Expr<T>;

    fn bitor(self, rhs: &Expr<T>) -> Expr<T> {
        self.clone().or(rhs.clone())
    }
}

/// Logical NOT operator: `!a`
///
/// # Examples
///
/// ```
/// use boolean_constraints::Expr;
///
/// let a = Expr::atom("a");
/// assert_eq!(!a.clone(), Expr::Not(Box::new(a)));
/// ```
impl<T> Not for Expr<T> {
    type Output = Expr<T>;

    fn not(self) -> Expr<T> {
        Expr::Not(Box::new(self))
    }
}

/// Logical NOT operator for references: `!&a`
impl<T: Clone> Not for &Expr<T> {
    type Output = Expr<T>;

    fn not(self) -> Expr<T> {
        Expr::Not(Box::new(self.clone()))
    }
}
