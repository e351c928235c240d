//! Evaluation of boolean expressions over finite sets

use super::Expr;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Truth values for atoms plus the members of every named set
///
/// Set members are atom labels: `one x in X` holds when at least one member of
/// `X` is true, `all x in X` when every member is. Atoms without a value are
/// false and sets without members are empty.
///
/// # Examples
///
/// ```
/// use boolean_constraints::expression::Interpretation;
/// use boolean_constraints::Expr;
///
/// let mut interpretation = Interpretation::new();
/// interpretation.set("p1", true);
/// interpretation.define_set("P", ["p1", "p2"]);
///
/// let expr = Expr::parse("one x in P & !all x in P").unwrap();
/// assert!(expr.evaluate(&interpretation));
/// ```
#[derive(Debug, Clone)]
pub struct Interpretation<T = String> {
    values: HashMap<T, bool>,
    sets: HashMap<T, Vec<T>>,
}

impl<T> Default for Interpretation<T> {
    fn default() -> Self {
        Interpretation {
            values: HashMap::new(),
            sets: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash> Interpretation<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a truth value to an atom
    pub fn set(&mut self, atom: impl Into<T>, value: bool) -> &mut Self {
        self.values.insert(atom.into(), value);
        self
    }

    /// Define the members of a set, replacing any previous definition
    pub fn define_set<I>(&mut self, set: impl Into<T>, members: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        self.sets
            .insert(set.into(), members.into_iter().map(Into::into).collect());
        self
    }

    /// Truth value of an atom, `false` if unassigned
    pub fn value<Q>(&self, atom: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.values.get(atom).copied().unwrap_or(false)
    }

    /// Members of a set, empty if undefined
    pub fn members<Q>(&self, set: &Q) -> &[T]
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.sets.get(set).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of members in a set
    pub fn cardinality<Q>(&self, set: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.members(set).len()
    }

    /// Number of true members in a set
    pub fn count_true<Q>(&self, set: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.members(set)
            .iter()
            .filter(|member| self.value::<T>(member))
            .count()
    }
}

impl<T: Eq + Hash> Expr<T> {
    /// Evaluate the expression under an interpretation
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_constraints::expression::Interpretation;
    /// use boolean_constraints::Expr;
    ///
    /// let expr = Expr::parse("a == b").unwrap();
    /// let mut interpretation = Interpretation::new();
    /// assert!(expr.evaluate(&interpretation));
    /// interpretation.set("a", true);
    /// assert!(!expr.evaluate(&interpretation));
    /// ```
    pub fn evaluate(&self, interpretation: &Interpretation<T>) -> bool {
        match self {
            Expr::Atom(label) => interpretation.value(label),
            Expr::Not(inner) => !inner.evaluate(interpretation),
            Expr::And(a, b) => a.evaluate(interpretation) && b.evaluate(interpretation),
            Expr::Or(a, b) => a.evaluate(interpretation) || b.evaluate(interpretation),
            Expr::Implies(a, b) => !a.evaluate(interpretation) || b.evaluate(interpretation),
            Expr::Equivalent(a, b) => a.evaluate(interpretation) == b.evaluate(interpretation),
            Expr::GenDisj { set, .. } => interpretation
                .members(set)
                .iter()
                .any(|member| interpretation.value(member)),
            Expr::GenConj { set, .. } => interpretation
                .members(set)
                .iter()
                .all(|member| interpretation.value(member)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_atoms_are_false_and_unknown_sets_empty() {
        let interpretation = Interpretation::new();
        assert!(!Expr::atom("a").evaluate(&interpretation));
        assert!(!Expr::gen_disj("x", "X").evaluate(&interpretation));
        assert!(Expr::gen_conj("x", "X").evaluate(&interpretation));
    }

    #[test]
    fn test_set_quantifiers() {
        let mut interpretation = Interpretation::new();
        interpretation
            .define_set("X", ["x1", "x2", "x3"])
            .set("x2", true);
        assert!(Expr::gen_disj("x", "X").evaluate(&interpretation));
        assert!(!Expr::gen_conj("x", "X").evaluate(&interpretation));
        assert_eq!(interpretation.count_true("X"), 1);
        assert_eq!(interpretation.cardinality("X"), 3);

        interpretation.set("x1", true).set("x3", true);
        assert!(Expr::gen_conj("x", "X").evaluate(&interpretation));
    }

    #[test]
    fn test_count_true_with_non_string_labels() {
        let mut interpretation: Interpretation<u32> = Interpretation::new();
        interpretation
            .define_set(10u32, [1u32, 2, 3])
            .set(1u32, true)
            .set(3u32, true);
        assert_eq!(interpretation.count_true(&10u32), 2);
        assert_eq!(interpretation.cardinality(&10u32), 3);
        assert_eq!(interpretation.count_true(&11u32), 0);
        let cloned = interpretation.clone();
        assert!(cloned.value(&3u32));
        assert!(!cloned.value(&2u32));
    }

    #[test]
    fn test_connectives() {
        let mut interpretation = Interpretation::new();
        interpretation.set("a", true);
        let a = Expr::atom("a");
        let b = Expr::atom("b");
        assert!(!a.clone().and(b.clone()).evaluate(&interpretation));
        assert!(a.clone().or(b.clone()).evaluate(&interpretation));
        assert!(!a.clone().implies(b.clone()).evaluate(&interpretation));
        assert!(b.clone().implies(a.clone()).evaluate(&interpretation));
        assert!(!a.clone().equivalent(b.clone()).evaluate(&interpretation));
        assert!(a.not().or(b.not()).evaluate(&interpretation));
    }
}
