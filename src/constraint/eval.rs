//! Checking constraints against an interpretation

use super::ClauseConstraint;
use crate::expression::Interpretation;
use std::collections::HashMap;
use std::hash::Hash;

/// Element names bound to set members for one instance of a quantified constraint
type Binding<'a, T> = HashMap<&'a T, &'a T>;

impl<T: Eq + Hash> ClauseConstraint<T> {
    /// Returns `true` if the inequality holds for every binding of the
    /// quantified elements to members of their sets
    ///
    /// A bound element takes the truth value of the member it is bound to, and
    /// shadows an atom with the same name. Quantifying over an empty set yields
    /// no instances, so the constraint holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_constraints::constraint::ClauseConstraint;
    /// use boolean_constraints::expression::Interpretation;
    /// use boolean_constraints::Expr;
    ///
    /// let cnf = Expr::parse("(one x in X) -> a").unwrap().to_cnf();
    /// let clause = cnf.iter().next().unwrap();
    /// let constraint = ClauseConstraint::from_clause(clause);
    ///
    /// let mut interpretation = Interpretation::new();
    /// interpretation.define_set("X", ["x1", "x2"]).set("x2", true);
    /// assert!(!constraint.holds(&interpretation));
    /// interpretation.set("a", true);
    /// assert!(constraint.holds(&interpretation));
    /// ```
    pub fn holds(&self, interpretation: &Interpretation<T>) -> bool {
        let quantified: Vec<(&T, &[T])> = self
            .all_quant
            .iter()
            .map(|term| (&term.element, interpretation.members(&term.set)))
            .collect();
        self.holds_for_all(interpretation, &quantified, &mut HashMap::new())
    }

    fn holds_for_all<'a>(
        &'a self,
        interpretation: &'a Interpretation<T>,
        quantified: &[(&'a T, &'a [T])],
        binding: &mut Binding<'a, T>,
    ) -> bool {
        match quantified.split_first() {
            None => self.holds_under(interpretation, binding),
            Some(((element, members), rest)) => members.iter().all(|member| {
                binding.insert(*element, member);
                self.holds_for_all(interpretation, rest, binding)
            }),
        }
    }

    fn holds_under(&self, interpretation: &Interpretation<T>, binding: &Binding<'_, T>) -> bool {
        let value = |name: &T| -> i64 {
            let truth = match binding.get(name) {
                Some(member) => interpretation.value(*member),
                None => interpretation.value(name),
            };
            i64::from(truth)
        };
        let set_sum = |set: &T| interpretation.count_true(set) as i64;

        let lhs = self.lhs.pos_var.iter().map(value).sum::<i64>()
            + self.lhs.pos_set.iter().map(|term| set_sum(&term.set)).sum::<i64>()
            - self.lhs.neg_var.iter().map(value).sum::<i64>()
            - self.lhs.neg_set.iter().map(|term| set_sum(&term.set)).sum::<i64>();
        let rhs = self.rhs.constant
            - self
                .rhs
                .neg_set
                .iter()
                .map(|term| interpretation.cardinality(&term.set) as i64)
                .sum::<i64>();
        lhs >= rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf::Clause;
    use crate::Expr;

    fn constraint_of(literals: &[&str]) -> (Clause, ClauseConstraint) {
        let clause = Clause::new(literals.iter().map(|l| Expr::parse(l).unwrap())).unwrap();
        let constraint = ClauseConstraint::from_clause(&clause);
        (clause, constraint)
    }

    #[test]
    fn test_plain_clause() {
        let (_, constraint) = constraint_of(&["a", "!b"]);
        let mut interpretation = Interpretation::new();
        assert!(constraint.holds(&interpretation));
        interpretation.set("b", true);
        assert!(!constraint.holds(&interpretation));
        interpretation.set("a", true);
        assert!(constraint.holds(&interpretation));
    }

    #[test]
    fn test_empty_set_is_vacuous() {
        let (clause, constraint) = constraint_of(&["all x in X", "a"]);
        let interpretation = Interpretation::new();
        assert!(constraint.holds(&interpretation));
        assert!(clause.evaluate(&interpretation));
    }

    #[test]
    fn test_negated_gen_conj_counts_false_members() {
        let (_, constraint) = constraint_of(&["!all x in X"]);
        let mut interpretation = Interpretation::new();
        interpretation.define_set("X", ["x1", "x2", "x3"]);
        interpretation.set("x1", true).set("x2", true);
        assert!(constraint.holds(&interpretation));
        interpretation.set("x3", true);
        assert!(!constraint.holds(&interpretation));
    }

    #[test]
    fn test_holds_matches_clause_truth() {
        let clauses: [&[&str]; 5] = [
            &["!one x in X", "a"],
            &["all x in X", "!b"],
            &["one x in X", "!all y in Y", "a"],
            &["!one x in X", "all y in Y"],
            &["!all x in X", "!all y in Y", "!a", "b"],
        ];
        let members = ["X_0", "X_1", "Y_0", "Y_1"];
        let atoms = ["a", "b"];
        for literals in clauses {
            let (clause, constraint) = constraint_of(literals);
            for bits in 0..1u32 << (members.len() + atoms.len()) {
                let mut interpretation = Interpretation::new();
                interpretation
                    .define_set("X", ["X_0", "X_1"])
                    .define_set("Y", ["Y_0", "Y_1"]);
                for (i, name) in members.iter().chain(atoms.iter()).enumerate() {
                    interpretation.set(*name, bits & (1 << i) != 0);
                }
                assert_eq!(
                    constraint.holds(&interpretation),
                    clause.evaluate(&interpretation),
                    "{} / {} under {:?}",
                    clause,
                    constraint,
                    interpretation
                );
            }
        }
    }
}
