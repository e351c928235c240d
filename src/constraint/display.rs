//! Text and LaTeX rendering of constraints

use super::{ClauseConstraint, SetTerm};
use std::fmt;

#[derive(Clone, Copy)]
enum Notation {
    Text,
    Latex,
}

impl Notation {
    fn quantifier<T: fmt::Display>(self, term: &SetTerm<T>) -> String {
        match self {
            Notation::Text => format!("(∀ {} ∈ {})", term.element, term.set),
            Notation::Latex => format!("\\forall {} \\in {}", term.element, term.set),
        }
    }

    fn quantifier_separator(self) -> &'static str {
        match self {
            Notation::Text => " ",
            Notation::Latex => ", ",
        }
    }

    fn colon(self) -> &'static str {
        match self {
            Notation::Text => " : ",
            Notation::Latex => " \\colon ",
        }
    }

    fn sum<T: fmt::Display>(self, term: &SetTerm<T>) -> String {
        match self {
            Notation::Text => format!("(∑ {} ∈ {})", term.element, term.set),
            Notation::Latex => format!(
                "\\sum_{{{} \\in {}}} {}",
                term.element, term.set, term.element
            ),
        }
    }

    fn cardinality<T: fmt::Display>(self, term: &SetTerm<T>) -> String {
        match self {
            Notation::Text => format!("‖{}‖", term.set),
            Notation::Latex => format!("\\lvert {} \\rvert", term.set),
        }
    }

    fn geq(self) -> &'static str {
        match self {
            Notation::Text => " ≥ ",
            Notation::Latex => " \\geq ",
        }
    }
}

impl<T: fmt::Display> ClauseConstraint<T> {
    /// Render as LaTeX math, without surrounding `$`
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_constraints::constraint::constraints;
    /// use boolean_constraints::Expr;
    ///
    /// let cnf = Expr::parse("!all y in Y | b").unwrap().to_cnf();
    /// let constraints = constraints(&cnf);
    /// assert_eq!(
    ///     constraints[0].to_latex(),
    ///     "b - \\sum_{y \\in Y} y \\geq 1 - \\lvert Y \\rvert"
    /// );
    /// ```
    pub fn to_latex(&self) -> String {
        self.render(Notation::Latex)
    }

    fn render(&self, notation: Notation) -> String {
        let mut out = String::new();

        if !self.all_quant.is_empty() {
            let quantifiers: Vec<String> = self
                .all_quant
                .iter()
                .map(|term| notation.quantifier(term))
                .collect();
            out.push_str(&quantifiers.join(notation.quantifier_separator()));
            out.push_str(notation.colon());
        }

        let positive = self
            .lhs
            .pos_var
            .iter()
            .map(ToString::to_string)
            .chain(self.lhs.pos_set.iter().map(|term| notation.sum(term)));
        let negative = self
            .lhs
            .neg_var
            .iter()
            .map(ToString::to_string)
            .chain(self.lhs.neg_set.iter().map(|term| notation.sum(term)));

        let mut lhs = positive.collect::<Vec<_>>().join(" + ");
        for term in negative {
            if lhs.is_empty() {
                lhs.push('-');
            } else {
                lhs.push_str(" - ");
            }
            lhs.push_str(&term);
        }
        if lhs.is_empty() {
            lhs.push('0');
        }
        out.push_str(&lhs);
        out.push_str(notation.geq());

        let cardinalities: Vec<String> = self
            .rhs
            .neg_set
            .iter()
            .map(|term| notation.cardinality(term))
            .collect();
        if cardinalities.is_empty() {
            out.push_str(&self.rhs.constant.to_string());
        } else if self.rhs.constant == 0 {
            out.push('-');
            out.push_str(&cardinalities.join(" - "));
        } else {
            out.push_str(&self.rhs.constant.to_string());
            out.push_str(" - ");
            out.push_str(&cardinalities.join(" - "));
        }
        out
    }
}

/// `(∀ x ∈ X) : a - x ≥ 0`
impl<T: fmt::Display> fmt::Display for ClauseConstraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Text))
    }
}
