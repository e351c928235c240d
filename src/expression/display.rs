//! Display formatting for boolean expressions
//!
//! Three notations are supported:
//!
//! - `{}` prints the source syntax with every binary node parenthesised, so the
//!   output parses back to the same tree: `((a & b) -> one x in X)`
//! - `{:#}` prints mathematical notation: `((a ∧ b) ⟶ {⋁ x ∈ X})`
//! - [`Expr::to_latex`] prints LaTeX: `((a \land b) \rightarrow \bigvee_{x \in X} x)`

use super::Expr;
use std::fmt;

/// One rendering of an expression
#[derive(Clone, Copy, PartialEq, Eq)]
enum Notation {
    Source,
    Unicode,
    Latex,
}

impl Notation {
    fn not(self) -> &'static str {
        match self {
            Notation::Source => "!",
            Notation::Unicode => "¬",
            Notation::Latex => "\\neg ",
        }
    }

    fn and(self) -> &'static str {
        match self {
            Notation::Source => " & ",
            Notation::Unicode => " ∧ ",
            Notation::Latex => " \\land ",
        }
    }

    fn or(self) -> &'static str {
        match self {
            Notation::Source => " | ",
            Notation::Unicode => " ∨ ",
            Notation::Latex => " \\lor ",
        }
    }

    fn implies(self) -> &'static str {
        match self {
            Notation::Source => " -> ",
            Notation::Unicode => " ⟶ ",
            Notation::Latex => " \\rightarrow ",
        }
    }

    fn equivalent(self) -> &'static str {
        match self {
            Notation::Source => " == ",
            Notation::Unicode => " ⟷ ",
            Notation::Latex => " \\leftrightarrow ",
        }
    }
}

impl<T: fmt::Display> Expr<T> {
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, notation: Notation) -> fmt::Result {
        let (left, op, right) = match self {
            Expr::Atom(label) => return write!(f, "{}", label),
            Expr::Not(inner) => {
                f.write_str(notation.not())?;
                return inner.fmt_with(f, notation);
            }
            Expr::GenDisj { element, set } => return fmt_gen_atom(f, notation, true, element, set),
            Expr::GenConj { element, set } => return fmt_gen_atom(f, notation, false, element, set),
            Expr::And(a, b) => (a, notation.and(), b),
            Expr::Or(a, b) => (a, notation.or(), b),
            Expr::Implies(a, b) => (a, notation.implies(), b),
            Expr::Equivalent(a, b) => (a, notation.equivalent(), b),
        };
        f.write_str("(")?;
        left.fmt_with(f, notation)?;
        f.write_str(op)?;
        right.fmt_with(f, notation)?;
        f.write_str(")")
    }

    /// Render the expression in LaTeX math notation (without surrounding `$`)
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_constraints::Expr;
    ///
    /// let expr = Expr::parse("!a -> all x in X").unwrap();
    /// assert_eq!(expr.to_latex(), "(\\neg a \\rightarrow \\bigwedge_{x \\in X} x)");
    /// ```
    pub fn to_latex(&self) -> String {
        struct Latex<'a, T>(&'a Expr<T>);

        impl<T: fmt::Display> fmt::Display for Latex<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt_with(f, Notation::Latex)
            }
        }

        Latex(self).to_string()
    }
}

fn fmt_gen_atom<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    notation: Notation,
    disjunction: bool,
    element: &T,
    set: &T,
) -> fmt::Result {
    match notation {
        Notation::Source => {
            let keyword = if disjunction { "one" } else { "all" };
            write!(f, "{} {} in {}", keyword, element, set)
        }
        Notation::Unicode => {
            let symbol = if disjunction { "⋁" } else { "⋀" };
            write!(f, "{{{} {} ∈ {}}}", symbol, element, set)
        }
        Notation::Latex => {
            let symbol = if disjunction { "\\bigvee" } else { "\\bigwedge" };
            write!(f, "{}_{{{} \\in {}}} {}", symbol, element, set, element)
        }
    }
}

/// Source syntax by default, mathematical notation with `{:#}`
///
/// # Examples
///
/// ```
/// use boolean_constraints::Expr;
///
/// let expr = Expr::parse("a & !b | one x in X").unwrap();
/// assert_eq!(format!("{}", expr), "((a & !b) | one x in X)");
/// assert_eq!(format!("{:#}", expr), "((a ∧ ¬b) ∨ {⋁ x ∈ X})");
/// assert_eq!(Expr::parse(&expr.to_string()).unwrap(), expr);
/// ```
impl<T: fmt::Display> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.fmt_with(f, Notation::Unicode)
        } else {
            self.fmt_with(f, Notation::Source)
        }
    }
}
