//! The full pipeline from source text to constraints

use crate::cnf::Cnf;
use crate::constraint::{constraints, ClauseConstraint};
use crate::error::CompileError;
use crate::expression::Expr;
use crate::{Notation, ReportConfig};
use std::fmt::Write;

/// Everything produced by compiling one expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub expression: Expr,
    pub cnf: Cnf,
    /// One constraint per CNF clause, in clause order
    pub constraints: Vec<ClauseConstraint>,
}

/// Parse `source`, convert it to CNF and encode every clause as a constraint
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), boolean_constraints::CompileError> {
/// let compilation = boolean_constraints::compile("a -> b")?;
/// assert_eq!(compilation.cnf.to_string(), "[[b, !a]]");
/// assert_eq!(compilation.constraints[0].to_string(), "b - a ≥ 0");
/// # Ok(())
/// # }
/// ```
pub fn compile(source: &str) -> Result<Compilation, CompileError> {
    let expression = Expr::parse(source)?;
    let cnf = expression.to_cnf();
    let constraints = constraints(&cnf);
    Ok(Compilation {
        expression,
        cnf,
        constraints,
    })
}

impl Compilation {
    /// Render the sections selected by `config`
    ///
    /// Each section is a header line followed by indented items, one per line.
    pub fn report(&self, config: &ReportConfig) -> String {
        let mut out = String::new();
        match config.notation {
            Notation::Text => {
                if config.show_input {
                    section(&mut out, "Input:", [format!("{:#}", self.expression)]);
                }
                if config.show_cnf {
                    section(&mut out, "CNF:", [format!("{:#}", self.cnf)]);
                }
                if config.show_constraints {
                    section(
                        &mut out,
                        "Constraints:",
                        self.constraints.iter().map(ToString::to_string),
                    );
                }
            }
            Notation::Latex => {
                if config.show_input {
                    section(&mut out, "Input:", [math(&self.expression.to_latex())]);
                }
                if config.show_cnf {
                    section(&mut out, "CNF:", [math(&self.cnf.to_latex())]);
                }
                if config.show_constraints {
                    section(
                        &mut out,
                        "Constraints:",
                        self.constraints.iter().map(|c| math(&c.to_latex())),
                    );
                }
            }
        }
        out
    }
}

fn math(latex: &str) -> String {
    format!("${}$", latex)
}

fn section(out: &mut String, header: &str, items: impl IntoIterator<Item = String>) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", header);
    for item in items {
        let _ = writeln!(out, "    {}", item);
    }
}
