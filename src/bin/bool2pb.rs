//! bool2pb - Command Line Interface
//!
//! Compiles boolean expressions into CNF and pseudo-boolean constraints.
//! Set `RUST_LOG` (for example `RUST_LOG=cnf=trace`) to see the compiler's trace.

use boolean_constraints::{compile, CompileError, Notation, ReportConfig};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "bool2pb")]
#[command(about = "Compile boolean expressions into pseudo-boolean constraints", long_about = None)]
#[command(version)]
struct Args {
    /// Expression to compile; several words are joined with spaces
    #[arg(value_name = "EXPR")]
    expression: Vec<String>,

    /// Read one expression per line from stdin after the arguments
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// Print LaTeX instead of unicode text
    #[arg(short = 'l', long = "latex")]
    latex: bool,

    /// Suppress printing of the CNF
    #[arg(long = "no-cnf")]
    no_cnf: bool,

    /// Suppress printing of the parsed input
    #[arg(long = "no-input")]
    no_input: bool,
}

impl From<&Args> for ReportConfig {
    fn from(args: &Args) -> Self {
        ReportConfig {
            notation: if args.latex {
                Notation::Latex
            } else {
                Notation::Text
            },
            show_input: !args.no_input,
            show_cnf: !args.no_cnf,
            show_constraints: true,
        }
    }
}

/// Compile one source and print the report, or the diagnostics on failure
fn run(source: &str, config: &ReportConfig) -> Result<(), CompileError> {
    match compile(source) {
        Ok(compilation) => {
            print!("{}", compilation.report(config));
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.render());
            Err(err)
        }
    }
}

fn interactive(config: &ReportConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Errors were already reported; keep prompting
        let _ = run(&line, config);
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = ReportConfig::from(&args);

    if args.expression.is_empty() && !args.interactive {
        eprintln!("No expression given. Pass one as arguments or use --interactive.");
        process::exit(2);
    }

    let mut failed = false;
    if !args.expression.is_empty() {
        let source = args.expression.join(" ");
        failed = run(&source, &config).is_err();
    }

    if args.interactive {
        if let Err(e) = interactive(&config) {
            eprintln!("Error reading input: {}", CompileError::from(e));
            process::exit(1);
        }
    } else if failed {
        process::exit(1);
    }
}
