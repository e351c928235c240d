//! Benchmark suite for the expression compiler
//!
//! Expressions are generated in families whose CNF grows at different rates,
//! and each family is measured at increasing sizes.

use boolean_constraints::constraint::constraints;
use boolean_constraints::{compile, Expr};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// A generated expression family
#[derive(Debug, Clone, Copy)]
enum Family {
    /// `a0 -> a1 -> ... -> an`: one clause per step
    ImplicationChain,
    /// `(a0 & b0) | (a1 & b1) | ...`: 2^n clauses
    Distribution,
    /// `a0 == a1 == ... == an`: 2^n clauses
    EquivalenceChain,
    /// Implications between quantified atoms and plain atoms
    Quantified,
}

impl Family {
    fn as_str(&self) -> &str {
        match self {
            Family::ImplicationChain => "implication_chain",
            Family::Distribution => "distribution",
            Family::EquivalenceChain => "equivalence_chain",
            Family::Quantified => "quantified",
        }
    }

    fn sizes(&self) -> &'static [usize] {
        match self {
            Family::ImplicationChain => &[8, 32, 128],
            Family::Distribution | Family::EquivalenceChain => &[4, 6, 8],
            Family::Quantified => &[4, 16, 64],
        }
    }

    fn source(&self, n: usize) -> String {
        let terms: Vec<String> = match self {
            Family::ImplicationChain => (0..=n).map(|i| format!("a{}", i)).collect(),
            Family::Distribution => (0..n).map(|i| format!("(a{} & !b{})", i, i)).collect(),
            Family::EquivalenceChain => (0..=n).map(|i| format!("a{}", i)).collect(),
            Family::Quantified => (0..n)
                .map(|i| format!("((one x{} in S{} | a{}) -> !all y{} in T{})", i, i, i, i, i))
                .collect(),
        };
        let separator = match self {
            Family::ImplicationChain => " -> ",
            Family::Distribution => " | ",
            Family::EquivalenceChain => " == ",
            Family::Quantified => " & ",
        };
        terms.join(separator)
    }
}

const FAMILIES: [Family; 4] = [
    Family::ImplicationChain,
    Family::Distribution,
    Family::EquivalenceChain,
    Family::Quantified,
];

/// Benchmark: parse source text
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for family in FAMILIES {
        for &n in family.sizes() {
            let source = family.source(n);
            group.throughput(Throughput::Bytes(source.len() as u64));
            group.bench_with_input(BenchmarkId::new(family.as_str(), n), &source, |b, data| {
                b.iter(|| {
                    let expr = Expr::parse(black_box(data)).unwrap();
                    black_box(expr);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark: CNF conversion of a parsed expression
fn bench_to_cnf(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_cnf");

    for family in FAMILIES {
        for &n in family.sizes() {
            let expr = Expr::parse(&family.source(n)).unwrap();
            group.throughput(Throughput::Elements(expr.size() as u64));
            group.bench_with_input(BenchmarkId::new(family.as_str(), n), &expr, |b, expr| {
                b.iter(|| {
                    let cnf = black_box(expr).to_cnf();
                    black_box(cnf.len());
                });
            });
        }
    }

    group.finish();
}

/// Benchmark: constraint building from a CNF
fn bench_constraints(c: &mut Criterion) {
    let mut group = c.benchmark_group("constraints");

    for family in FAMILIES {
        for &n in family.sizes() {
            let cnf = Expr::parse(&family.source(n)).unwrap().to_cnf();
            group.throughput(Throughput::Elements(cnf.len() as u64));
            group.bench_with_input(BenchmarkId::new(family.as_str(), n), &cnf, |b, cnf| {
                b.iter(|| {
                    let constraints = constraints(black_box(cnf));
                    black_box(constraints);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark: full pipeline from source text to rendered constraints
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for family in FAMILIES {
        let n = family.sizes()[1];
        let source = family.source(n);
        group.bench_with_input(BenchmarkId::new(family.as_str(), n), &source, |b, data| {
            b.iter(|| {
                let compilation = compile(black_box(data)).unwrap();
                let rendered: Vec<String> = compilation
                    .constraints
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                black_box(rendered);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_to_cnf,
    bench_constraints,
    bench_full_pipeline
);
criterion_main!(benches);
