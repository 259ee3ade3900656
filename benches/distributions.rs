// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Rustfmt splits macro invocations to shorten lines; in this case longer-lines are more readable
#![cfg_attr(rustfmt, rustfmt::skip)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand_pcg::Pcg64Mcg;

use randist::continuous::*;
use randist::discrete::*;
use randist::generator::{Seeded, XorShift128};
use randist::prelude::*;

const ITER_ELTS: u64 = 100;

type Pcg = Seeded<Pcg64Mcg>;

macro_rules! distr_float {
    ($group:ident, $fnn:expr, $distr:expr) => {
        $group.bench_function($fnn, |c| {
            let mut distr = $distr;
            c.iter(|| distr.next_double());
        });
    };
}

macro_rules! distr_int {
    ($group:ident, $fnn:expr, $distr:expr) => {
        $group.bench_function($fnn, |c| {
            let mut distr = $distr;
            c.iter(|| distr.next());
        });
    };
}

fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("generator");
    g.bench_function("xorshift128_next_double", |c| {
        let mut gen = XorShift128::with_seed(1);
        c.iter(|| gen.next_double());
    });
    g.bench_function("pcg64mcg_next_double", |c| {
        let mut gen = Pcg::with_seed(1);
        c.iter(|| gen.next_double());
    });
    g.bench_function("xorshift128_next_i32_range", |c| {
        let mut gen = XorShift128::with_seed(1);
        c.iter(|| gen.next_i32_range(-1000, 1000));
    });
    g.finish();

    let mut g = c.benchmark_group("normal");
    distr_float!(g, "normal", Normal::new(Pcg::with_seed(1), -1.23, 4.56).unwrap());
    distr_float!(g, "lognormal", Lognormal::new(Pcg::with_seed(1), -1.23, 4.56).unwrap());
    distr_float!(g, "students_t", StudentsT::new(Pcg::with_seed(1), 11).unwrap());
    g.throughput(Throughput::Elements(ITER_ELTS));
    g.bench_function("iter", |c| {
        let mut distr = Normal::new(Pcg::with_seed(1), 0.0, 1.0).unwrap();
        c.iter(|| distr.doubles().take(ITER_ELTS as usize).fold(0.0, |a, r| a + r));
    });
    g.finish();

    let mut g = c.benchmark_group("gamma");
    distr_float!(g, "exponential", Exponential::new(Pcg::with_seed(1), 1.23 * 4.56).unwrap());
    distr_float!(g, "gamma_small_shape", Gamma::new(Pcg::with_seed(1), 0.1, 1.0).unwrap());
    distr_float!(g, "gamma_large_shape", Gamma::new(Pcg::with_seed(1), 10.0, 1.0).unwrap());
    distr_float!(g, "erlang", Erlang::new(Pcg::with_seed(1), 10, 1.0).unwrap());
    distr_float!(g, "beta_small_param", Beta::new(Pcg::with_seed(1), 0.1, 0.1).unwrap());
    distr_float!(g, "beta_large_param", Beta::new(Pcg::with_seed(1), 10.0, 10.0).unwrap());
    distr_float!(g, "chi_square", ChiSquare::new(Pcg::with_seed(1), 10).unwrap());
    g.finish();

    let mut g = c.benchmark_group("misc");
    distr_float!(g, "cauchy", Cauchy::new(Pcg::with_seed(1), 4.2, 6.9).unwrap());
    distr_float!(g, "triangular", Triangular::new(Pcg::with_seed(1), 0.0, 1.0, 0.9).unwrap());
    distr_float!(g, "weibull", Weibull::new(Pcg::with_seed(1), 0.5, 1.0).unwrap());
    distr_float!(g, "fisher_tippett", FisherTippett::new(Pcg::with_seed(1), 1.0, 0.0).unwrap());
    g.finish();

    let mut g = c.benchmark_group("discrete");
    distr_int!(g, "bernoulli", Bernoulli::new(Pcg::with_seed(1), 0.18).unwrap());
    distr_int!(g, "binomial_small", Binomial::new(Pcg::with_seed(1), 0.5, 10).unwrap());
    distr_int!(g, "geometric", Geometric::new(Pcg::with_seed(1), 0.01).unwrap());
    distr_int!(g, "poisson_small", Poisson::new(Pcg::with_seed(1), 1.0).unwrap());
    distr_int!(g, "poisson_large", Poisson::new(Pcg::with_seed(1), 100.0).unwrap());
    distr_int!(g, "discrete_uniform", DiscreteUniform::new(Pcg::with_seed(1), -6, 6).unwrap());
    distr_int!(g, "categorical", Categorical::new(Pcg::with_seed(1), (1..=100i32).map(f64::from).collect()).unwrap());
    g.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench
);
criterion_main!(benches);
