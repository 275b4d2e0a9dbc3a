/*!
Benchmarks of satisfiability against the size of a theory.

For each size of theory, a number of theories are [generated](crate::generator) and solved, each in a fresh context.
The time of each solve covers reading the theory, propagation, and the decision, but not generation.

A benchmark reports, for each size, the proportion of satisfiable theories and the mean time of a solve.

```rust
# use horn_sat::config::{Config, bench::BenchConfig};
# use horn_sat::bench::bench;
let mut bench_config = BenchConfig::default();
bench_config.max_size.value = 60;
bench_config.iterations.value = 4;

let rows = bench(&Config::default(), &bench_config).unwrap();
assert_eq!(rows.iter().map(|row| row.clauses).collect::<Vec<_>>(), vec![20, 40, 60]);
assert!(rows.iter().all(|row| (0.0..=1.0).contains(&row.probability())));
```
*/

use std::time::{Duration, Instant};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::{bench::BenchConfig, Config},
    context::Context,
    generator,
    misc::log::targets::{self},
    reports::Report,
    types::err::ErrorKind,
};

/// The result of benchmarking a single size of theory.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchRow {
    /// The count of clauses generated for each theory.
    pub clauses: usize,

    /// The count of theories solved.
    pub iterations: usize,

    /// The count of theories found satisfiable.
    pub satisfiable: usize,

    /// The mean time of a solve.
    pub mean_time: Duration,
}

impl BenchRow {
    /// The proportion of theories found satisfiable.
    pub fn probability(&self) -> f64 {
        match self.iterations {
            0 => 0.0,
            n => self.satisfiable as f64 / n as f64,
        }
    }
}

impl std::fmt::Display for BenchRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>6} {:>8.4} {:>12.6}",
            self.clauses,
            self.probability(),
            self.mean_time.as_secs_f64() * 1000.0
        )
    }
}

/// Benchmarks theories with `size` clauses, calling `on_iteration` with the index of each iteration before it begins.
pub fn bench_size<R: Rng + ?Sized>(
    config: &Config,
    bench_config: &BenchConfig,
    size: usize,
    rng: &mut R,
    mut on_iteration: impl FnMut(usize),
) -> Result<BenchRow, ErrorKind> {
    let mut generator_config = bench_config.generator.clone();
    generator_config.clauses.value = size;

    let iterations = bench_config.iterations.value;
    let mut satisfiable = 0;
    let mut total_time = Duration::default();

    for iteration in 0..iterations {
        on_iteration(iteration);

        let theory = generator::generate(&generator_config, rng)?;

        let start = Instant::now();
        let mut the_context = Context::from_config(config.clone());
        the_context.read_horn(theory.as_bytes())?;
        if the_context.solve()? == Report::Satisfiable {
            satisfiable += 1;
        }
        total_time += start.elapsed();
    }

    let row = BenchRow {
        clauses: size,
        iterations,
        satisfiable,
        mean_time: match u32::try_from(iterations) {
            Ok(0) | Err(_) => Duration::default(),
            Ok(n) => total_time / n,
        },
    };

    log::info!(target: targets::BENCH, "{row}");

    Ok(row)
}

/// Benchmarks each size of theory given by `bench_config`, in increasing order.
pub fn bench(config: &Config, bench_config: &BenchConfig) -> Result<Vec<BenchRow>, ErrorKind> {
    let mut rng = StdRng::seed_from_u64(bench_config.seed.value);

    bench_config
        .sizes()
        .map(|size| bench_size(config, bench_config, size, &mut rng, |_| {}))
        .collect()
}
