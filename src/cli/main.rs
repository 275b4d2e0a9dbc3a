#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::time::Instant;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use horn_sat::{bench::bench_size, config::Config, context::Context, reports::Report};

mod args;
mod read;
mod window;

use args::Args;
use window::BenchWindow;

fn main() {
    #[cfg(feature = "log")]
    if let Err(e) = init_logging() {
        println!("c Failed to start logging: {e}");
    }

    let args = Args::parse();

    let start = Instant::now();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    match args.plot {
        true => plot(&args, config),
        false => decide(&args, config),
    }

    println!(
        "c Time of the execution: {:.6} seconds",
        start.elapsed().as_secs_f64()
    );
}

/// Reads, solves, and reports on the clause file given.
fn decide(args: &Args, config: Config) {
    let Some(path) = &args.clauses else {
        println!("c Path to clauses required");
        std::process::exit(1);
    };

    let mut ctx = Context::from_config(config);

    if let Err(e) = read::read_clauses(path, &mut ctx) {
        println!("c {e}");
        std::process::exit(1);
    }

    let report = match ctx.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }
    };

    println!("c Propagation passes: {}", ctx.counters.passes);
    println!("c Facts discovered:   {}", ctx.counters.discovered);

    if args.facts {
        println!("c Facts: {}", ctx.fact_string());
    }

    if args.witness && report == Report::Unsatisfiable {
        if let Some(clause) = ctx.witness() {
            println!("c Violated: {}", clause.as_string(&ctx.atom_db));
        }
    }

    match report.as_bool() {
        Some(satisfiable) => println!("{satisfiable}"),
        None => println!("c {report}"),
    }
}

/// Benchmarks generated theories of increasing size.
fn plot(args: &Args, config: Config) {
    let bench_config = match args.bench_config() {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let window = BenchWindow::new(bench_config.iterations.value);
    let mut rng = StdRng::seed_from_u64(bench_config.seed.value);

    println!("c {:>4} {:>8} {:>12}", "size", "sat", "ms");

    for size in bench_config.sizes() {
        let row = bench_size(&config, &bench_config, size, &mut rng, |iteration| {
            let _ = window.update(size, iteration);
        });
        let _ = window.clear();

        match row {
            Ok(row) => println!("{row}"),
            Err(e) => {
                println!("c Benchmark error: {e:?}");
                std::process::exit(2);
            }
        }
    }
}

#[cfg(feature = "log")]
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Info))?;

    log4rs::init_config(config)?;
    Ok(())
}
