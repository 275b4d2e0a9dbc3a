use std::path::PathBuf;

use clap::Parser;

use horn_sat::config::{bench::BenchConfig, Config, ParsePolicy, PropagationBound};

/// Determines whether a collection of positive Horn clauses is satisfiable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File with Horn clauses, one to a line
    #[arg(required_unless_present = "plot")]
    pub clauses: Option<PathBuf>,

    /// Solve generated theories of increasing size, reporting probability of satisfiability and time
    #[arg(short, long, default_value_t = false)]
    pub plot: bool,

    /// Make a single pass of propagation, rather than propagating to a fixpoint
    #[arg(long, default_value_t = false)]
    pub single_pass: bool,

    /// Report every malformed line, rather than the first
    #[arg(long, default_value_t = false)]
    pub all_errors: bool,

    /// Display the facts on completion
    #[arg(short, long, default_value_t = false)]
    pub facts: bool,

    /// Display a violated integrity constraint on UNSAT
    #[arg(short, long, default_value_t = false)]
    pub witness: bool,

    /// Theories solved for each size, when plotting
    #[arg(long, default_value_t = 25)]
    pub iterations: usize,

    /// Facts generated for each theory, when plotting
    #[arg(long, default_value_t = 5)]
    pub facts_to_gen: usize,

    /// Atoms generated for each clause, when plotting
    #[arg(long, default_value_t = 4)]
    pub atoms_per_clause: usize,

    /// Count of atoms to draw from, when plotting
    #[arg(long, default_value_t = 9)]
    pub alphabet: usize,

    /// Largest count of clauses, when plotting
    #[arg(long, default_value_t = 980)]
    pub max_size: usize,

    /// Difference in count of clauses between sizes, when plotting
    #[arg(long, default_value_t = 20)]
    pub step: usize,

    /// Seed for generating theories, when plotting
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// A requested value outside the bounds of some option.
pub struct ConfigError {
    pub name: &'static str,
    pub min: String,
    pub max: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} requires a value between {} and {}",
            self.name, self.min, self.max
        )
    }
}

/// Sets `option` to `value`, or notes the bounds of `option`.
macro_rules! set_option {
    ($option:expr, $value:expr) => {
        if $option.set($value).is_err() {
            let (min, max) = $option.min_max();
            return Err(ConfigError {
                name: $option.name,
                min: min.to_string(),
                max: max.to_string(),
            });
        }
    };
}

impl Args {
    /// The configuration of a context, as requested.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut the_config = Config::default();

        if self.single_pass {
            set_option!(the_config.propagation, PropagationBound::Single);
        }

        if self.all_errors {
            set_option!(the_config.parse_policy, ParsePolicy::CollectAll);
        }

        Ok(the_config)
    }

    /// The configuration of a benchmark, as requested.
    pub fn bench_config(&self) -> Result<BenchConfig, ConfigError> {
        let mut the_config = BenchConfig::default();

        set_option!(the_config.iterations, self.iterations);
        set_option!(the_config.max_size, self.max_size);
        set_option!(the_config.step, self.step);
        set_option!(the_config.seed, self.seed);

        set_option!(the_config.generator.facts, self.facts_to_gen);
        set_option!(the_config.generator.atoms_per_clause, self.atoms_per_clause);
        set_option!(the_config.generator.alphabet, self.alphabet);

        Ok(the_config)
    }
}
