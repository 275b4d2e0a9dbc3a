//! Configuration of the [generator](crate::generator) and [benchmarks](crate::bench).

use super::ConfigOption;

/// Configuration for generating a theory.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// The count of facts to generate, each on a distinct atom.
    pub facts: ConfigOption<usize>,

    /// The count of (non-fact) clauses to generate.
    pub clauses: ConfigOption<usize>,

    /// The count of atoms in each clause, including the consequent if present.
    pub atoms_per_clause: ConfigOption<usize>,

    /// The count of names atoms are drawn from, `1` to `alphabet`.
    pub alphabet: ConfigOption<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            facts: ConfigOption {
                name: "facts",
                min: 0,
                max: usize::MAX,
                value: 5,
            },

            clauses: ConfigOption {
                name: "clauses",
                min: 0,
                max: usize::MAX,
                value: 20,
            },

            atoms_per_clause: ConfigOption {
                name: "atoms_per_clause",
                min: 1,
                max: usize::MAX,
                value: 4,
            },

            alphabet: ConfigOption {
                name: "alphabet",
                min: 1,
                max: u32::MAX as usize,
                value: 9,
            },
        }
    }
}

/// Configuration for a benchmark.
///
/// A benchmark generates theories with `step`, `2 * step`, … clauses, up to and including `max_size`.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// The generator configuration, whose clause count is set for each size.
    pub generator: GeneratorConfig,

    /// The count of theories generated and solved for each size.
    pub iterations: ConfigOption<usize>,

    /// The largest count of clauses.
    pub max_size: ConfigOption<usize>,

    /// The difference in count of clauses between sizes.
    pub step: ConfigOption<usize>,

    /// The seed for the source of randomness.
    pub seed: ConfigOption<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            generator: GeneratorConfig::default(),

            iterations: ConfigOption {
                name: "iterations",
                min: 1,
                max: usize::MAX,
                value: 25,
            },

            max_size: ConfigOption {
                name: "max_size",
                min: 1,
                max: usize::MAX,
                value: 980,
            },

            step: ConfigOption {
                name: "step",
                min: 1,
                max: usize::MAX,
                value: 20,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}

impl BenchConfig {
    /// The sizes of theory to benchmark, in increasing order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        let step = self.step.value.max(1);
        (step..=self.max_size.value).step_by(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes() {
        let config = BenchConfig::default();
        let sizes = config.sizes().collect::<Vec<_>>();
        assert_eq!(sizes.len(), 49);
        assert_eq!(sizes.first(), Some(&20));
        assert_eq!(sizes.last(), Some(&980));
    }
}
