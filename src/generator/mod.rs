/*!
Random generation of theories, written as they would be read by [read_horn](crate::context::Context::read_horn).

Atoms are named `1` to `alphabet`.
A generated theory is a sequence of clauses followed by a sequence of facts, where:
- Each fact is on a distinct atom.
- With one atom per clause, each clause is an integrity constraint on a distinct atom.
- Otherwise, each clause has `atoms_per_clause - 1` distinct antecedents and a consequent drawn uniformly from the remaining atoms, or no consequent with the same chance as any one atom.

# Example
```rust
# use horn_sat::config::bench::GeneratorConfig;
# use horn_sat::generator::generate;
# use rand::SeedableRng;
let mut rng = rand::rngs::StdRng::seed_from_u64(0);
let config = GeneratorConfig::default();

let theory = generate(&config, &mut rng).unwrap();
assert_eq!(theory.lines().count(), config.clauses.value + config.facts.value);
```
*/

use rand::{seq::index, Rng};

use crate::{
    builder::SEPARATOR,
    config::bench::GeneratorConfig,
    misc::log::targets::{self},
    types::err::{self},
};

/// `amount` distinct names, drawn from `1` to `alphabet`.
fn distinct_names<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: usize,
    amount: usize,
) -> Result<Vec<usize>, err::GeneratorError> {
    if amount > alphabet {
        log::error!(target: targets::GENERATOR, "{amount} distinct atoms from {alphabet}");
        return Err(err::GeneratorError::AlphabetExhausted);
    }

    Ok(index::sample(rng, alphabet, amount)
        .into_iter()
        .map(|i| i + 1)
        .collect())
}

/// A clause with the given antecedents, and a consequent drawn from the remaining atoms or absent.
fn clause_line<R: Rng + ?Sized>(rng: &mut R, alphabet: usize, antecedents: &[usize]) -> String {
    let remaining = (1..=alphabet)
        .filter(|name| !antecedents.contains(name))
        .collect::<Vec<_>>();

    // One choice more than the remaining atoms, for the absent consequent.
    let choice = rng.gen_range(0..=remaining.len());

    let mut line = antecedents
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    line.push(SEPARATOR);

    if let Some(consequent) = remaining.get(choice) {
        line.push(' ');
        line.push_str(&consequent.to_string());
    }
    line
}

/// Generates the lines of a theory.
pub fn generate_lines<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<String>, err::GeneratorError> {
    let alphabet = config.alphabet.value;
    let clause_count = config.clauses.value;
    let fact_count = config.facts.value;

    let mut lines = Vec::with_capacity(clause_count + fact_count);

    match config.atoms_per_clause.value {
        0 => return Err(err::GeneratorError::NoAtoms),

        1 => {
            for name in distinct_names(rng, alphabet, clause_count)? {
                lines.push(format!("{name}{SEPARATOR}"));
            }
        }

        atoms => {
            for _ in 0..clause_count {
                let antecedents = distinct_names(rng, alphabet, atoms - 1)?;
                lines.push(clause_line(rng, alphabet, &antecedents));
            }
        }
    }

    for name in distinct_names(rng, alphabet, fact_count)? {
        lines.push(format!("{SEPARATOR} {name}"));
    }

    log::debug!(target: targets::GENERATOR, "Generated {clause_count} clauses and {fact_count} facts");

    Ok(lines)
}

/// Generates a theory, one clause to a line.
pub fn generate<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<String, err::GeneratorError> {
    let mut theory = String::default();
    for line in generate_lines(config, rng)? {
        theory.push_str(&line);
        theory.push('\n');
    }
    Ok(theory)
}
