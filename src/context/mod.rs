/*!
The context --- to which theories are added and within which solves take place.

A context owns every database used during a solve, and so independent solves share nothing.

A solve is a strictly linear sequence of stages, tracked by the [state](ContextState) of a context:

```text
Unparsed → Parsed → Propagated → Decided
```

Reading malformed input moves the context to [Invalid](ContextState::Invalid) from which there is no further stage.

- Facts and clauses may be added while [Unparsed](ContextState::Unparsed) or [Parsed](ContextState::Parsed).
- [Propagation](crate::procedures::propagate) may be made while [Parsed](ContextState::Parsed) or [Propagated](ContextState::Propagated).
- A [decision](crate::procedures::decide) may be made once [Propagated](ContextState::Propagated), and repeated once [Decided](ContextState::Decided).

# Example
```rust
# use horn_sat::context::{Context, ContextState};
# use horn_sat::config::Config;
# use horn_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_fact("p").is_ok());
assert!(the_context.add_clause(&["p", "q"], None).is_ok());
assert_eq!(the_context.state(), &ContextState::Parsed);

assert!(the_context.propagate().is_ok());
assert_eq!(the_context.clause_strings(), vec!["q,"]);

assert_eq!(the_context.decide(), Ok(Report::Satisfiable));
assert!(the_context.add_fact("q").is_err());
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, fact::FactDB, ClauseKey},
    reports::Report,
    structures::clause::HornClause,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Nothing has been added to the context.
    Unparsed,

    /// Input has been opened, and the context allows further input.
    Parsed,

    /// Propagation has been made, and the context no longer allows input.
    Propagated,

    /// A decision has been made.
    Decided(Report),

    /// Some input was malformed, and so the context may neither take input nor be solved.
    Invalid,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unparsed => write!(f, "Unparsed"),
            Self::Parsed => write!(f, "Parsed"),
            Self::Propagated => write!(f, "Propagated"),
            Self::Decided(report) => write!(f, "Decided ({report})"),
            Self::Invalid => write!(f, "Invalid"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Names of atoms.
    pub atom_db: AtomDB,

    /// Facts, whether read or derived.
    pub fact_db: FactDB,

    /// Clauses which remain under consideration.
    pub clause_db: ClauseDB,

    /// Counts of things which happen during a solve.
    pub counters: Counters,

    /// The state of the context.
    pub(crate) state: ContextState,

    /// The key to an integrity constraint violated by the facts, if one was found by a decision.
    pub(crate) witness: Option<ClauseKey>,
}

impl Context {
    /// A fresh context, with the given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            atom_db: AtomDB::default(),
            fact_db: FactDB::default(),
            clause_db: ClauseDB::default(),
            counters: Counters::default(),
            state: ContextState::Unparsed,
            witness: None,
        }
    }

    pub fn state(&self) -> &ContextState {
        &self.state
    }

    /// A report on the satisfiability of the theory of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// An integrity constraint violated by the facts, if the context has been decided unsatisfiable.
    pub fn witness(&self) -> Option<&HornClause> {
        self.witness.and_then(|key| self.clause_db.get(key))
    }

    /// True if `name` has been read, and the literal on the atom of `name` is a fact.
    pub fn is_fact(&self, name: &str) -> bool {
        match self.atom_db.literal_of(name) {
            Some(literal) => self.fact_db.contains(literal),
            None => false,
        }
    }

    /// The facts as a space separated string of names, in the order they became known.
    pub fn fact_string(&self) -> String {
        self.fact_db.as_string(&self.atom_db)
    }

    /// Each clause under consideration as it would be written in a file, in the order read.
    pub fn clause_strings(&self) -> Vec<String> {
        self.clause_db.as_strings(&self.atom_db)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
