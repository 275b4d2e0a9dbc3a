/*!
The decision on satisfiability, made after propagation.

A theory is unsatisfiable exactly when some integrity constraint has every antecedent a fact.
Otherwise, the facts form a model: every clause with a consequent either has its consequent a fact, or some antecedent which is not a fact.

Strictly, this holds only once propagation has reached a fixpoint.
After a single pass a clause may remain whose antecedents are all facts, in which case the decision is made against the facts as they are.

The decision is read-only, and so may be repeated.
*/

use crate::{
    context::{Context, ContextState},
    db::{clause::ClauseDB, fact::FactDB, ClauseKey},
    misc::log::targets::{self},
    reports::Report,
    types::err::{self},
};

/// The key to the first integrity constraint in `clause_db` whose antecedents are all in `fact_db`, if any.
pub fn violated_constraint(fact_db: &FactDB, clause_db: &ClauseDB) -> Option<ClauseKey> {
    clause_db
        .iter()
        .find(|(_, clause)| clause.is_constraint() && clause.antecedents_hold(fact_db))
        .map(|(key, _)| key)
}

/// True if no integrity constraint in `clause_db` has every antecedent in `fact_db`.
///
/// In particular, true of an empty clause database.
pub fn is_satisfiable(fact_db: &FactDB, clause_db: &ClauseDB) -> bool {
    violated_constraint(fact_db, clause_db).is_none()
}

impl Context {
    /// Decides the satisfiability of the theory of the context, following propagation.
    pub fn decide(&mut self) -> Result<Report, err::StateError> {
        match self.state {
            ContextState::Propagated | ContextState::Decided(_) => {}

            ContextState::Unparsed | ContextState::Parsed => {
                log::error!(target: targets::ORACLE, "Decision while {}", self.state);
                return Err(err::StateError::NotPropagated);
            }

            ContextState::Invalid => return Err(err::StateError::InvalidInput),
        }

        let start = std::time::Instant::now();

        self.witness = violated_constraint(&self.fact_db, &self.clause_db);

        let report = match self.witness {
            Some(key) => {
                log::info!(target: targets::ORACLE, "Violated constraint {key:?}");
                Report::Unsatisfiable
            }
            None => Report::Satisfiable,
        };

        self.counters.time += start.elapsed();
        self.state = ContextState::Decided(report);
        Ok(report)
    }
}
