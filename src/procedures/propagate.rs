/*!
Propagation of facts through the clause database.

A single pass of propagation:
1. Removes every clause whose consequent is a fact (*subsumption*).
2. Removes every fact from the antecedents of each remaining clause (*stripping*).
3. Removes every clause left with no antecedents and a consequent, noting the consequent as a fact (*promotion*).
4. Adds each noted consequent to the fact database.

Each clause is examined against the facts known at the start of the pass, and so the order in which clauses are examined does not matter.
Integrity constraints are never removed, even with no antecedents remaining, as such a constraint is violated by the facts.

A pass only removes clauses and adds facts.
So, repeated passes reach a fixpoint, at which point a pass makes no change.
Whether to stop after a single pass or at the fixpoint is [configured](crate::config::PropagationBound).

With a single pass, facts discovered during the pass are not propagated.
For example, given the fact `1` and clauses `1 ⇒ 2` and `2 ⇒ 3`, a single pass discovers `2` but not `3`.

# Example
```rust
# use horn_sat::db::{clause::ClauseDB, fact::FactDB};
# use horn_sat::procedures::propagate::propagation_pass;
# use horn_sat::structures::{clause::HornClause, literal::Literal};
let [p, q, r] = [Literal::new(0), Literal::new(1), Literal::new(2)];

let mut fact_db = FactDB::default();
fact_db.insert(p);

let mut clause_db = ClauseDB::default();
clause_db.store(HornClause::new(vec![p], Some(q)));
clause_db.store(HornClause::new(vec![q], Some(r)));

let pass = propagation_pass(&mut fact_db, &mut clause_db);
assert_eq!(pass.discovered, vec![q]);
assert!(!fact_db.contains(r));

let pass = propagation_pass(&mut fact_db, &mut clause_db);
assert_eq!(pass.discovered, vec![r]);
assert!(clause_db.is_empty());
```
*/

use crate::{
    config::PropagationBound,
    context::{Context, ContextState},
    db::{clause::ClauseDB, fact::FactDB},
    misc::log::targets::{self},
    reports::{PassReport, PropagationReport},
    types::err::{self},
};

/// Makes a single pass of propagation over `clause_db` with respect to `fact_db`.
pub fn propagation_pass(fact_db: &mut FactDB, clause_db: &mut ClauseDB) -> PassReport {
    let mut report = PassReport {
        subsumed: clause_db.retain(|key, clause| match clause.is_subsumed_by(fact_db) {
            true => {
                log::trace!(target: targets::SUBSUMPTION, "Subsumed {key:?}");
                false
            }
            false => true,
        }),
        ..Default::default()
    };

    let mut promoted_keys = Vec::default();
    let mut consequents = Vec::default();

    for (key, clause) in clause_db.iter_mut() {
        report.stripped += clause.strip(fact_db);

        if let Some(consequent) = clause.derived_fact() {
            promoted_keys.push(key);
            consequents.push(consequent);
        }
    }

    for key in promoted_keys {
        clause_db.remove(key);
        report.promoted += 1;
    }

    for consequent in consequents {
        if fact_db.insert(consequent) {
            report.discovered.push(consequent);
        }
    }

    log::debug!(target: targets::PROPAGATION, "Pass: {} subsumed, {} stripped, {} promoted, {} discovered",
        report.subsumed, report.stripped, report.promoted, report.discovered.len());

    report
}

/// Makes passes of propagation over `clause_db` with respect to `fact_db`, as permitted by `bound`.
pub fn propagate_to_bound(
    fact_db: &mut FactDB,
    clause_db: &mut ClauseDB,
    bound: PropagationBound,
) -> PropagationReport {
    let mut report = PropagationReport::default();

    loop {
        let pass = propagation_pass(fact_db, clause_db);
        let fixpoint = pass.is_fixpoint();
        report.absorb(pass);

        match bound {
            PropagationBound::Single => break,
            PropagationBound::Fixpoint if fixpoint => break,
            PropagationBound::Fixpoint => {}
        }
    }

    report
}

impl Context {
    /// Propagates the facts of the context through the clauses of the context.
    ///
    /// Propagation closes the context to further input.
    /// Propagation may be repeated, up until a decision has been made.
    /// A context holding malformed input is never propagated.
    pub fn propagate(&mut self) -> Result<PropagationReport, err::StateError> {
        match self.state {
            ContextState::Unparsed | ContextState::Parsed | ContextState::Propagated => {}

            ContextState::Decided(_) => {
                log::error!(target: targets::PROPAGATION, "Propagation after {}", self.state);
                return Err(err::StateError::PropagationClosed);
            }

            ContextState::Invalid => {
                log::error!(target: targets::PROPAGATION, "Propagation of malformed input");
                return Err(err::StateError::InvalidInput);
            }
        }

        let start = std::time::Instant::now();

        let report = propagate_to_bound(
            &mut self.fact_db,
            &mut self.clause_db,
            self.config.propagation.value,
        );

        self.counters.passes += report.passes;
        self.counters.subsumed += report.subsumed;
        self.counters.stripped += report.stripped;
        self.counters.promoted += report.promoted;
        self.counters.discovered += report.discovered.len();
        self.counters.time += start.elapsed();

        log::info!(target: targets::PROPAGATION, "Propagation: {} passes, {} facts, {} clauses remain",
            report.passes, self.fact_db.len(), self.clause_db.len());

        self.state = ContextState::Propagated;
        Ok(report)
    }
}
