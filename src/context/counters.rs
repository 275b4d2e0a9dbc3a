use std::time::Duration;

/// Counts for various things which count, across every propagation and decision of a context.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// The count of propagation passes made.
    pub passes: usize,

    /// The count of clauses removed as their consequent was a fact.
    pub subsumed: usize,

    /// The count of antecedent occurrences removed as they were facts.
    pub stripped: usize,

    /// The count of clauses promoted to facts.
    ///
    /// Distinct clauses may promote the same fact, see [discovered](Counters::discovered).
    pub promoted: usize,

    /// The count of facts discovered by propagation, each counted once.
    pub discovered: usize,

    /// The time taken by propagation and decisions.
    pub time: Duration,
}
