/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when tracing a solve.

Note, no log implementation is provided by the library.
The CLI installs one when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading](crate::builder) input.
    pub const PARSE: &str = "parse";

    /// Logs related to [propagation](crate::procedures::propagate).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the removal of satisfied clauses.
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to the [decision](crate::procedures::decide) on satisfiability.
    pub const ORACLE: &str = "oracle";

    /// Logs related to the [clause database](crate::db::clause).
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [fact database](crate::db::fact).
    pub const FACT_DB: &str = "fact_db";

    /// Logs related to [generating](crate::generator) theories.
    pub const GENERATOR: &str = "generator";

    /// Logs related to [benchmarks](crate::bench).
    pub const BENCH: &str = "bench";
}
