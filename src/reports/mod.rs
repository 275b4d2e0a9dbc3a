/*!
Reports for the context.
*/

use crate::{context::ContextState, structures::literal::Literal};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The theory of the context is satisfiable.
    Satisfiable,

    /// The theory of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the theory of the context is unknown, as no decision has been made.
    Unknown,
}

impl Report {
    /// The report as a boolean, if known.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Satisfiable => Some(true),
            Self::Unsatisfiable => Some(false),
            Self::Unknown => None,
        }
    }
}

impl From<bool> for Report {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Satisfiable,
            false => Self::Unsatisfiable,
        }
    }
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Unparsed
            | ContextState::Parsed
            | ContextState::Propagated
            | ContextState::Invalid => Self::Unknown,
            ContextState::Decided(report) => *report,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Counts from reading some input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseInfo {
    /// The count of lines read.
    pub lines: usize,

    /// The count of fact lines read, including any repeated fact.
    pub facts: usize,

    /// The count of clauses stored, including integrity constraints.
    pub clauses: usize,

    /// The count of integrity constraints stored.
    pub constraints: usize,

    /// The count of blank lines skipped.
    pub blank: usize,

    /// The count of distinct atoms seen, across all input to the context.
    pub atoms: usize,
}

/// The changes made by a single pass of propagation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// The count of clauses removed as their consequent was a fact.
    pub subsumed: usize,

    /// The count of antecedent occurrences removed as they were facts.
    pub stripped: usize,

    /// The count of clauses removed as every antecedent was a fact.
    pub promoted: usize,

    /// Facts discovered during the pass, in the order discovered.
    pub discovered: Vec<Literal>,
}

impl PassReport {
    /// True if the pass made no change.
    pub fn is_fixpoint(&self) -> bool {
        self.subsumed == 0 && self.stripped == 0 && self.promoted == 0
    }
}

/// The changes made by propagation, across all passes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// The count of passes made, including any final pass which made no change.
    pub passes: usize,

    pub subsumed: usize,

    pub stripped: usize,

    pub promoted: usize,

    /// Facts discovered, in the order discovered.
    pub discovered: Vec<Literal>,
}

impl PropagationReport {
    /// Adds the changes of a pass to the report.
    pub fn absorb(&mut self, pass: PassReport) {
        self.passes += 1;
        self.subsumed += pass.subsumed;
        self.stripped += pass.stripped;
        self.promoted += pass.promoted;
        self.discovered.extend(pass.discovered);
    }
}
