//! Error types used in the library.
//!
//! - Parse errors are expected, and arise from malformed input.
//! - State errors arise from requesting a stage of a solve out of order.
//! - Most others are very unlikely to occur during use.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Generator(GeneratorError),
    Parse(ParseError),
    State(StateError),

    /// Every malformed line of some input, when all errors are collected.
    Malformed(Vec<ParseError>),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors when generating a theory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GeneratorError {
    /// A clause was requested without any atoms.
    NoAtoms,

    /// More distinct atoms were requested than the alphabet contains.
    AlphabetExhausted,
}

impl From<GeneratorError> for ErrorKind {
    fn from(e: GeneratorError) -> Self {
        ErrorKind::Generator(e)
    }
}

/// The ways in which a single line may be malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineError {
    /// The line does not contain a separator between antecedents and consequent.
    MissingSeparator,

    /// The line contains more than one separator.
    ExtraSeparator,

    /// More than one literal follows the separator.
    ExcessConsequent,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing ',' separator"),
            Self::ExtraSeparator => write!(f, "more than one ',' separator"),
            Self::ExcessConsequent => write!(f, "more than one consequent"),
        }
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A malformed line, with the (1-based) line number.
    Line(usize, LineError),

    /// Failure to read the line following the given line number.
    Read(usize),

    /// The file could not be opened.
    NoFile,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line, e) => write!(f, "line {line}: {e}"),
            Self::Read(line) => write!(f, "failed to read after line {line}"),
            Self::NoFile => write!(f, "no file"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Requests made of a context in the wrong state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// Input was added after propagation began.
    InputClosed,

    /// Propagation was requested after a decision.
    PropagationClosed,

    /// A decision was requested before propagation.
    NotPropagated,

    /// Some input to the context was malformed.
    InvalidInput,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
