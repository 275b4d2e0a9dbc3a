use std::str::FromStr;

/// What to do on reading a malformed line.
///
/// In either case, a malformed line invalidates the whole input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParsePolicy {
    /// Stop reading at the first malformed line.
    FailFast = 0,

    /// Read every line, and note each malformed line.
    CollectAll,
}

impl std::fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailFast => write!(f, "FailFast"),
            Self::CollectAll => write!(f, "CollectAll"),
        }
    }
}

impl ParsePolicy {
    /// The minimum ParsePolicy type.
    pub const MIN: ParsePolicy = ParsePolicy::FailFast;

    /// The maximum ParsePolicy type.
    pub const MAX: ParsePolicy = ParsePolicy::CollectAll;
}

impl FromStr for ParsePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FailFast" => Ok(Self::FailFast),

            "CollectAll" => Ok(Self::CollectAll),

            _unkown_string => Err(()),
        }
    }
}
