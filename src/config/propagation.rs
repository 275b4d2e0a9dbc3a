use std::str::FromStr;

/// How many passes of propagation to make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PropagationBound {
    /// Make exactly one pass.
    ///
    /// Facts derived during the pass are added, but are not themselves propagated.
    /// So, a chain of implications may be missed.
    Single = 0,

    /// Make passes until a pass changes nothing.
    Fixpoint,
}

impl std::fmt::Display for PropagationBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "Single"),
            Self::Fixpoint => write!(f, "Fixpoint"),
        }
    }
}

impl PropagationBound {
    /// The minimum PropagationBound type.
    pub const MIN: PropagationBound = PropagationBound::Single;

    /// The maximum PropagationBound type.
    pub const MAX: PropagationBound = PropagationBound::Fixpoint;
}

impl FromStr for PropagationBound {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single" => Ok(Self::Single),

            "Fixpoint" => Ok(Self::Fixpoint),

            _unkown_string => Err(()),
        }
    }
}
