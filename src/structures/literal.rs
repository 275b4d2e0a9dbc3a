//! Literals.
//!
//! As every literal of a Horn theory in this encoding is positive, a literal is a thin wrapper around an [Atom].
//! The wrapper exists to keep the role of an atom in a clause distinct from its role as an index.

use crate::structures::atom::Atom;

/// A positive literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    atom: Atom,
}

impl Literal {
    pub fn new(atom: Atom) -> Self {
        Literal { atom }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }
}

impl From<Atom> for Literal {
    fn from(atom: Atom) -> Self {
        Literal::new(atom)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.atom)
    }
}
