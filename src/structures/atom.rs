//! Atoms, the propositions of a theory.
//!
//! An atom is an index, issued by the [atom database](crate::db::atom) when a name is first read.
//! As names are interned, two literals read from the same name always share an atom, and distinct names never do.

/// An atom, aka. a proposition.
pub type Atom = u32;

/// The maximum number of atoms.
pub const ATOM_MAX: Atom = Atom::MAX;
