/*!
A database of names for atoms.

Names are interned on first sight, and the atom issued is the count of atoms seen before.
So, atoms are dense and may be used to index other structures, such as the [fact database](crate::db::fact).
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::Literal,
    },
    types::err::{self},
};

/// The atom database.
#[derive(Default)]
pub struct AtomDB {
    /// A map from external names to atoms.
    atom_map: HashMap<String, Atom>,

    /// The name of each atom, indexed by atom.
    names: Vec<String>,
}

impl AtomDB {
    /// The atom of `name`, issuing a fresh atom if `name` has not been seen.
    pub fn atom_of_or_fresh(&mut self, name: &str) -> Result<Atom, err::AtomDBError> {
        if let Some(atom) = self.atom_map.get(name) {
            return Ok(*atom);
        }

        let atom = match Atom::try_from(self.names.len()) {
            Ok(atom) if atom < ATOM_MAX => atom,
            _ => {
                log::error!(target: targets::PARSE, "Atoms exhausted at {name}");
                return Err(err::AtomDBError::AtomsExhausted);
            }
        };

        log::trace!(target: targets::PARSE, "Fresh atom {atom} for {name}");
        self.atom_map.insert(name.to_owned(), atom);
        self.names.push(name.to_owned());
        Ok(atom)
    }

    /// A (positive) literal on the atom of `name`, issuing a fresh atom if required.
    pub fn literal_of_or_fresh(&mut self, name: &str) -> Result<Literal, err::AtomDBError> {
        self.atom_of_or_fresh(name).map(Literal::new)
    }

    /// The atom of `name`, if `name` has been seen.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.atom_map.get(name).copied()
    }

    /// A (positive) literal on the atom of `name`, if `name` has been seen.
    pub fn literal_of(&self, name: &str) -> Option<Literal> {
        self.atom_of(name).map(Literal::new)
    }

    /// The name read for the atom of `literal`.
    pub fn name_of(&self, literal: Literal) -> Option<&str> {
        self.names.get(literal.atom() as usize).map(|n| n.as_str())
    }

    /// A count of atoms.
    pub fn count(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning() {
        let mut atom_db = AtomDB::default();
        let one = atom_db.atom_of_or_fresh("1").unwrap();
        let twelve = atom_db.atom_of_or_fresh("12").unwrap();

        assert_ne!(one, twelve);
        assert_eq!(atom_db.atom_of_or_fresh("1"), Ok(one));
        assert_eq!(atom_db.count(), 2);
        assert_eq!(atom_db.name_of(Literal::new(twelve)), Some("12"));
        assert_eq!(atom_db.atom_of("2"), None);
    }
}
