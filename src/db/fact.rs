/*!
A database of facts.

Facts are literals known to be true.
The database is a set which remembers the order in which facts became known.
Facts are only ever added, never removed.
*/

use crate::{
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::literal::Literal,
};

/// The fact database.
#[derive(Default)]
pub struct FactDB {
    /// Whether the literal on an atom is a fact, indexed by atom.
    known: Vec<bool>,

    /// Facts, in the order they became known.
    facts: Vec<Literal>,
}

impl FactDB {
    /// Adds `literal` as a fact, returning true if it was not already a fact.
    pub fn insert(&mut self, literal: Literal) -> bool {
        let index = literal.atom() as usize;
        if index >= self.known.len() {
            self.known.resize(index + 1, false);
        }

        match self.known[index] {
            true => false,
            false => {
                log::trace!(target: targets::FACT_DB, "Fact: {literal}");
                self.known[index] = true;
                self.facts.push(literal);
                true
            }
        }
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.known
            .get(literal.atom() as usize)
            .copied()
            .unwrap_or(false)
    }

    /// An iterator over facts, in the order they became known.
    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.facts.iter()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// The facts as a space separated string of names, in the order they became known.
    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        self.facts
            .iter()
            .map(|f| atom_db.name_of(*f).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_with_order() {
        let mut facts = FactDB::default();
        assert!(facts.insert(Literal::new(7)));
        assert!(facts.insert(Literal::new(2)));
        assert!(!facts.insert(Literal::new(7)));

        assert_eq!(facts.len(), 2);
        assert!(facts.contains(Literal::new(2)));
        assert!(!facts.contains(Literal::new(3)));
        assert!(!facts.contains(Literal::new(700)));

        let order = facts.iter().copied().collect::<Vec<_>>();
        assert_eq!(order, vec![Literal::new(7), Literal::new(2)]);
    }
}
