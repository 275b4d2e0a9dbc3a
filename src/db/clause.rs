/*!
A database of clauses.

Clauses are stored in a [SlotMap] and accessed through [ClauseKey]s.
As clauses are only stored while reading input and only removed afterwards, iteration follows the order in which clauses were read.

Facts read from input are never stored here, see the [fact database](crate::db::fact).
*/

use slotmap::SlotMap;

use crate::{
    db::{atom::AtomDB, ClauseKey},
    misc::log::targets::{self},
    structures::clause::HornClause,
};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    clauses: SlotMap<ClauseKey, HornClause>,
}

impl ClauseDB {
    /// Stores a clause, returning the key to the clause.
    pub fn store(&mut self, clause: HornClause) -> ClauseKey {
        let key = self.clauses.insert(clause);
        log::trace!(target: targets::CLAUSE_DB, "Stored {key:?}");
        key
    }

    pub fn get(&self, key: ClauseKey) -> Option<&HornClause> {
        self.clauses.get(key)
    }

    /// Removes the clause at `key`, if present.
    pub fn remove(&mut self, key: ClauseKey) -> Option<HornClause> {
        log::trace!(target: targets::CLAUSE_DB, "Removed {key:?}");
        self.clauses.remove(key)
    }

    /// Keeps only those clauses for which `keep` is true, returning a count of removed clauses.
    pub fn retain(&mut self, mut keep: impl FnMut(ClauseKey, &HornClause) -> bool) -> usize {
        let before = self.clauses.len();
        self.clauses.retain(|key, clause| keep(key, clause));
        before - self.clauses.len()
    }

    /// An iterator over all clauses and their keys.
    pub fn iter(&self) -> impl Iterator<Item = (ClauseKey, &HornClause)> {
        self.clauses.iter()
    }

    /// A mutable iterator over all clauses and their keys.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ClauseKey, &mut HornClause)> {
        self.clauses.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// A count of integrity constraints.
    pub fn constraint_count(&self) -> usize {
        self.clauses.values().filter(|c| c.is_constraint()).count()
    }

    /// Each clause as it would be written in a file, in the order read.
    pub fn as_strings(&self, atom_db: &AtomDB) -> Vec<String> {
        self.clauses
            .values()
            .map(|c| c.as_string(atom_db))
            .collect()
    }
}
