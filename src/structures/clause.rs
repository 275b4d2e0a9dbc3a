/*!
Horn clauses.

A Horn clause is an implication from a sequence of antecedent [literals](Literal) to at most one consequent literal.

- A clause without a consequent is an *integrity constraint*, violated if every antecedent holds.
- A clause without antecedents and with a consequent asserts its consequent, and so is a *derived fact*.
- A clause whose consequent is a fact is *subsumed*, as it holds regardless of the antecedents.

Antecedents are not deduplicated.
Stripping a fact from the antecedents removes every occurrence, and so duplicates are harmless.
*/

use crate::{
    db::{atom::AtomDB, fact::FactDB},
    structures::literal::Literal,
};

/// A Horn clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HornClause {
    antecedents: Vec<Literal>,
    consequent: Option<Literal>,
}

impl HornClause {
    pub fn new(antecedents: Vec<Literal>, consequent: Option<Literal>) -> Self {
        HornClause {
            antecedents,
            consequent,
        }
    }

    /// The antecedents of the clause, in the order read.
    pub fn antecedents(&self) -> &[Literal] {
        &self.antecedents
    }

    pub fn consequent(&self) -> Option<Literal> {
        self.consequent
    }

    /// True if the clause has no consequent.
    pub fn is_constraint(&self) -> bool {
        self.consequent.is_none()
    }

    /// The consequent of the clause, if the clause has no remaining antecedents.
    pub fn derived_fact(&self) -> Option<Literal> {
        match self.antecedents.is_empty() {
            true => self.consequent,
            false => None,
        }
    }

    /// True if the consequent of the clause is a fact.
    pub fn is_subsumed_by(&self, facts: &FactDB) -> bool {
        self.consequent.is_some_and(|c| facts.contains(c))
    }

    /// True if every antecedent of the clause is a fact.
    ///
    /// Vacuously true of a clause without antecedents.
    pub fn antecedents_hold(&self, facts: &FactDB) -> bool {
        self.antecedents.iter().all(|a| facts.contains(*a))
    }

    /// Removes every antecedent which is a fact, returning the count of removed literals.
    pub fn strip(&mut self, facts: &FactDB) -> usize {
        let before = self.antecedents.len();
        self.antecedents.retain(|a| !facts.contains(*a));
        before - self.antecedents.len()
    }

    /// The clause as it would be written in a file, using the names of `atom_db`.
    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        let mut the_string = self
            .antecedents
            .iter()
            .map(|a| atom_db.name_of(*a).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(" ");

        the_string.push(',');
        if let Some(consequent) = self.consequent {
            the_string.push(' ');
            the_string.push_str(atom_db.name_of(consequent).unwrap_or("?"));
        }
        the_string
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lits(atoms: &[u32]) -> Vec<Literal> {
        atoms.iter().map(|a| Literal::new(*a)).collect()
    }

    #[test]
    fn strip_removes_duplicates() {
        let mut facts = FactDB::default();
        facts.insert(Literal::new(1));

        let mut clause = HornClause::new(lits(&[1, 2, 1]), Some(Literal::new(3)));
        assert_eq!(clause.strip(&facts), 2);
        assert_eq!(clause.antecedents(), lits(&[2]).as_slice());
        assert_eq!(clause.strip(&facts), 0);
    }

    #[test]
    fn derived_fact() {
        let clause = HornClause::new(vec![], Some(Literal::new(4)));
        assert_eq!(clause.derived_fact(), Some(Literal::new(4)));

        let constraint = HornClause::new(vec![], None);
        assert!(constraint.is_constraint());
        assert_eq!(constraint.derived_fact(), None);

        let clause = HornClause::new(lits(&[1]), Some(Literal::new(4)));
        assert_eq!(clause.derived_fact(), None);
    }

    #[test]
    fn antecedents_hold_vacuously() {
        let facts = FactDB::default();
        assert!(HornClause::new(vec![], None).antecedents_hold(&facts));
        assert!(!HornClause::new(lits(&[0]), None).antecedents_hold(&facts));
    }
}
