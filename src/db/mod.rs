/*!
Databases for holding information relevant to a solve.

- [The atom database](crate::db::atom)
  + Names of atoms, in both directions.
- [The fact database](crate::db::fact)
  + Literals known to be true, in the order they became known.
- [The clause database](crate::db::clause)
  + Clauses which remain under consideration, accessed through [keys](ClauseKey).

Each database is owned by a [context](crate::context), and so nothing persists between solves.
*/

pub mod atom;
pub mod clause;
pub mod fact;

slotmap::new_key_type! {
    /// A key to access a clause stored in the clause database.
    ///
    /// Keys are never reused for a different clause within a database.
    pub struct ClauseKey;
}
