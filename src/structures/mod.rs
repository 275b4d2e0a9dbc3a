/*!
Abstract elements of a theory, and their representation.

- An [atom](atom) is an index to a named proposition.
- A [literal](literal) is an atom asserted positively. There are no negated literals.
- A [clause](clause) is an implication from a sequence of literals to at most one literal.
*/

pub mod atom;
pub mod clause;
pub mod literal;
