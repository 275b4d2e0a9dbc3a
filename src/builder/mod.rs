/*!
Methods for adding facts and clauses to a context.

Input may be added directly, through [add_fact](Context::add_fact) and [add_clause](Context::add_clause), or [read](Context::read_horn) from text.

Facts are stored in the [fact database](crate::db::fact) and never become clauses.
Every other clause, including a clause without antecedents, is stored in the [clause database](crate::db::clause).
*/

pub mod horn;
pub use horn::{parse_line, HornLine, SEPARATOR};

use crate::{
    context::{Context, ContextState},
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{clause::HornClause, literal::Literal},
    types::err::{self, ErrorKind},
};

impl Context {
    /// Moves the context to [Parsed](ContextState::Parsed), if input is allowed.
    fn open_input(&mut self) -> Result<(), err::StateError> {
        match self.state {
            ContextState::Unparsed => {
                self.state = ContextState::Parsed;
                Ok(())
            }

            ContextState::Parsed => Ok(()),

            ContextState::Propagated | ContextState::Decided(_) => {
                log::error!(target: targets::PARSE, "Input after {}", self.state);
                Err(err::StateError::InputClosed)
            }

            ContextState::Invalid => {
                log::error!(target: targets::PARSE, "Input to an invalid context");
                Err(err::StateError::InvalidInput)
            }
        }
    }

    /// Adds the literal on the atom of `name` as a fact.
    ///
    /// ```rust
    /// # use horn_sat::context::Context;
    /// let mut the_context = Context::default();
    /// assert!(the_context.add_fact("p").is_ok());
    /// assert!(the_context.add_fact("p").is_ok());
    /// assert_eq!(the_context.fact_db.len(), 1);
    /// ```
    pub fn add_fact(&mut self, name: &str) -> Result<Literal, ErrorKind> {
        self.open_input()?;

        let literal = self.atom_db.literal_of_or_fresh(name)?;
        self.fact_db.insert(literal);
        Ok(literal)
    }

    /// Adds the clause from `antecedents` to `consequent`, or an integrity constraint on `antecedents` if there is no consequent.
    ///
    /// A clause without antecedents is stored as a clause, and becomes a fact on propagation.
    pub fn add_clause<S: AsRef<str>>(
        &mut self,
        antecedents: &[S],
        consequent: Option<&str>,
    ) -> Result<ClauseKey, ErrorKind> {
        self.open_input()?;

        let mut the_antecedents = Vec::with_capacity(antecedents.len());
        for name in antecedents {
            the_antecedents.push(self.atom_db.literal_of_or_fresh(name.as_ref())?);
        }

        let the_consequent = match consequent {
            Some(name) => Some(self.atom_db.literal_of_or_fresh(name)?),
            None => None,
        };

        Ok(self
            .clause_db
            .store(HornClause::new(the_antecedents, the_consequent)))
    }
}
