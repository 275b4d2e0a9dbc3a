/*!
A solve, from whichever stage the context is at to a decision.

```rust
# use horn_sat::context::Context;
# use horn_sat::reports::Report;
let mut the_context = Context::default();
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

use crate::{
    context::{Context, ContextState},
    reports::Report,
    types::err::{self},
};

impl Context {
    /// Propagates, if propagation has not been made, and decides.
    ///
    /// Solving a decided context returns the existing decision.
    pub fn solve(&mut self) -> Result<Report, err::StateError> {
        match self.state {
            ContextState::Unparsed | ContextState::Parsed => {
                self.propagate()?;
                self.decide()
            }

            ContextState::Propagated => self.decide(),

            ContextState::Decided(report) => Ok(report),

            ContextState::Invalid => Err(err::StateError::InvalidInput),
        }
    }
}
