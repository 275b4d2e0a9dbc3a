/*!
Procedures which make up a solve.

- [propagate] simplifies the clause database with respect to the fact database, discovering further facts.
- [decide] inspects the result of propagation for a violated integrity constraint.
- [solve] applies whichever of the above remain, in order.

Each procedure is a method on a [context](crate::context::Context), while the work of each is available as a free function over the relevant databases.
*/

pub mod decide;
pub mod propagate;
pub mod solve;
