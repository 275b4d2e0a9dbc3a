//! A library for determining the satisfiability of theories written as positive Horn clauses.
//!
//! A theory is a conjunction of clauses of the form `a1 ∧ … ∧ an ⇒ c`, where each `ai` and `c` is a positive literal and `c` may be absent.
//! A clause without a consequent is an integrity constraint: not all of its antecedents may hold together.
//! A clause without antecedents is a fact.
//!
//! # Orientation
//!
//! The library is designed around a [context](crate::context::Context), built from a [configuration](crate::config::Config).
//!
//! A solve moves through three stages, each a [procedure](crate::procedures):
//! - Input is [read](crate::context::Context::read_horn) into a fact database and a clause database.
//! - Facts are [propagated](crate::procedures::propagate) through the clause database, removing satisfied clauses, stripping known antecedents, and promoting clauses to facts.
//! - The residual clause database is [decided](crate::procedures::decide).
//!
//! The stages are reflected in the [state](crate::context::ContextState) of a context and may not be revisited.
//!
//! Useful starting points, then, may be:
//! - The [structures] to see how literals and clauses are represented.
//! - The [databases](crate::db) which hold facts, clauses, and the names of atoms.
//! - The [configuration](crate::config) to see which behaviours can be varied.
//!
//! # Examples
//!
//! + Parse and solve a theory.
//!
//! ```rust
//! # use horn_sat::context::Context;
//! # use horn_sat::config::Config;
//! # use horn_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let theory = b"
//! , 1
//! 1, 2
//! 2 3, 4
//! 1 2,
//! ";
//!
//! assert!(the_context.read_horn(theory.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! + Build a theory directly.
//!
//! ```rust
//! # use horn_sat::context::Context;
//! # use horn_sat::config::Config;
//! # use horn_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_fact("rain").is_ok());
//! assert!(the_context.add_clause(&["rain"], Some("wet")).is_ok());
//! assert!(the_context.add_clause(&["wet", "cold"], None).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.fact_string(), "rain wet");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].

#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;

pub mod bench;
pub mod generator;
