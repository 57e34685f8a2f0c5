//! Core abstractions and types for numeth.
//!
//! *Users* are mainly interested in the [`Function`] trait (implemented by
//! [`Expression`](crate::expr::Expression)) and the [`Bracket`] type.
//!
//! Algorithm *developers* are interested in implementing the [`RootFinder`]
//! trait, producing one [`Iterate`] per step, and in the stopping-rule helpers
//! such as [`approx_error`].

mod base;
mod domain;
mod function;
mod solver;
mod trace;

pub use base::*;
pub use domain::*;
pub use function::*;
pub use solver::*;
pub use trace::*;
