//! The collection of implemented root finding methods.
//!
//! * Bracketing: [bisection] and [false position](false_position). Robust,
//!   require an interval with a sign change.
//! * Open: [Newton-Raphson](newton_raphson) and [secant]. Fast near the root,
//!   may diverge from poor initial guesses.
//! * [Graphical](graphical) scan of an interval, useful for finding initial
//!   guesses.

pub mod bisection;
pub mod false_position;
pub mod graphical;
pub mod newton_raphson;
pub mod secant;

pub use bisection::Bisection;
pub use false_position::FalsePosition;
pub use graphical::Graphical;
pub use newton_raphson::NewtonRaphson;
pub use secant::Secant;
