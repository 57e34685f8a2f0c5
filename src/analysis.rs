//! Various analyses for supporting the solving.
//!
//! Bracketing methods require a sign change of the function over the bracket.
//! The root finders do not enforce it, the functions here can be used to check
//! or locate suitable brackets beforehand.

use log::debug;

use crate::core::{Bracket, Function};

/// Tests whether the function values at the ends of the bracket have
/// opposite signs (or one of them is zero).
///
/// Points where the function cannot be evaluated count as no sign change.
pub fn has_sign_change<F: Function>(f: &F, bracket: &Bracket) -> bool {
    match (f.eval(bracket.lower()), f.eval(bracket.upper())) {
        (Ok(fl), Ok(fu)) => fl * fu <= 0.0,
        _ => false,
    }
}

/// Splits the bracket into `steps` equal subintervals and returns those over
/// which the function changes sign, in increasing order.
///
/// Subintervals touching a point where the function cannot be evaluated are
/// skipped.
pub fn find_sign_changes<F: Function>(f: &F, bracket: &Bracket, steps: usize) -> Vec<Bracket> {
    let steps = steps.max(1);
    let ordered = bracket.ordered();
    let (lower, upper) = (ordered.lower(), ordered.upper());
    let width = (upper - lower) / steps as f64;

    let mut found = Vec::new();
    let mut a = lower;
    let mut fa = f.eval(lower).ok();
    // Whether a zero at `a` was already reported with the previous subinterval.
    let mut zero_reported = false;

    for i in 1..=steps {
        let b = if i == steps {
            upper
        } else {
            lower + width * i as f64
        };
        let fb = f.eval(b).ok();

        zero_reported = match (fa, fb) {
            (Some(fa), Some(fb)) => {
                let hit = fa * fb < 0.0 || fb == 0.0 || (fa == 0.0 && !zero_reported);
                if hit {
                    if let Ok(sub) = Bracket::new(a, b) {
                        found.push(sub);
                    }
                }
                hit && fb == 0.0
            }
            _ => {
                debug!("skipping subinterval [{}, {}]", a, b);
                false
            }
        };

        a = b;
        fa = fb;
    }

    found
}
