/// Tolerance of the approximate percent error used by the iterative root
/// finders.
pub const TOLERANCE: f64 = 1e-6;

/// Ceiling on the number of iterations of the iterative root finders.
pub const MAX_ITERS: usize = 50;

/// Pivots (and divisors in substitutions) with smaller magnitude are treated
/// as zero by the direct linear solvers.
pub const PIVOT_EPS: f64 = 1e-10;

/// Derivatives with smaller magnitude are treated as zero by Newton-Raphson.
pub const ZERO_THRESHOLD: f64 = 1e-12;

/// Approximate percent error between two consecutive estimates,
/// `|new - old| / |new| * 100`.
///
/// When the new estimate is exactly zero the relative error is not defined;
/// it is reported as zero if the estimate did not move and as positive
/// infinity otherwise, so the value is never `NaN`.
pub fn approx_error(old: f64, new: f64) -> f64 {
    let delta = (new - old).abs();

    if delta == 0.0 {
        0.0
    } else if new == 0.0 {
        f64::INFINITY
    } else {
        delta / new.abs() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn approx_error_basic() {
        assert_relative_eq!(approx_error(1.5, 2.0), 25.0);
        assert_relative_eq!(approx_error(-1.5, -2.0), 25.0);
    }

    #[test]
    fn approx_error_zero_estimate() {
        assert_eq!(approx_error(0.0, 0.0), 0.0);
        assert_eq!(approx_error(1.0, 0.0), f64::INFINITY);
    }
}
