//! Escape-time iteration for the quadratic map `z -> z^2 + c`.

use num_complex::Complex64;

/// Radius beyond which every orbit of `z -> z^2 + param` diverges.
///
/// `R = 0.5 + 0.5 * sqrt(1 + 4|param|)`. Both the estimator and the grid
/// window are derived from this one function so they agree bit-for-bit.
#[inline]
pub fn escape_boundary(param: Complex64) -> f64 {
    0.5 + 0.5 * (1.0 + 4.0 * param.norm()).sqrt()
}

/**
Number of iterations before the orbit of `z0` leaves the escape boundary.

The orbit is advanced once before the first check: iteration `0` tests
`z0^2 + param`, not `z0`. A point whose first iterate is already outside
the boundary therefore returns `0`.

Returns `maxit` when the orbit stays inside for all `maxit` checks.
*/
#[inline]
pub fn estimate(z0: Complex64, param: Complex64, maxit: u32) -> u32 {
    let boundary = escape_boundary(param);
    let mut zn = z0 * z0 + param;

    for i in 0..maxit {
        if zn.norm() > boundary {
            return i;
        }
        zn = zn * zn + param;
    }

    maxit
}
