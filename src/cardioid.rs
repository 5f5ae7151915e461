use std::f64::consts::PI;

use num_complex::Complex64;

/// Parameter on the boundary of the Mandelbrot set's main cardioid.
///
/// `alfa` is a fraction of a full turn: `c = e^{2πiα}/2 - e^{4πiα}/4`.
/// Rational `alfa` gives parabolic parameters, irrational ones Siegel discs.
pub fn main_cardioid(alfa: f64) -> Complex64 {
    let z1 = Complex64::from_polar(0.5, 2.0 * PI * alfa);
    let z2 = Complex64::from_polar(0.25, 4.0 * PI * alfa);
    z1 - z2
}
