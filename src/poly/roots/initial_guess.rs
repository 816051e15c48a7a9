use num::Complex;

use crate::{Poly, RealScalar};

/// Radius of a disk centered at the origin that contains all the roots.
///
/// Ostrowski-style coefficient-ratio bound,
/// `1 + max|p[1..]| / |p[0]|`. A small guard constant keeps the division
/// finite when the leading coefficient is (near) zero.
#[must_use]
pub fn bounding_radius<T: RealScalar>(poly: &Poly<T>) -> T {
    debug_assert!(
        poly.len() >= 2,
        "there are no bounds for a polynomial with no roots"
    );
    let guard = T::from_f64(1e-10).expect("overflow");
    let leading = poly.0[0].norm();
    let max_rest = poly
        .0
        .iter()
        .skip(1)
        .map(|c| c.norm())
        .fold(T::zero(), T::max);
    T::one() + max_rest / (leading + guard)
}

/// Place one initial root estimate per root, uniformly in angle on the
/// circle of radius [`bounding_radius`].
///
/// Estimate `i` sits at angle `2*pi*i / (d + 1)` for a polynomial of
/// degree `d`, so the estimates are pairwise distinct and every true root
/// lies inside the starting circle. Needs `out.len()` equal to the degree.
pub fn initial_guesses_circle<T: RealScalar>(poly: &Poly<T>, out: &mut [Complex<T>]) {
    debug_assert_eq!(out.len(), poly.degree());
    let radius = bounding_radius(poly);
    let n = T::from_usize(poly.len()).expect("overflow");
    for (i, y) in out.iter_mut().enumerate() {
        let theta = T::TAU() * T::from_usize(i).expect("overflow") / n;
        *y = Complex::from_polar(radius, theta);
    }
}

/// Place initial root estimates at seeded random points inside the
/// bounding disk.
///
/// Useful for restarting a solve that failed with coincident estimates:
/// a different seed gives a perturbed starting configuration.
pub fn initial_guesses_random<T: RealScalar>(poly: &Poly<T>, seed: u64, out: &mut [Complex<T>]) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let bound = bounding_radius(poly).to_f64().expect("overflow");
    for y in out {
        let radius = T::from_f64(rng.f64() * bound).expect("overflow");
        let angle = T::from_f64(rng.f64() * std::f64::consts::TAU).expect("overflow");
        *y = Complex::from_polar(radius, angle);
    }
}
