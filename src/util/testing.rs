//! Testing utilities

use num::complex::Complex64;
use num::Complex;

use crate::Poly64;

/// Endless seeded stream of uniform `f64` in `[0, 1)`.
pub struct RandStreamF64 {
    state: fastrand::Rng,
}

impl RandStreamF64 {
    pub fn new(seed: u64) -> Self {
        Self {
            state: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64())
    }
}

/// Endless seeded stream of complex numbers in a rectangle.
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = self.real_stream.next()? * (self.max_re - self.min_re) + self.min_re;
        let im = self.real_stream.next()? * (self.max_im - self.min_im) + self.min_im;
        Some(Complex::new(re, im))
    }
}

/// Generate one test case with known roots: `degree` random roots with a
/// minimum pairwise separation (so the case stays well-conditioned), and
/// the polynomial built from them.
pub fn test_case_roots(seed: u64, degree: usize, min_separation: f64) -> (Poly64, Vec<Complex64>) {
    let mut stream = RandStreamC64Cartesian::new(seed, -2.0, 2.0, -2.0, 2.0);
    let mut roots: Vec<Complex64> = Vec::with_capacity(degree);
    while roots.len() < degree {
        let z = stream.next().expect("stream is endless");
        if roots.iter().all(|r| (z - r).norm() >= min_separation) {
            roots.push(z);
        }
    }
    (Poly64::from_roots(&roots), roots)
}

/// Check that all roots have been found, by greedily matching each found
/// root to the nearest expected one.
#[must_use]
pub fn check_roots(found: Vec<Complex64>, mut expected: Vec<Complex64>, tol: f64) -> bool {
    if found.len() != expected.len() {
        return false;
    }

    for f in found {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, e) in expected.iter().enumerate() {
            let d = (f - e).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        expected.remove(best_idx);
    }
    true
}
