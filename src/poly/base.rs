use std::ops::Index;

use num::{Complex, One, Zero};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from complex coefficients, highest degree first.
    #[must_use]
    pub const fn new(coeffs: Vec<Complex<T>>) -> Self {
        Self(coeffs)
    }

    #[must_use]
    pub fn from_complex_slice(coeffs: &[Complex<T>]) -> Self {
        Self(coeffs.to_vec())
    }

    /// Create a polynomial from real coefficients, highest degree first.
    ///
    /// # Examples
    ///
    /// ```
    /// use aberth_roots::{complex, Poly};
    ///
    /// // x^2 + 1
    /// let p = Poly::from_real_slice(&[1.0, 0.0, 1.0]);
    /// assert_eq!(p.eval(complex!(2.0)), complex!(5.0));
    /// ```
    #[must_use]
    pub fn from_real_slice(coeffs: &[T]) -> Self {
        Self(
            coeffs
                .iter()
                .map(|&x| Complex::new(x, T::zero()))
                .collect(),
        )
    }

    #[must_use]
    pub fn from_real_vec(coeffs: Vec<T>) -> Self {
        Self::from_real_slice(&coeffs)
    }

    /// The monic polynomial with the given roots.
    ///
    /// # Examples
    ///
    /// ```
    /// use aberth_roots::{complex, poly, Poly};
    ///
    /// let p = Poly::from_roots(&[complex!(1.0), complex!(2.0)]);
    /// assert_eq!(p, poly![1.0, -3.0, 2.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[Complex<T>]) -> Self {
        let mut coeffs = vec![Complex::<T>::one()];
        for &r in roots {
            // multiply by the binomial (x - r)
            coeffs.push(Complex::zero());
            for i in (1..coeffs.len()).rev() {
                let lower = coeffs[i - 1];
                coeffs[i] = coeffs[i] - r * lower;
            }
        }
        Self(coeffs)
    }

    /// Number of coefficients, i.e. degree + 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Coefficients, highest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[Complex<T>] {
        &self.0
    }
}

impl<T: RealScalar> Index<usize> for Poly<T> {
    type Output = Complex<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
