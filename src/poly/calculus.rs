use crate::{poly::roots::Error, Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// First derivative.
    ///
    /// With `n` coefficients in descending order, coefficient `i` of the
    /// derivative is `p[i] * (n - 1 - i)`; the always-zero constant term
    /// is dropped, so the result has `n - 1` coefficients.
    ///
    /// # Errors
    /// [`Error::InvalidPolynomial`] for a constant polynomial, whose
    /// derivative has no coefficients under this scheme.
    pub fn diff(&self) -> Result<Self, Error<T>> {
        let n = self.len();
        if n < 2 {
            return Err(Error::InvalidPolynomial { len: n });
        }
        let coeffs = self
            .0
            .iter()
            .take(n - 1)
            .enumerate()
            .map(|(i, c)| c.scale(T::from_usize(n - 1 - i).expect("degree too high to convert")))
            .collect();
        Ok(Self(coeffs))
    }
}
