use num::{Complex, Zero};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Evaluate the polynomial at `x` with Horner's scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use aberth_roots::{complex, poly};
    ///
    /// let p = poly![1.0, -6.0, 11.0, -6.0];
    /// assert_eq!(p.eval(complex!(1.0)), complex!(0.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        let mut y = Complex::zero();
        for &c in &self.0 {
            y = y * x + c;
        }
        y
    }

    /// `p(x) / q(x)`, without overflowing for large `|x|`.
    ///
    /// For `|x| <= 1` this is the plain quotient of two Horner
    /// evaluations. For `|x| > 1` both polynomials are evaluated with
    /// reversed coefficients at `1/x`, which has magnitude below one, and
    /// the quotient is rescaled by `x`; no large power of `x` is ever
    /// formed. The rescaling is exact when `q` has degree one below `p`,
    /// which is the Newton quotient `p/p'` this routine exists for.
    #[must_use]
    pub fn eval_quotient(&self, den: &Self, x: Complex<T>) -> Complex<T> {
        debug_assert_eq!(
            den.len() + 1,
            self.len(),
            "denominator must have degree one below the numerator"
        );
        if x.norm() <= T::one() {
            return self.eval(x) / den.eval(x);
        }
        let y = x.inv();
        x * (self.reversed().eval(y) / den.reversed().eval(y))
    }

    /// Coefficients in reverse order, i.e. the polynomial `x^deg * p(1/x)`.
    fn reversed(&self) -> Self {
        Self(self.0.iter().copied().rev().collect())
    }
}

#[cfg(test)]
mod test {
    use crate::Poly64;

    #[test]
    fn eval_horner() {
        let p = poly![1.0, -6.0, 11.0, -6.0];
        assert_eq!(p.eval(complex!(0.0)), complex!(-6.0));
        assert_eq!(p.eval(complex!(2.0)), complex!(0.0));
        assert_eq!(p.eval(complex!(4.0)), complex!(6.0));
    }

    #[test]
    fn eval_complex_point() {
        // i is a root of x^2 + 1
        let p = poly![1.0, 0.0, 1.0];
        assert!(p.eval(complex!(0.0, 1.0)).norm() < 1e-15);
    }

    #[test]
    fn quotient_matches_direct_division_inside_unit_disk() {
        let p = poly![1.0, -6.0, 11.0, -6.0];
        let q = p.diff().unwrap();
        for x in [
            complex!(0.5, 0.25),
            complex!(-0.9),
            complex!(0.0, -1.0),
            complex!(1.0),
        ] {
            let direct = p.eval(x) / q.eval(x);
            assert!((p.eval_quotient(&q, x) - direct).norm() < 1e-12);
        }
    }

    #[test]
    fn quotient_is_continuous_across_the_unit_circle() {
        let p = poly![1.0, -6.0, 11.0, -6.0];
        let q = p.diff().unwrap();
        let x = complex!(1.000_000_1, 0.3);
        // |x| > 1, so this takes the reversed branch; direct division is
        // still safe at this magnitude
        let direct = p.eval(x) / q.eval(x);
        assert!((p.eval_quotient(&q, x) - direct).norm() < 1e-9);
    }

    #[test]
    fn quotient_stays_finite_far_from_the_origin() {
        // degree 30, all coefficients one
        let p = Poly64::from_real_vec(vec![1.0; 31]);
        let q = p.diff().unwrap();
        let x = complex!(1e200);
        assert!(!p.eval(x).norm().is_finite());
        let w = p.eval_quotient(&q, x);
        assert!(w.norm().is_finite());
        // for huge x the Newton quotient approaches x / deg
        assert!((w - x / 30.0).norm() / w.norm() < 1e-6);
    }
}
