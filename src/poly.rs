use std::fmt;

use num::{Complex, Zero};

use crate::{util::complex::complex_fmt, RealScalar};

mod base;
mod calculus;
mod eval;
pub mod roots;

/// Polynomial as a list of coefficients of terms of descending degree.
///
/// A polynomial of degree `d` has `d + 1` coefficients; the leading
/// coefficient comes first. Root finding expects at least two
/// coefficients, i.e. degree one or higher.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<Complex<T>>);

impl<T: RealScalar> fmt::Display for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.len();
        let mut terms = Vec::with_capacity(n);
        for (i, c) in self.0.iter().enumerate() {
            if c.is_zero() && n > 1 {
                continue;
            }
            let coeff = complex_fmt(c);
            terms.push(match n - 1 - i {
                0 => coeff,
                1 => format!("{coeff}x"),
                deg => format!("{coeff}x^{deg}"),
            });
        }
        if terms.is_empty() {
            return write!(f, "0");
        }
        write!(f, "{}", terms.join(" + "))
    }
}
