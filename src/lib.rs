#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
//! Find all roots of a univariate polynomial with real coefficients using
//! the Aberth-Ehrlich simultaneous iteration.
//!
//! The entry point for most uses is [`Poly::roots`]:
//!
//! ```
//! use aberth_roots::poly;
//!
//! // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! let p = poly![1.0, -6.0, 11.0, -6.0];
//! let roots = p.roots(None, None).unwrap();
//! assert_eq!(roots.len(), 3);
//! ```
//!
//! Callers that need per-iteration diagnostics or custom initial guesses
//! drive [`roots::AberthEhrlich`] directly.

pub use num;

/// Shorthand for creating a complex number from real and imaginary parts.
#[macro_export]
macro_rules! complex {
    () => {
        $crate::num::Complex::new(0.0, 0.0)
    };
    ($re:expr) => {
        $crate::num::Complex::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
}

/// Shorthand for creating a polynomial from real coefficients, highest
/// degree first.
#[macro_export]
macro_rules! poly {
    ($($coeff:expr),+ $(,)?) => {
        $crate::Poly::from_real_slice(&[$($coeff),+])
    };
}

mod scalar;
pub use scalar::RealScalar;

mod util;

mod poly;
pub use poly::{roots, Poly};

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
