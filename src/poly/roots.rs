//! Root finding for real-coefficient polynomials.

use num::Complex;

use crate::{Poly, RealScalar};

mod aberth_ehrlich;
pub use aberth_ehrlich::{AberthEhrlich, IterationRecord};
mod initial_guess;
pub use initial_guess::{bounding_radius, initial_guesses_circle, initial_guesses_random};

/// Convergence tolerance used when the caller does not provide one.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Iteration budget used when the caller does not provide one.
pub const DEFAULT_MAX_TRIES: usize = 850;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error<T: RealScalar> {
    /// The coefficient sequence does not describe a polynomial of degree
    /// at least one.
    #[error("polynomial must have at least 2 coefficients, got {len}")]
    InvalidPolynomial { len: usize },

    /// Two root estimates are numerically coincident, which would make
    /// the pairwise repulsion term a division by zero. Retrying without
    /// changing the initial guesses will not help; see
    /// [`initial_guesses_random`] for a way to restart perturbed.
    #[error("root estimates {i} and {j} are numerically coincident")]
    Degenerate { i: usize, j: usize },

    /// The iteration budget ran out before the largest offset fell below
    /// the tolerance. Carries the best-effort estimates so the caller can
    /// decide whether the approximation is acceptable.
    #[error("did not converge within {tries} iterations (max offset {max_offset})")]
    NoConverge {
        roots: Vec<Complex<T>>,
        max_offset: T,
        tries: usize,
    },

    #[error("unexpected error while running root finder")]
    Other(#[from] anyhow::Error),
}

impl<T: RealScalar> Error<T> {
    /// Recover the best-effort root estimates from [`Error::NoConverge`].
    #[must_use]
    pub fn best_effort(self) -> Option<Vec<Complex<T>>> {
        match self {
            Self::NoConverge { roots, .. } => Some(roots),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<Vec<Complex<T>>, Error<T>>;

impl<T: RealScalar> Poly<T> {
    /// Find all roots with a pre-configured Aberth-Ehrlich solver.
    ///
    /// `epsilon` defaults to [`DEFAULT_EPSILON`] and `max_tries` to
    /// [`DEFAULT_MAX_TRIES`]. The returned roots are in no particular
    /// order; sort them explicitly if order matters.
    ///
    /// Use [`AberthEhrlich`] directly for per-iteration diagnostics or
    /// custom initial guesses.
    ///
    /// # Errors
    /// - [`Error::InvalidPolynomial`] for fewer than two coefficients
    /// - [`Error::Degenerate`] if root estimates collide during iteration
    /// - [`Error::NoConverge`] if the iteration budget runs out
    pub fn roots(&self, epsilon: Option<T>, max_tries: Option<usize>) -> Result<T> {
        AberthEhrlich::new(self.clone(), epsilon, max_tries)?.run()
    }
}
