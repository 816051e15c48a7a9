use itertools::Itertools;
use num::{Complex, One, Zero};

use super::{initial_guesses_circle, Error, DEFAULT_EPSILON, DEFAULT_MAX_TRIES};
use crate::{Poly, RealScalar};

/// Convergence diagnostic for one iteration of the solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationRecord<T> {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Largest offset magnitude over all root estimates.
    ///
    /// This is not guaranteed to decrease monotonically; only its eventual
    /// descent below the tolerance matters.
    pub max_offset: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Iterating,
    Converged,
    Exhausted,
    Degenerate { i: usize, j: usize },
}

/// Find all roots at once with the Aberth-Ehrlich method.
///
/// Each step combines the Newton quotient `p/p'` with a pairwise
/// repulsion term between estimates, and every estimate is updated from
/// the same snapshot, so all roots move in lockstep. Iterating the solver
/// yields one [`IterationRecord`] per step until it converges, exhausts
/// its budget, or detects coincident estimates; [`AberthEhrlich::run`]
/// drives it to the end in one call.
///
/// ```
/// use aberth_roots::{poly, roots::AberthEhrlich};
///
/// let p = poly![1.0, -6.0, 11.0, -6.0];
/// let roots = AberthEhrlich::new(p, None, None).unwrap().run().unwrap();
/// assert_eq!(roots.len(), 3);
/// ```
///
/// # Caveats
/// This method performs poorly around repeated roots. Those surface as
/// [`Error::Degenerate`] or [`Error::NoConverge`], never as a silently
/// wrong result.
#[derive(Debug)]
pub struct AberthEhrlich<T: RealScalar> {
    poly: Poly<T>,
    deriv: Poly<T>,
    estimates: Vec<Complex<T>>,
    // offsets are written here while `estimates` is only read, then
    // applied all at once; no estimate ever sees a half-updated snapshot
    offsets: Vec<Complex<T>>,
    epsilon: T,
    max_tries: usize,
    tries: usize,
    max_offset: T,
    status: Status,
}

impl<T: RealScalar> AberthEhrlich<T> {
    /// Create a solver with initial guesses placed by
    /// [`initial_guesses_circle`].
    ///
    /// `epsilon` defaults to [`DEFAULT_EPSILON`] and `max_tries` to
    /// [`DEFAULT_MAX_TRIES`].
    ///
    /// # Errors
    /// [`Error::InvalidPolynomial`] for fewer than two coefficients.
    pub fn new(
        poly: Poly<T>,
        epsilon: Option<T>,
        max_tries: Option<usize>,
    ) -> Result<Self, Error<T>> {
        if poly.len() < 2 {
            return Err(Error::InvalidPolynomial { len: poly.len() });
        }
        let mut estimates = vec![Complex::zero(); poly.degree()];
        initial_guesses_circle(&poly, &mut estimates);
        Self::build(poly, epsilon, max_tries, estimates)
    }

    /// Create a solver from caller-supplied initial guesses, one per root.
    ///
    /// # Errors
    /// [`Error::InvalidPolynomial`] for fewer than two coefficients;
    /// [`Error::Degenerate`] if two guesses coincide.
    pub fn with_guesses(
        poly: Poly<T>,
        epsilon: Option<T>,
        max_tries: Option<usize>,
        guesses: &[Complex<T>],
    ) -> Result<Self, Error<T>> {
        if poly.len() < 2 {
            return Err(Error::InvalidPolynomial { len: poly.len() });
        }
        debug_assert_eq!(guesses.len(), poly.degree(), "one guess per root");
        if let Some(((i, _), (j, _))) = guesses
            .iter()
            .enumerate()
            .tuple_combinations()
            .find(|&((_, a), (_, b))| coincident(*a, *b))
        {
            return Err(Error::Degenerate { i, j });
        }
        Self::build(poly, epsilon, max_tries, guesses.to_vec())
    }

    fn build(
        poly: Poly<T>,
        epsilon: Option<T>,
        max_tries: Option<usize>,
        estimates: Vec<Complex<T>>,
    ) -> Result<Self, Error<T>> {
        let deriv = poly.diff()?;
        let n = estimates.len();
        Ok(Self {
            poly,
            deriv,
            estimates,
            offsets: vec![Complex::zero(); n],
            epsilon: epsilon.unwrap_or_else(|| T::from_f64(DEFAULT_EPSILON).expect("overflow")),
            max_tries: max_tries.unwrap_or(DEFAULT_MAX_TRIES),
            tries: 0,
            max_offset: T::infinity(),
            status: Status::Iterating,
        })
    }

    /// Current root estimates.
    #[must_use]
    pub fn estimates(&self) -> &[Complex<T>] {
        &self.estimates
    }

    /// Drive the iteration to a terminal state and return the roots.
    ///
    /// # Errors
    /// [`Error::Degenerate`] if estimates collide during iteration;
    /// [`Error::NoConverge`] if the budget runs out first.
    pub fn run(mut self) -> super::Result<T> {
        while let Some(record) = self.next() {
            match record {
                Ok(IterationRecord {
                    iteration,
                    max_offset,
                }) => log::trace!("iteration {iteration}: max offset {max_offset}"),
                Err(e) => {
                    log::debug!("aborting root finder: {e}");
                    return Err(e);
                }
            }
        }
        self.into_result()
    }

    /// Resolve the solver into its final roots.
    ///
    /// # Errors
    /// [`Error::Degenerate`] and [`Error::NoConverge`] as for
    /// [`AberthEhrlich::run`]. A solver abandoned before reaching a
    /// terminal state reports [`Error::NoConverge`] with its current
    /// estimates, since they are best-effort by definition.
    pub fn into_result(self) -> super::Result<T> {
        match self.status {
            Status::Converged => Ok(self.estimates),
            Status::Degenerate { i, j } => Err(Error::Degenerate { i, j }),
            Status::Iterating | Status::Exhausted => Err(Error::NoConverge {
                roots: self.estimates,
                max_offset: self.max_offset,
                tries: self.tries,
            }),
        }
    }
}

impl<T: RealScalar> Iterator for AberthEhrlich<T> {
    type Item = Result<IterationRecord<T>, Error<T>>;

    /// One simultaneous update of all root estimates.
    ///
    /// The record for the terminal iteration is yielded before the
    /// iterator ends; the estimates are left unchanged on termination.
    fn next(&mut self) -> Option<Self::Item> {
        if self.status != Status::Iterating {
            return None;
        }
        let max_offset = match offsets(&self.poly, &self.deriv, &self.estimates, &mut self.offsets)
        {
            Ok(m) => m,
            Err((i, j)) => {
                self.status = Status::Degenerate { i, j };
                return Some(Err(Error::Degenerate { i, j }));
            }
        };
        self.max_offset = max_offset;
        let record = IterationRecord {
            iteration: self.tries,
            max_offset,
        };
        if max_offset < self.epsilon {
            self.status = Status::Converged;
        } else if self.tries >= self.max_tries {
            self.status = Status::Exhausted;
        } else {
            for (z, w) in self.estimates.iter_mut().zip(&self.offsets) {
                *z = *z - *w;
            }
            self.tries += 1;
        }
        Some(Ok(record))
    }
}

/// One Jacobi pass of the Aberth-Ehrlich correction.
///
/// Reads a snapshot of the current estimates, writes one offset per
/// estimate into `out` and returns the largest offset magnitude. `Err`
/// carries the indices of a numerically coincident pair, which would turn
/// the repulsion sum into a division by zero.
fn offsets<T: RealScalar>(
    poly: &Poly<T>,
    deriv: &Poly<T>,
    snapshot: &[Complex<T>],
    out: &mut [Complex<T>],
) -> Result<T, (usize, usize)> {
    debug_assert_eq!(snapshot.len(), out.len());
    let n = snapshot.len();

    // Newton quotients p(z)/p'(z), overflow-safe for estimates far out
    for (w, &z) in out.iter_mut().zip(snapshot) {
        *w = poly.eval_quotient(deriv, z);
    }

    let mut max_offset = T::zero();
    for k in 0..n {
        // the repulsion between estimates is what makes the update
        // simultaneous rather than n independent Newton iterations
        let mut sum = Complex::<T>::zero();
        for j in 0..n {
            if j == k {
                continue;
            }
            if coincident(snapshot[k], snapshot[j]) {
                return Err((k.min(j), k.max(j)));
            }
            sum = sum + (snapshot[k] - snapshot[j]).inv();
        }
        let w = out[k] / (Complex::<T>::one() - out[k] * sum);
        out[k] = w;
        max_offset = max_offset.max(w.norm());
    }
    Ok(max_offset)
}

/// Two estimates closer than machine precision can tell apart.
fn coincident<T: RealScalar>(a: Complex<T>, b: Complex<T>) -> bool {
    let scale = a.norm_sqr().max(b.norm_sqr()).max(T::one());
    (a - b).norm_sqr() <= scale * T::epsilon() * T::epsilon()
}
