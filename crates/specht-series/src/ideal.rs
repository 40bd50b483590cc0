//! Hilbert series of order ideals.
//!
//! The series of an ideal follows from the series of its generators by
//! inclusion-exclusion: for generators `g1, ..., gr`,
//!
//! ```text
//! S(g1..gr) = S(g1..g(r-1)) + S(gr) - S(meet(g1, gr), ..., meet(g(r-1), gr))
//! ```
//!
//! since `down(a) ∩ down(b) = down(meet(a, b))` in the dominance lattice.

use crate::engine::HilbertSeriesEngine;
use crate::error::SeriesError;
use specht_expr::HilbExpr;
use specht_partitions::{maximal_elements, Ideal, Partition};
use tracing::info;

impl HilbertSeriesEngine {
    /// The Hilbert series of an order ideal.
    ///
    /// The empty ideal quotients nothing and gives `1 / (1 - t)^n`; an ideal
    /// with a single generator has that generator's series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::SizeLimitExceeded`] if the ideal's `n` is above
    /// the cap, and propagates internal arithmetic failures.
    pub fn ideal_series(&mut self, ideal: &Ideal) -> Result<HilbExpr, SeriesError> {
        self.resolve_through(ideal.n())?;
        let n = usize::try_from(ideal.n()).unwrap_or(usize::MAX);
        let series = self.generated_series(n, ideal.generators())?;
        info!(ideal = %ideal, series = %series, "computed ideal Hilbert series");
        Ok(series)
    }

    /// Series of the ideal generated by an antichain, all of size `n`.
    fn generated_series(&self, n: usize, generators: &[Partition]) -> Result<HilbExpr, SeriesError> {
        match generators {
            [] => Ok(HilbExpr::free(n)),
            [single] => self.lookup(single),
            [rest @ .., last] => {
                let overlap = maximal_elements(rest.iter().map(|g| g.meet(last)));
                let terms = [
                    self.generated_series(n, rest)?,
                    self.lookup(last)?,
                    -self.generated_series(n, &overlap)?,
                ];
                Ok(HilbExpr::add_many(&terms)?)
            }
        }
    }
}
