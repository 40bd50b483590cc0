//! Bottom-up memoized evaluation of partition Hilbert series.

use crate::config::SeriesConfig;
use crate::error::SeriesError;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use specht_expr::HilbExpr;
use specht_partitions::{partitions_of, Partition};
use specht_poly::DensePoly;
use specht_rings::{Ring, Z};
use tracing::{debug, info, trace};

/// Computes and memoizes the Hilbert series of partitions.
///
/// The memo table only grows. Once size `m` is resolved, every partition of
/// every size `2..=m` has its series in the table, so the engine can serve
/// any number of queries and can be cleared to release memory.
#[derive(Debug)]
pub struct HilbertSeriesEngine {
    config: SeriesConfig,
    cache: FxHashMap<Partition, HilbExpr>,
    /// Every size up to and including this one is in the cache.
    resolved: u32,
}

impl HilbertSeriesEngine {
    /// Creates an engine with an empty memo table.
    #[must_use]
    pub fn new(config: SeriesConfig) -> Self {
        Self {
            config,
            cache: FxHashMap::default(),
            resolved: 1,
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Number of memoized partitions.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// The largest size whose level is fully memoized.
    #[must_use]
    pub fn resolved_size(&self) -> u32 {
        self.resolved
    }

    /// Drops every memoized series.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.resolved = 1;
    }

    /// The Hilbert series of `p`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::SizeLimitExceeded`] if `p` is larger than the
    /// configured cap, and propagates internal arithmetic failures.
    pub fn series(&mut self, p: &Partition) -> Result<HilbExpr, SeriesError> {
        self.resolve_through(p.n())?;
        let series = self.lookup(p)?;
        info!(partition = %p, series = %series, "computed Hilbert series");
        Ok(series)
    }

    /// Makes sure every partition of every size up to `n` is memoized.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::SizeLimitExceeded`] if `n` is above the cap.
    pub fn resolve_through(&mut self, n: u32) -> Result<(), SeriesError> {
        if n > self.config.max_size {
            return Err(SeriesError::SizeLimitExceeded {
                size: n,
                limit: self.config.max_size,
            });
        }

        for size in (self.resolved + 1).max(2)..=n {
            self.resolve_level(size)?;
            self.resolved = size;
        }
        Ok(())
    }

    /// Evaluates all partitions of `size`; the level below must be resolved.
    fn resolve_level(&mut self, size: u32) -> Result<(), SeriesError> {
        let level = partitions_of(size);
        let engine = &*self;

        let evaluated: Vec<(Partition, HilbExpr)> = if self.config.parallel {
            level
                .into_par_iter()
                .map(|p| engine.evaluate(&p).map(|s| (p, s)))
                .collect::<Result<Vec<_>, SeriesError>>()?
        } else {
            level
                .into_iter()
                .map(|p| engine.evaluate(&p).map(|s| (p, s)))
                .collect::<Result<Vec<_>, SeriesError>>()?
        };

        debug!(size, partitions = evaluated.len(), parallel = self.config.parallel, "resolved level");
        self.cache.extend(evaluated);
        Ok(())
    }

    /// A memoized series, or a base case computed on the spot.
    pub(crate) fn lookup(&self, p: &Partition) -> Result<HilbExpr, SeriesError> {
        if let Some(series) = self.cache.get(p) {
            return Ok(series.clone());
        }
        if let Some(series) = base_case(p) {
            return series;
        }
        Err(SeriesError::MissingSubresult(p.to_string()))
    }

    /// The series of `p`, reading only memoized results of size `n - 1`.
    ///
    /// Sums `t^(i-1) L(p, i)` over rows `i < len`, plus
    /// `t^(len-1) L(p, len) / (1 - t)` for the last row.
    fn evaluate(&self, p: &Partition) -> Result<HilbExpr, SeriesError> {
        if let Some(series) = base_case(p) {
            return series;
        }

        let len = p.len();
        let mut terms = Vec::with_capacity(len);
        for row in 1..len {
            terms.push(self.row_term(p, row)?.shift(row - 1));
        }
        terms.push(self.row_term(p, len)?.shift(len - 1).over_one_minus_t()?);

        let series = HilbExpr::add_many(&terms)?;
        trace!(partition = %p, series = %series, "evaluated");
        Ok(series)
    }

    /// The contribution `L(p, row)` of one row, built from series of size `n - 1`.
    fn row_term(&self, p: &Partition, row: usize) -> Result<HilbExpr, SeriesError> {
        let part = p.parts()[row - 1];
        let corner = p
            .corner_set()
            .into_iter()
            .map(|c| c.row)
            .filter(|&r| r <= row)
            .max()
            .unwrap_or(0);

        if part == 1 {
            return self.lookup(&p.remove_from_part(corner));
        }

        let lowered = p.meet(&refill_below(p, row, part - 1)?);
        // The meet keeps the first `row` prefix sums of `p`, so the row exists.
        debug_assert!(row <= lowered.len());
        let p2 = lowered.remove_from_part(row);

        if corner == 0 {
            return self.lookup(&p2);
        }

        let p1 = p.remove_from_part(corner);
        let overlap = p1.meet(&p2);
        let terms = [self.lookup(&p1)?, self.lookup(&p2)?, -self.lookup(&overlap)?];
        Ok(HilbExpr::add_many(&terms)?)
    }
}

impl Default for HilbertSeriesEngine {
    fn default() -> Self {
        Self::new(SeriesConfig::default())
    }
}

/// Series that need no recursion: a single row gives 0, a single column of
/// `m` boxes gives `(1 - t^C(m, 2)) / (1 - t)^m`.
fn base_case(p: &Partition) -> Option<Result<HilbExpr, SeriesError>> {
    if p.len() <= 1 {
        return Some(Ok(HilbExpr::zero()));
    }
    if p.largest_part() == 1 {
        let m = p.len();
        let vandermonde_degree = m * (m - 1) / 2;
        let h = DensePoly::one().sub(&DensePoly::monomial(Z::one(), vandermonde_degree));
        return Some(HilbExpr::new(h, m).map_err(SeriesError::from));
    }
    None
}

/// Keeps the first `row` parts of `p` and refills the remaining boxes in rows
/// of length `width`, with one shorter row for the remainder.
fn refill_below(p: &Partition, row: usize, width: u32) -> Result<Partition, SeriesError> {
    let head = &p.parts()[..row];
    let rest = p.n() - head.iter().sum::<u32>();

    let mut parts = head.to_vec();
    parts.extend(std::iter::repeat(width).take((rest / width) as usize));
    if rest % width != 0 {
        parts.push(rest % width);
    }

    Ok(Partition::from_parts(parts)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(parts: &[i64]) -> Partition {
        Partition::new(parts.iter().copied()).unwrap()
    }

    fn expr(coeffs: &[i64], a: usize) -> HilbExpr {
        HilbExpr::new(DensePoly::new(coeffs.iter().copied().map(Z::new).collect()), a).unwrap()
    }

    fn series_of(parts: &[i64]) -> HilbExpr {
        HilbertSeriesEngine::default().series(&p(parts)).unwrap()
    }

    fn assert_canonical_eq(actual: &HilbExpr, expected: &HilbExpr) {
        assert_eq!(actual.numerator(), expected.numerator());
        assert_eq!(actual.exponent(), expected.exponent());
    }

    #[test]
    fn test_base_cases() {
        assert!(series_of(&[5]).is_zero());
        assert!(series_of(&[1]).is_zero());
        // (1 - t^3)/(1 - t)^3 = (1 + t + t^2)/(1 - t)^2
        assert_canonical_eq(&series_of(&[1, 1, 1]), &expr(&[1, 0, 0, -1], 3));
        assert_canonical_eq(&series_of(&[1, 1, 1]), &expr(&[1, 1, 1], 2));
        assert_canonical_eq(&series_of(&[1, 1]), &expr(&[1], 1));
    }

    #[test]
    fn test_two_rows() {
        // Linear forms x_i - x_j cut the ring down to one variable.
        assert_canonical_eq(&series_of(&[2, 1]), &HilbExpr::free(1));
        assert_canonical_eq(&series_of(&[3, 1]), &HilbExpr::free(1));
        assert_canonical_eq(&series_of(&[2, 2]), &expr(&[1, 2, 1], 2));
        assert_canonical_eq(&series_of(&[3, 2]), &expr(&[1, 3, 1], 2));
        assert_canonical_eq(&series_of(&[3, 3]), &expr(&[1, 3, 6, 5], 3));
    }

    #[test]
    fn test_recursive_cases() {
        assert_canonical_eq(&series_of(&[2, 1, 1]), &expr(&[1, 2, 3, 1], 2));
        assert_canonical_eq(&series_of(&[2, 2, 1]), &expr(&[1, 2, 3, 4], 3));
        assert_canonical_eq(&series_of(&[3, 1, 1]), &expr(&[1, 3, 6, 4, 1], 2));
        assert_canonical_eq(&series_of(&[3, 2, 1]), &expr(&[1, 3, 6, 10, -1, -3, -1], 3));
        assert_canonical_eq(&series_of(&[4, 2, 1]), &expr(&[1, 4, 10, 20, 0, -8, -5, -1], 3));
        assert_canonical_eq(&series_of(&[2, 2, 2]), &expr(&[1, 2, 3, 4, 5, 6, 2, -2, -1], 4));
    }

    #[test]
    fn test_staircase_of_ten() {
        let expected = expr(
            &[
                1, 4, 10, 20, 35, 56, 84, 120, 165, 220, -482, -404, 75, 230, 145, 38, -19, -25,
                -15, -5, -1,
            ],
            6,
        );
        assert_canonical_eq(&series_of(&[4, 3, 2, 1]), &expected);
    }

    #[test]
    fn test_memo_covers_every_smaller_size() {
        let mut engine = HilbertSeriesEngine::default();
        engine.series(&p(&[3, 2, 1])).unwrap();
        assert_eq!(engine.resolved_size(), 6);
        // p(2) + ... + p(6) = 2 + 3 + 5 + 7 + 11
        assert_eq!(engine.cache_len(), 28);

        // Smaller queries are served from the table.
        engine.series(&p(&[2, 2])).unwrap();
        assert_eq!(engine.cache_len(), 28);

        engine.clear();
        assert_eq!(engine.cache_len(), 0);
        assert_eq!(engine.resolved_size(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut sequential = HilbertSeriesEngine::new(SeriesConfig::default());
        let mut parallel = HilbertSeriesEngine::new(SeriesConfig::default().with_parallel(true));
        sequential.resolve_through(9).unwrap();
        parallel.resolve_through(9).unwrap();

        for q in partitions_of(9) {
            let a = sequential.series(&q).unwrap();
            let b = parallel.series(&q).unwrap();
            assert_canonical_eq(&a, &b);
        }
    }

    #[test]
    fn test_size_limit() {
        let mut engine = HilbertSeriesEngine::new(SeriesConfig::default().with_max_size(4));
        let err = engine.series(&p(&[3, 2])).unwrap_err();
        assert_eq!(err, SeriesError::SizeLimitExceeded { size: 5, limit: 4 });
        assert!(engine.series(&p(&[2, 2])).is_ok());
    }

    #[test]
    fn test_refill_below() {
        let gamma = refill_below(&p(&[4, 2, 1]), 1, 3).unwrap();
        assert_eq!(gamma, p(&[4, 3]));
        let gamma = refill_below(&p(&[3, 3, 1]), 2, 2).unwrap();
        assert_eq!(gamma, p(&[3, 3, 1]));
        let gamma = refill_below(&p(&[5, 2, 2, 1]), 1, 4).unwrap();
        assert_eq!(gamma, p(&[5, 4, 1]));
    }
}
