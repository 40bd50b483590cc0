//! Engine configuration.

/// Tuning knobs for [`HilbertSeriesEngine`](crate::HilbertSeriesEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesConfig {
    /// Largest partition size a query may ask for.
    ///
    /// Work grows with the number of partitions of every size up to `n`, so
    /// this is the only termination control a host needs.
    pub max_size: u32,
    /// Evaluate each size level with rayon.
    pub parallel: bool,
}

impl SeriesConfig {
    /// Sets the size cap.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Enables or disables parallel level evaluation.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            max_size: 40,
            parallel: false,
        }
    }
}
