//! Per-run propagation metrics.
//!
//! [`PropagationMetrics`] captures queue activity and timing for one
//! engine run, for logging and for the benches.

/// Counters collected while the frontier drains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropagationMetrics {
    /// Number of seed cells in the initial frontier.
    pub seeds: usize,
    /// Number of frontier pops (one per engine step).
    pub dequeues: u64,
    /// Frontier pops that relaxed at least one neighbour.
    pub productive_dequeues: u64,
    /// Neighbour updates that passed the relaxation guard.
    pub relaxations: u64,
    /// In-bounds neighbour visits that failed the guard.
    pub rejected: u64,
    /// Largest frontier length observed, including the seeds.
    pub peak_frontier: usize,
    /// Wall-clock time spent in `run()`, in microseconds.
    pub elapsed_us: u64,
}

impl PropagationMetrics {
    /// Frontier pops that relaxed nothing: stale revisits, dead ends, and
    /// seeds with no eligible neighbour.
    pub fn idle_dequeues(&self) -> u64 {
        self.dequeues.saturating_sub(self.productive_dequeues)
    }
}
