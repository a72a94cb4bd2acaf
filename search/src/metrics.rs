//! Run state and instrumentation shared by every algorithm.
//!
//! Each `search` call follows the same lifecycle:
//!
//! ```text
//! RunState::reset() → [sample_memory / record_expanded / record_branch]* → RunState::finish()
//! ```
//!
//! `finish` is the only place the elapsed time, the result path and the
//! completion flag are written.

use std::time::{Duration, Instant};

use log::debug;
use wayfarer_kernel::state::State;
use wayfarer_kernel::tree::{NodeId, SearchTree};

use crate::error::SearchError;
use crate::policy::SearchPolicy;

/// Metrics of the most recent run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchMetrics {
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    /// Peak total of resident frontier items, sampled once per iteration
    /// before the frontier is mutated.
    pub memory: usize,
    /// States popped and processed.
    pub expanded: u64,
    /// Successors admitted into a frontier. A successor returned as the
    /// goal without being queued is not counted.
    pub branches: u64,
    /// Total edge cost of the returned path (`None` unless the run succeeded).
    pub path_cost: Option<f64>,
    /// Whether the last run reached the goal.
    pub done: bool,
}

impl SearchMetrics {
    /// Elapsed wall-clock seconds.
    #[must_use]
    pub fn timer(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// A successful run's result before it is committed to the run state.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// States from start to goal, inclusive.
    pub path: Vec<S>,
    /// Sum of edge costs along `path`.
    pub cost: f64,
}

impl<S: State> Solution<S> {
    /// Extract the path ending at `id` and its accumulated cost.
    #[must_use]
    pub fn from_tree(tree: &SearchTree<S>, id: NodeId) -> Self {
        Self {
            path: tree.path(id),
            cost: tree.node(id).g,
        }
    }
}

/// Mutable per-run bookkeeping owned by each algorithm instance.
#[derive(Debug, Clone)]
pub struct RunState<S> {
    started: Option<Instant>,
    metrics: SearchMetrics,
    path: Vec<S>,
}

impl<S: State> RunState<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: None,
            metrics: SearchMetrics::default(),
            path: Vec::new(),
        }
    }

    /// Restart the timer, zero every counter and drop the previous path.
    pub fn reset(&mut self) {
        self.started = Some(Instant::now());
        self.metrics = SearchMetrics::default();
        self.path.clear();
    }

    /// Fold one observation of total frontier occupancy into the peak.
    pub fn sample_memory(&mut self, resident: usize) {
        self.metrics.memory = self.metrics.memory.max(resident);
    }

    pub fn record_expanded(&mut self) {
        self.metrics.expanded += 1;
    }

    pub fn record_branch(&mut self) {
        self.metrics.branches += 1;
    }

    /// Fail if processing one more state would exceed the expansion budget.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ExpansionBudgetExceeded`] once `expanded`
    /// has reached `policy.max_expansions`.
    pub fn check_budget(&self, policy: &SearchPolicy) -> Result<(), SearchError> {
        match policy.max_expansions {
            Some(max_expansions) if self.metrics.expanded >= max_expansions => {
                Err(SearchError::ExpansionBudgetExceeded { max_expansions })
            }
            _ => Ok(()),
        }
    }

    /// Commit the outcome of a run: elapsed time, path, cost and completion.
    ///
    /// # Errors
    ///
    /// Passes through the run's own error. The path stays empty and
    /// `done` stays `false` in that case.
    pub fn finish(
        &mut self,
        algorithm: &str,
        outcome: Result<Solution<S>, SearchError>,
    ) -> Result<(), SearchError> {
        self.metrics.elapsed = self.started.map_or(Duration::ZERO, |t| t.elapsed());

        let result = match outcome {
            Ok(solution) => {
                self.path = solution.path;
                self.metrics.path_cost = Some(solution.cost);
                self.metrics.done = true;
                Ok(())
            }
            Err(err) => Err(err),
        };

        debug!(
            "{algorithm} finished: done={} path_len={} expanded={} branches={} memory={} elapsed={:?}",
            self.metrics.done,
            self.path.len(),
            self.metrics.expanded,
            self.metrics.branches,
            self.metrics.memory,
            self.metrics.elapsed,
        );

        result
    }

    #[must_use]
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn path(&self) -> &[S] {
        &self.path
    }
}

impl<S: State> Default for RunState<S> {
    fn default() -> Self {
        Self::new()
    }
}
