//! Search lifecycle contract.

use wayfarer_kernel::state::State;

use crate::error::SearchError;
use crate::metrics::SearchMetrics;

/// Lifecycle shared by every algorithm.
///
/// # Contract
///
/// - `search` begins by calling `clear`, so every run starts from zeroed
///   counters, empty frontiers and an empty path.
/// - On success `search` returns `Ok(())`, `is_done()` is `true` and
///   `path()` runs from `start` to `goal` inclusive.
/// - On failure `path()` is empty, `is_done()` is `false` and `metrics()`
///   describes the partial run. An unreachable goal is always reported as
///   [`SearchError::Unreachable`], never as a path that stops short.
/// - Instances are single-threaded and own all their structures; two
///   instances never share state.
pub trait Search<S: State> {
    /// Short algorithm name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Reset run metrics and every internal structure.
    fn clear(&mut self);

    /// Run from `start` to `goal` to completion.
    ///
    /// # Errors
    ///
    /// See [`SearchError`] for the failure taxonomy.
    fn search(&mut self, start: &S, goal: &S) -> Result<(), SearchError>;

    /// Result path of the last run.
    fn path(&self) -> &[S];

    /// Metrics of the last run.
    fn metrics(&self) -> &SearchMetrics;

    /// Whether the last run reached the goal.
    fn is_done(&self) -> bool {
        self.metrics().done
    }
}
