//! Heuristic trait for the A* family.

/// Estimate of the remaining cost from `state` to `target`.
///
/// Estimates must be non-negative. An admissible heuristic (one that never
/// overestimates the true remaining cost) is required for A* to return a
/// cheapest path; the engine does not check admissibility.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S, target: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S, &S) -> f64,
{
    fn estimate(&self, state: &S, target: &S) -> f64 {
        self(state, target)
    }
}

/// Returns 0 for every state. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S, _target: &S) -> f64 {
        0.0
    }
}
