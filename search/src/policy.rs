//! Search policy types.

use crate::error::SearchError;

/// Budget configuration shared by every algorithm.
///
/// The default policy imposes no limits, so an iterative deepening run over
/// an infinite graph with an unreachable goal will not return on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Deepest bound iterative deepening will try. `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Hard cap on processed states. `None` means unbounded.
    pub max_expansions: Option<u64>,
    /// A*-family only: discard popped entries whose path cost has since been
    /// superseded in the score map.
    pub skip_stale_entries: bool,
}

impl SearchPolicy {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_skip_stale_entries(mut self, skip: bool) -> Self {
        self.skip_stale_entries = skip;
        self
    }

    /// Validate the policy before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero,
    /// which would forbid expanding even the start state.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_depth: None,
            max_expansions: None,
            skip_stale_entries: true,
        }
    }
}
