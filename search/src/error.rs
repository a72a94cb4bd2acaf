//! Typed search errors.
//!
//! A failed `search` call still leaves its partial metrics readable on the
//! algorithm instance; the error only says why no path was produced.

use thiserror::Error;
use wayfarer_kernel::error::FrontierError;

/// Why a search run produced no path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Every frontier was exhausted without reaching the goal.
    #[error("goal is unreachable from start")]
    Unreachable,
    /// Iterative deepening hit the policy depth bound without success.
    #[error("depth limit {max_depth} reached without finding the goal")]
    DepthLimitReached { max_depth: usize },
    /// The policy expansion budget was used up.
    #[error("expansion budget of {max_expansions} exhausted")]
    ExpansionBudgetExceeded { max_expansions: u64 },
    /// A state reported a negative or NaN edge cost.
    #[error("invalid edge cost {cost}: costs must be non-negative")]
    InvalidEdgeCost { cost: f64 },
    /// The policy failed validation before the run started.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// A frontier was drained past empty (search-loop invariant violation).
    #[error(transparent)]
    Frontier(#[from] FrontierError),
}

/// Reject edge costs the engine cannot order.
pub(crate) fn checked_cost(cost: f64) -> Result<f64, SearchError> {
    if cost.is_nan() || cost < 0.0 {
        return Err(SearchError::InvalidEdgeCost { cost });
    }
    Ok(cost)
}
