//! Typed harness errors.

use thiserror::Error;

/// Failure building a concrete world.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Board dimensions or contents are not a valid sliding-tile puzzle.
    #[error("invalid board: {detail}")]
    InvalidBoard { detail: String },
    /// A move would push the blank off the board.
    #[error("illegal move {step} at index {index}")]
    IllegalMove { index: usize, step: String },
    /// A road references a junction that was never added.
    #[error("unknown junction {id}")]
    UnknownJunction { id: usize },
    /// A road connects a junction to itself.
    #[error("road from junction {id} to itself")]
    SelfLoop { id: usize },
}

/// Failure in the runner or report layer.
#[derive(Error, Debug)]
pub enum RunError {
    /// Algorithm name not recognized by `AlgorithmKind::from_str`.
    #[error("unknown algorithm {name:?} (expected bfs, ids, astar or bidirectional)")]
    UnknownAlgorithm { name: String },
    /// Report serialization failed.
    #[error("report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
