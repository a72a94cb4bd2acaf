//! Typed kernel errors.

use thiserror::Error;

/// Failure raised by a [`crate::frontier::Frontier`] container.
///
/// Every algorithm checks `is_empty` before removing, so observing this
/// error means a search loop broke its own invariant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// `remove` was called on an empty container.
    #[error("remove called on an empty frontier container")]
    EmptyContainer,
}
