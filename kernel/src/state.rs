//! Search-graph state contract.

use std::fmt::Debug;
use std::hash::Hash;

/// A vertex in an implicit, cost-weighted search graph.
///
/// # Contract
///
/// - Equality and hashing cover domain content only. Two independently
///   produced values describing the same configuration are the same vertex,
///   so score maps and visited sets unify them.
/// - `expand` returns every successor together with a non-negative edge
///   cost. Order must be deterministic: same state, same successors, same
///   order.
/// - A state never references its parent. Ancestry lives in
///   [`crate::tree::SearchTree`], which allocates a fresh node for every
///   generated successor.
pub trait State: Clone + Eq + Hash + Debug {
    /// Enumerate `(cost, successor)` pairs reachable in one step.
    fn expand(&self) -> Vec<(f64, Self)>;
}
