//! Bidirectional A*: forward and backward halves meeting in the middle.
//!
//! # Round structure
//!
//! ```text
//! sample memory (both frontiers) → pop one live candidate per side
//!   → meeting check → expand each side's candidate → next round
//! ```
//!
//! The forward half searches start → goal and scores successors against the
//! goal; the backward half searches goal → start and scores against the
//! start. Heuristic targets are the fixed opposite endpoints.
//!
//! # Meeting condition
//!
//! A round terminates the run when
//!
//! 1. both halves popped the same state, or
//! 2. the forward candidate already has a backward score, or
//! 3. the backward candidate already has a forward score.
//!
//! The side without a candidate for the meeting state borrows the node from
//! its own score map, so each half contributes its own ancestry. The result
//! is the forward path up to (but excluding) the meeting state followed by
//! the reversed backward path from the meeting state to the goal.
//!
//! Meeting in the middle is a termination rule, not an optimality proof:
//! without a consistent potential transform of the two heuristics the
//! stitched path can be longer than the shortest one. The backward half
//! walks `expand` edges from the goal, so the successor relation must be
//! symmetric for the stitched path to be valid in the forward direction.

use std::collections::HashMap;

use log::{debug, trace};
use wayfarer_kernel::frontier::{Frontier, Priority, PriorityQueue};
use wayfarer_kernel::state::State;
use wayfarer_kernel::tree::{NodeId, SearchTree};

use crate::contract::Search;
use crate::error::{checked_cost, SearchError};
use crate::heuristic::Heuristic;
use crate::metrics::{RunState, SearchMetrics, Solution};
use crate::policy::SearchPolicy;

/// Committed score of a state on one side: best path cost and the node
/// that realizes it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Score {
    g: f64,
    node: NodeId,
}

/// One half of the bidirectional search.
struct Side<S> {
    frontier: PriorityQueue<NodeId>,
    tree: SearchTree<S>,
    g_scores: HashMap<S, Score>,
    expanded: u64,
    branches: u64,
}

impl<S: State> Side<S> {
    fn new() -> Self {
        Self {
            frontier: PriorityQueue::new(),
            tree: SearchTree::new(),
            g_scores: HashMap::new(),
            expanded: 0,
            branches: 0,
        }
    }

    fn clear(&mut self) {
        self.frontier.clear();
        self.tree.clear();
        self.g_scores.clear();
        self.expanded = 0;
        self.branches = 0;
    }

    fn seed<H: Heuristic<S>>(&mut self, origin: &S, target: &S, heuristic: &H) {
        let root = self.tree.push_root(origin.clone());
        self.g_scores
            .insert(origin.clone(), Score { g: 0.0, node: root });
        let h = heuristic.estimate(origin, target);
        self.frontier.insert((Priority::new(0.0, h), root));
    }

    /// Node holding the committed score for `state`, if any.
    fn committed(&self, state: &S) -> Option<NodeId> {
        self.g_scores.get(state).map(|score| score.node)
    }

    /// Pop the next live candidate, discarding stale entries when asked to.
    fn pop_candidate(&mut self, skip_stale: bool) -> Result<Option<NodeId>, SearchError> {
        while !self.frontier.is_empty() {
            let (_, id) = self.frontier.remove()?;
            if skip_stale && self.is_stale(id) {
                trace!("bidirectional skipping stale entry {id:?}");
                continue;
            }
            return Ok(Some(id));
        }
        Ok(None)
    }

    fn is_stale(&self, id: NodeId) -> bool {
        let node = self.tree.node(id);
        self.g_scores
            .get(&node.state)
            .is_some_and(|score| node.g > score.g)
    }

    /// One A* expansion of `current`, scoring successors against `target`.
    fn step<H: Heuristic<S>>(
        &mut self,
        current: NodeId,
        target: &S,
        heuristic: &H,
        run: &mut RunState<S>,
    ) -> Result<(), SearchError> {
        self.expanded += 1;
        run.record_expanded();

        let g = self.tree.node(current).g;
        for (cost, successor) in self.tree.state(current).expand() {
            let cost = checked_cost(cost)?;
            let tentative = g + cost;
            let improved = self
                .g_scores
                .get(&successor)
                .is_none_or(|known| tentative < known.g);
            if !improved {
                continue;
            }

            let h = heuristic.estimate(&successor, target);
            let child = self.tree.push_child(current, successor.clone(), cost);
            self.g_scores.insert(
                successor,
                Score {
                    g: tentative,
                    node: child,
                },
            );
            self.frontier.insert((Priority::new(tentative, h), child));
            self.branches += 1;
            run.record_branch();
        }
        Ok(())
    }

    fn g_scores(&self) -> impl Iterator<Item = (&S, f64)> {
        self.g_scores.iter().map(|(state, score)| (state, score.g))
    }
}

/// Bidirectional A* search.
pub struct BidirectionalAStarSearch<S, H> {
    heuristic: H,
    policy: SearchPolicy,
    forward: Side<S>,
    backward: Side<S>,
    run: RunState<S>,
}

impl<S: State, H: Heuristic<S>> BidirectionalAStarSearch<S, H> {
    #[must_use]
    pub fn new(heuristic: H) -> Self {
        Self::with_policy(heuristic, SearchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(heuristic: H, policy: SearchPolicy) -> Self {
        Self {
            heuristic,
            policy,
            forward: Side::new(),
            backward: Side::new(),
            run: RunState::new(),
        }
    }

    /// Forward half's best known cost from the start, per reached state.
    pub fn forward_g_scores(&self) -> impl Iterator<Item = (&S, f64)> {
        self.forward.g_scores()
    }

    /// Backward half's best known cost from the goal, per reached state.
    pub fn backward_g_scores(&self) -> impl Iterator<Item = (&S, f64)> {
        self.backward.g_scores()
    }

    /// `(expanded, branches)` contributed by the forward half in the last run.
    #[must_use]
    pub fn forward_counts(&self) -> (u64, u64) {
        (self.forward.expanded, self.forward.branches)
    }

    /// `(expanded, branches)` contributed by the backward half in the last run.
    #[must_use]
    pub fn backward_counts(&self) -> (u64, u64) {
        (self.backward.expanded, self.backward.branches)
    }

    fn execute(&mut self, start: &S, goal: &S) -> Result<Solution<S>, SearchError> {
        self.policy.validate()?;

        self.forward.seed(start, goal, &self.heuristic);
        self.backward.seed(goal, start, &self.heuristic);
        let skip_stale = self.policy.skip_stale_entries;

        loop {
            if self.forward.frontier.is_empty() && self.backward.frontier.is_empty() {
                return Err(SearchError::Unreachable);
            }
            self.run
                .sample_memory(self.forward.frontier.len() + self.backward.frontier.len());

            let forward_candidate = self.forward.pop_candidate(skip_stale)?;
            let backward_candidate = self.backward.pop_candidate(skip_stale)?;

            if let Some((f, b)) = self.meeting(forward_candidate, backward_candidate) {
                debug!(
                    "bidirectional met at {:?} (forward g={}, backward g={})",
                    self.forward.tree.state(f),
                    self.forward.tree.node(f).g,
                    self.backward.tree.node(b).g,
                );
                return Ok(self.stitch(f, b));
            }

            if let Some(current) = forward_candidate {
                self.run.check_budget(&self.policy)?;
                self.forward
                    .step(current, goal, &self.heuristic, &mut self.run)?;
            }
            if let Some(current) = backward_candidate {
                self.run.check_budget(&self.policy)?;
                self.backward
                    .step(current, start, &self.heuristic, &mut self.run)?;
            }
        }
    }

    /// Resolve the meeting condition to a `(forward node, backward node)` pair
    /// for the same state.
    fn meeting(
        &self,
        forward_candidate: Option<NodeId>,
        backward_candidate: Option<NodeId>,
    ) -> Option<(NodeId, NodeId)> {
        if let (Some(f), Some(b)) = (forward_candidate, backward_candidate) {
            if self.forward.tree.state(f) == self.backward.tree.state(b) {
                return Some((f, b));
            }
        }
        if let Some(f) = forward_candidate {
            if let Some(b) = self.backward.committed(self.forward.tree.state(f)) {
                return Some((f, b));
            }
        }
        if let Some(b) = backward_candidate {
            if let Some(f) = self.forward.committed(self.backward.tree.state(b)) {
                return Some((f, b));
            }
        }
        None
    }

    fn stitch(&self, f: NodeId, b: NodeId) -> Solution<S> {
        let mut path = self.forward.tree.path(f);
        path.pop();
        let backward_path = self.backward.tree.path(b);
        path.extend(backward_path.into_iter().rev());

        Solution {
            path,
            cost: self.forward.tree.node(f).g + self.backward.tree.node(b).g,
        }
    }
}

impl<S: State, H: Heuristic<S>> Search<S> for BidirectionalAStarSearch<S, H> {
    fn name(&self) -> &'static str {
        "bidirectional"
    }

    fn clear(&mut self) {
        self.run.reset();
        self.forward.clear();
        self.backward.clear();
    }

    fn search(&mut self, start: &S, goal: &S) -> Result<(), SearchError> {
        self.clear();
        debug!("bidirectional start={start:?} goal={goal:?}");
        let outcome = self.execute(start, goal);
        self.run.finish(self.name(), outcome)
    }

    fn path(&self) -> &[S] {
        self.run.path()
    }

    fn metrics(&self) -> &SearchMetrics {
        self.run.metrics()
    }
}
