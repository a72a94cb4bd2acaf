//! Breadth-first search over a FIFO frontier.

use std::collections::HashSet;

use log::debug;
use wayfarer_kernel::frontier::{FifoQueue, Frontier};
use wayfarer_kernel::state::State;
use wayfarer_kernel::tree::{NodeId, SearchTree};

use crate::contract::Search;
use crate::error::{checked_cost, SearchError};
use crate::metrics::{RunState, SearchMetrics, Solution};
use crate::policy::SearchPolicy;

/// Breadth-first search.
///
/// Successors are goal-tested as they are admitted, so the run stops as soon
/// as the goal is generated rather than when it reaches the front of the
/// queue. The returned path has the minimum number of edges; edge costs are
/// only summed, never used for ordering.
pub struct BreadthFirstSearch<S> {
    policy: SearchPolicy,
    frontier: FifoQueue<NodeId>,
    tree: SearchTree<S>,
    /// States already expanded or waiting in the frontier.
    seen: HashSet<S>,
    run: RunState<S>,
}

impl<S: State> BreadthFirstSearch<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(SearchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(policy: SearchPolicy) -> Self {
        Self {
            policy,
            frontier: FifoQueue::new(),
            tree: SearchTree::new(),
            seen: HashSet::new(),
            run: RunState::new(),
        }
    }

    fn execute(&mut self, start: &S, goal: &S) -> Result<Solution<S>, SearchError> {
        self.policy.validate()?;

        let root = self.tree.push_root(start.clone());
        if start == goal {
            return Ok(Solution::from_tree(&self.tree, root));
        }
        self.seen.insert(start.clone());
        self.frontier.insert(root);

        while !self.frontier.is_empty() {
            self.run.sample_memory(self.frontier.len());
            let current = self.frontier.remove()?;

            self.run.check_budget(&self.policy)?;
            self.run.record_expanded();

            for (cost, successor) in self.tree.state(current).expand() {
                let cost = checked_cost(cost)?;
                if self.seen.contains(&successor) {
                    continue;
                }
                self.seen.insert(successor.clone());

                let child = self.tree.push_child(current, successor, cost);
                if self.tree.state(child) == goal {
                    return Ok(Solution::from_tree(&self.tree, child));
                }
                self.frontier.insert(child);
                self.run.record_branch();
            }
        }

        Err(SearchError::Unreachable)
    }
}

impl<S: State> Default for BreadthFirstSearch<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Search<S> for BreadthFirstSearch<S> {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn clear(&mut self) {
        self.run.reset();
        self.frontier.clear();
        self.tree.clear();
        self.seen.clear();
    }

    fn search(&mut self, start: &S, goal: &S) -> Result<(), SearchError> {
        self.clear();
        debug!("bfs start={start:?} goal={goal:?}");
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
