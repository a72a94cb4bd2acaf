//! A* search over a `(g + h, h)` priority frontier.

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

/// A* search.
///
/// The same state may sit in the frontier several times under different
/// path costs. `g_scores` only ever gains entries or lowers them, so an entry
/// popped after its state was reached more cheaply is stale; with
/// `skip_stale_entries` (the default) such entries are discarded unprocessed.
pub struct AStarSearch<S, H> {
    heuristic: H,
    policy: SearchPolicy,
    frontier: PriorityQueue<NodeId>,
    tree: SearchTree<S>,
    g_scores: HashMap<S, f64>,
    run: RunState<S>,
}

impl<S: State, H: Heuristic<S>> AStarSearch<S, H> {
    #[must_use]
    pub fn new(heuristic: H) -> Self {
        Self::with_policy(heuristic, SearchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(heuristic: H, policy: SearchPolicy) -> Self {
        Self {
            heuristic,
            policy,
            frontier: PriorityQueue::new(),
            tree: SearchTree::new(),
            g_scores: HashMap::new(),
            run: RunState::new(),
        }
    }

    /// Best known path cost from the start for every state reached so far.
    #[must_use]
    pub fn g_scores(&self) -> &HashMap<S, f64> {
        &self.g_scores
    }

    fn is_stale(&self, id: NodeId) -> bool {
        let node = self.tree.node(id);
        self.g_scores
            .get(&node.state)
            .is_some_and(|&best| node.g > best)
    }

    fn execute(&mut self, start: &S, goal: &S) -> Result<Solution<S>, SearchError> {
        self.policy.validate()?;

        let root = self.tree.push_root(start.clone());
        self.g_scores.insert(start.clone(), 0.0);
        let h = self.heuristic.estimate(start, goal);
        self.frontier.insert((Priority::new(0.0, h), root));

        while !self.frontier.is_empty() {
            self.run.sample_memory(self.frontier.len());
            let (_, current) = self.frontier.remove()?;

            if self.policy.skip_stale_entries && self.is_stale(current) {
                trace!("astar skipping stale entry {current:?}");
                continue;
            }
            if self.tree.state(current) == goal {
                return Ok(Solution::from_tree(&self.tree, current));
            }

            self.run.check_budget(&self.policy)?;
            self.run.record_expanded();

            let g = self.tree.node(current).g;
            for (cost, successor) in self.tree.state(current).expand() {
                let cost = checked_cost(cost)?;
                let tentative = g + cost;
                let improved = self
                    .g_scores
                    .get(&successor)
                    .is_none_or(|&known| tentative < known);
                if !improved {
                    continue;
                }

                let h = self.heuristic.estimate(&successor, goal);
                self.g_scores.insert(successor.clone(), tentative);
                let child = self.tree.push_child(current, successor, cost);
                self.frontier.insert((Priority::new(tentative, h), child));
                self.run.record_branch();
            }
        }

        Err(SearchError::Unreachable)
    }
}

impl<S: State, H: Heuristic<S>> Search<S> for AStarSearch<S, H> {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn clear(&mut self) {
        self.run.reset();
        self.frontier.clear();
        self.tree.clear();
        self.g_scores.clear();
    }

    fn search(&mut self, start: &S, goal: &S) -> Result<(), SearchError> {
        self.clear();
        debug!("astar start={start:?} goal={goal:?}");
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
