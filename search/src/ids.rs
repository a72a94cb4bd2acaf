//! Iterative deepening depth-first search over a LIFO frontier.

use log::debug;
use wayfarer_kernel::frontier::{Frontier, LifoStack};
use wayfarer_kernel::state::State;
use wayfarer_kernel::tree::{NodeId, SearchTree};

use crate::contract::Search;
use crate::error::{checked_cost, SearchError};
use crate::metrics::{RunState, SearchMetrics, Solution};
use crate::policy::SearchPolicy;

/// Outcome of one depth-bounded round.
enum Round {
    /// The goal was popped.
    Found(NodeId),
    /// Some non-cyclic state was pruned by the depth budget, so a deeper
    /// round may still succeed.
    CutOff,
    /// Nothing was pruned by the budget: every acyclic path from the start
    /// has been explored and the goal is not on any of them.
    Exhausted,
}

/// Iterative deepening search.
///
/// Each round restarts from an empty frontier and an empty tree with a depth
/// budget one larger than the last. Cycles are broken per branch: a popped
/// state that already occurs among its own ancestors is not expanded, but the
/// same state may be visited again on another branch.
///
/// On a finite graph the run always terminates: once a round prunes nothing
/// by depth the goal is reported unreachable. On an infinite graph with an
/// unreachable goal, set [`SearchPolicy::max_depth`].
pub struct IterativeDeepeningSearch<S> {
    policy: SearchPolicy,
    frontier: LifoStack<(usize, NodeId)>,
    tree: SearchTree<S>,
    depths_tried: Vec<usize>,
    run: RunState<S>,
}

impl<S: State> IterativeDeepeningSearch<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(SearchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(policy: SearchPolicy) -> Self {
        Self {
            policy,
            frontier: LifoStack::new(),
            tree: SearchTree::new(),
            depths_tried: Vec::new(),
            run: RunState::new(),
        }
    }

    /// Depth bounds attempted during the last run, in order.
    #[must_use]
    pub fn depths_tried(&self) -> &[usize] {
        &self.depths_tried
    }

    fn execute(&mut self, start: &S, goal: &S) -> Result<Solution<S>, SearchError> {
        self.policy.validate()?;

        let mut depth = 0;
        loop {
            self.depths_tried.push(depth);
            debug!("ids round depth={depth}");

            match self.deepen(start, goal, depth)? {
                Round::Found(id) => return Ok(Solution::from_tree(&self.tree, id)),
                Round::Exhausted => return Err(SearchError::Unreachable),
                Round::CutOff => {}
            }

            if self.policy.max_depth.is_some_and(|max| depth >= max) {
                return Err(SearchError::DepthLimitReached { max_depth: depth });
            }
            depth += 1;
        }
    }

    fn deepen(&mut self, start: &S, goal: &S, depth: usize) -> Result<Round, SearchError> {
        self.frontier.clear();
        self.tree.clear();

        let root = self.tree.push_root(start.clone());
        self.frontier.insert((depth, root));
        let mut cut_off = false;

        while !self.frontier.is_empty() {
            self.run.sample_memory(self.frontier.len());
            let (budget, current) = self.frontier.remove()?;

            if self.tree.state(current) == goal {
                return Ok(Round::Found(current));
            }
            if budget == 0 {
                cut_off |= !self.tree.has_ancestor_state(current);
                continue;
            }
            if self.tree.has_ancestor_state(current) {
                continue;
            }

            self.run.check_budget(&self.policy)?;
            self.run.record_expanded();

            for (cost, successor) in self.tree.state(current).expand() {
                let cost = checked_cost(cost)?;
                let child = self.tree.push_child(current, successor, cost);
                self.frontier.insert((budget - 1, child));
                self.run.record_branch();
            }
        }

        Ok(if cut_off {
            Round::CutOff
        } else {
            Round::Exhausted
        })
    }
}

impl<S: State> Default for IterativeDeepeningSearch<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Search<S> for IterativeDeepeningSearch<S> {
    fn name(&self) -> &'static str {
        "ids"
    }

    fn clear(&mut self) {
        self.run.reset();
        self.frontier.clear();
        self.tree.clear();
        self.depths_tried.clear();
    }

    fn search(&mut self, start: &S, goal: &S) -> Result<(), SearchError> {
        self.clear();
        debug!("ids start={start:?} goal={goal:?}");
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
