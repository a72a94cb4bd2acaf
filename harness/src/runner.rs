//! Harness runner: picks an algorithm by name, runs it through the
//! [`Search`] contract and packages the outcome as a [`SearchReport`].
//!
//! The runner implements no search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! AlgorithmKind::from_str() → build_search() → Search::search()
//!   → SearchReport::new() → SearchRun { report, path }
//! ```

use std::fmt;
use std::str::FromStr;

use log::info;
use wayfarer_kernel::state::State;
use wayfarer_search::astar::AStarSearch;
use wayfarer_search::bfs::BreadthFirstSearch;
use wayfarer_search::bidirectional::BidirectionalAStarSearch;
use wayfarer_search::contract::Search;
use wayfarer_search::heuristic::Heuristic;
use wayfarer_search::ids::IterativeDeepeningSearch;
use wayfarer_search::policy::SearchPolicy;

use crate::error::RunError;
use crate::report::SearchReport;

/// Selectable search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    BreadthFirst,
    IterativeDeepening,
    AStar,
    BidirectionalAStar,
}

impl AlgorithmKind {
    pub const ALL: [Self; 4] = [
        Self::BreadthFirst,
        Self::IterativeDeepening,
        Self::AStar,
        Self::BidirectionalAStar,
    ];

    /// Name accepted by `from_str`; matches `Search::name`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::IterativeDeepening => "ids",
            Self::AStar => "astar",
            Self::BidirectionalAStar => "bidirectional",
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RunError::UnknownAlgorithm { name: s.to_string() })
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boxed instance of `kind`. Uninformed algorithms drop the heuristic.
#[must_use]
pub fn build_search<S, H>(
    kind: AlgorithmKind,
    heuristic: H,
    policy: SearchPolicy,
) -> Box<dyn Search<S>>
where
    S: State + 'static,
    H: Heuristic<S> + 'static,
{
    match kind {
        AlgorithmKind::BreadthFirst => Box::new(BreadthFirstSearch::with_policy(policy)),
        AlgorithmKind::IterativeDeepening => {
            Box::new(IterativeDeepeningSearch::with_policy(policy))
        }
        AlgorithmKind::AStar => Box::new(AStarSearch::with_policy(heuristic, policy)),
        AlgorithmKind::BidirectionalAStar => {
            Box::new(BidirectionalAStarSearch::with_policy(heuristic, policy))
        }
    }
}

/// Result of [`run_search`].
#[derive(Debug, Clone)]
pub struct SearchRun<S> {
    pub report: SearchReport,
    /// Empty unless the report's outcome is `Found`.
    pub path: Vec<S>,
}

/// Run `kind` from `start` to `goal` and report the outcome.
///
/// A failed search is recorded in the report's outcome; the path is then
/// empty.
#[must_use]
pub fn run_search<S, H>(
    kind: AlgorithmKind,
    start: &S,
    goal: &S,
    heuristic: H,
    policy: SearchPolicy,
) -> SearchRun<S>
where
    S: State + 'static,
    H: Heuristic<S> + 'static,
{
    let mut search = build_search(kind, heuristic, policy);
    let result = search.search(start, goal);
    let path = search.path().to_vec();
    let report = SearchReport::new(search.name(), &result, search.metrics(), path.len());

    info!(
        "{kind}: {} after {} expansions ({} branches, peak frontier {})",
        report.outcome.as_str(),
        report.expanded,
        report.branches,
        report.memory
    );
    SearchRun { report, path }
}
