//! Lock tests for the uniform unreachable outcome: every algorithm reports
//! `SearchError::Unreachable`, an empty path, `is_done() == false` and the
//! metrics of the partial run.

use lock_tests::fixtures::{at, two_islands};
use wayfarer_harness::worlds::road_map::{euclidean, Junction, RoadMapBuilder};
use wayfarer_harness::worlds::sliding_tile::{manhattan, TileBoard};
use wayfarer_search::astar::AStarSearch;
use wayfarer_search::bfs::BreadthFirstSearch;
use wayfarer_search::bidirectional::BidirectionalAStarSearch;
use wayfarer_search::contract::Search;
use wayfarer_search::error::SearchError;
use wayfarer_search::ids::IterativeDeepeningSearch;

fn junction_searches() -> Vec<Box<dyn Search<Junction>>> {
    vec![
        Box::new(BreadthFirstSearch::<Junction>::new()),
        Box::new(IterativeDeepeningSearch::<Junction>::new()),
        Box::new(AStarSearch::<Junction, _>::new(euclidean)),
        Box::new(BidirectionalAStarSearch::<Junction, _>::new(euclidean)),
    ]
}

fn assert_unreachable<S: wayfarer_kernel::state::State>(
    search: &dyn Search<S>,
    result: Result<(), SearchError>,
) {
    let name = search.name();
    assert_eq!(result, Err(SearchError::Unreachable), "{name}");
    assert!(search.path().is_empty(), "{name}");
    assert!(!search.is_done(), "{name}");
    assert_eq!(search.metrics().path_cost, None, "{name}");
    assert!(search.metrics().expanded > 0, "{name}");
}

// ---------------------------------------------------------------------------
// Disconnected road map
// ---------------------------------------------------------------------------

#[test]
fn every_algorithm_reports_unreachable_between_islands() {
    let map = two_islands();
    let (start, goal) = (at(&map, 0), at(&map, 4));

    for mut search in junction_searches() {
        let result = search.search(&start, &goal);
        assert_unreachable(search.as_ref(), result);
    }
}

#[test]
fn bfs_and_astar_expand_the_whole_start_island() {
    let map = two_islands();
    let (start, goal) = (at(&map, 0), at(&map, 4));

    let mut bfs = BreadthFirstSearch::new();
    assert_eq!(bfs.search(&start, &goal), Err(SearchError::Unreachable));
    assert_eq!(bfs.metrics().expanded, 3);
    assert_eq!(bfs.metrics().branches, 2);

    let mut astar = AStarSearch::new(euclidean);
    assert_eq!(astar.search(&start, &goal), Err(SearchError::Unreachable));
    assert_eq!(astar.metrics().expanded, 3);
    assert_eq!(astar.g_scores().len(), 3);
}

#[test]
fn unreachable_run_does_not_leak_into_next_search() {
    let map = two_islands();
    let mut bfs = BreadthFirstSearch::new();

    assert!(bfs.search(&at(&map, 0), &at(&map, 5)).is_err());
    bfs.search(&at(&map, 3), &at(&map, 5)).unwrap();

    assert!(bfs.is_done());
    assert_eq!(bfs.path().len(), 2);
    assert_eq!(bfs.metrics().expanded, 1);
}

#[test]
fn isolated_goal_junction_is_unreachable() {
    let mut builder = RoadMapBuilder::new();
    let a = builder.junction(0.0, 0.0);
    let b = builder.junction(1.0, 0.0);
    let lonely = builder.junction(5.0, 5.0);
    builder.road(a, b).unwrap();
    let map = builder.build();

    for mut search in junction_searches() {
        let result = search.search(&at(&map, a), &at(&map, lonely));
        assert_unreachable(search.as_ref(), result);
    }
    assert_eq!(map.components(), vec![0, 0, 1]);
}

// ---------------------------------------------------------------------------
// Unsolvable tile board
// ---------------------------------------------------------------------------

#[test]
fn swapped_tiles_on_two_by_two_are_unreachable() {
    let goal = TileBoard::solved(2).unwrap();
    let start = TileBoard::from_rows(&[&[2, 1], &[3, 0]]).unwrap();
    assert!(!start.can_reach(&goal));

    let searches: Vec<Box<dyn Search<TileBoard>>> = vec![
        Box::new(BreadthFirstSearch::<TileBoard>::new()),
        Box::new(IterativeDeepeningSearch::<TileBoard>::new()),
        Box::new(AStarSearch::<TileBoard, _>::new(manhattan)),
        Box::new(BidirectionalAStarSearch::<TileBoard, _>::new(manhattan)),
    ];
    for mut search in searches {
        let result = search.search(&start, &goal);
        assert_unreachable(search.as_ref(), result);
    }
}
