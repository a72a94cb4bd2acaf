//! Lock tests on weighted road maps: A* cost optimality, path validity and
//! agreement between heuristics.

use lock_tests::fixtures::{assert_valid_path, at, detour_map, jittered_grid, road_length};
use wayfarer_harness::worlds::road_map::euclidean;
use wayfarer_search::astar::AStarSearch;
use wayfarer_search::bfs::BreadthFirstSearch;
use wayfarer_search::bidirectional::BidirectionalAStarSearch;
use wayfarer_search::contract::Search;
use wayfarer_search::heuristic::ZeroHeuristic;
use wayfarer_search::ids::IterativeDeepeningSearch;

const EPS: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Fewest roads versus shortest distance
// ---------------------------------------------------------------------------

#[test]
fn bfs_takes_fewest_roads_astar_takes_shortest_distance() {
    let map = detour_map();
    let (start, goal) = (at(&map, 0), at(&map, 4));

    let mut bfs = BreadthFirstSearch::new();
    bfs.search(&start, &goal).unwrap();
    let mut astar = AStarSearch::new(euclidean);
    astar.search(&start, &goal).unwrap();

    // Detour through (5, 10): two roads of length sqrt(125).
    assert_eq!(bfs.path().len(), 3);
    assert!((road_length(bfs.path()) - 2.0 * 125f64.sqrt()).abs() < EPS);

    // Straight route: three roads, total length 10.
    assert_eq!(astar.path().len(), 4);
    let cost = astar.metrics().path_cost.unwrap();
    assert!((cost - 10.0).abs() < EPS);
    assert!((road_length(astar.path()) - cost).abs() < EPS);
    assert!(cost < road_length(bfs.path()));
}

#[test]
fn ids_matches_bfs_length_on_detour() {
    let map = detour_map();
    let (start, goal) = (at(&map, 0), at(&map, 4));

    let mut ids = IterativeDeepeningSearch::new();
    ids.search(&start, &goal).unwrap();

    assert_eq!(ids.path().len(), 3);
    assert_eq!(ids.depths_tried(), [0, 1, 2]);
    assert_valid_path(ids.path(), &start, &goal);
}

// ---------------------------------------------------------------------------
// Jittered grid
// ---------------------------------------------------------------------------

#[test]
fn euclidean_astar_matches_uniform_cost_on_grid() {
    let map = jittered_grid(6);
    let pairs = [(0, 35), (5, 30), (12, 23), (3, 33)];

    for (from, to) in pairs {
        let (start, goal) = (at(&map, from), at(&map, to));

        let mut uniform = AStarSearch::new(ZeroHeuristic);
        uniform.search(&start, &goal).unwrap();
        let mut informed = AStarSearch::new(euclidean);
        informed.search(&start, &goal).unwrap();

        let expected = uniform.metrics().path_cost.unwrap();
        let actual = informed.metrics().path_cost.unwrap();
        assert!((expected - actual).abs() < EPS, "{from}->{to}");
        assert_valid_path(informed.path(), &start, &goal);
        assert!((road_length(informed.path()) - actual).abs() < EPS);
    }
}

#[test]
fn astar_never_costs_more_than_bfs_path() {
    let map = jittered_grid(5);
    let (start, goal) = (at(&map, 0), at(&map, 24));

    let mut bfs = BreadthFirstSearch::new();
    bfs.search(&start, &goal).unwrap();
    let mut astar = AStarSearch::new(euclidean);
    astar.search(&start, &goal).unwrap();

    assert!(astar.metrics().path_cost.unwrap() <= road_length(bfs.path()) + EPS);
    assert!(bfs.path().len() <= astar.path().len());
}

#[test]
fn bidirectional_reports_the_cost_of_its_path() {
    let map = jittered_grid(6);
    let (start, goal) = (at(&map, 0), at(&map, 35));

    let mut bidirectional = BidirectionalAStarSearch::new(euclidean);
    bidirectional.search(&start, &goal).unwrap();
    let mut astar = AStarSearch::new(euclidean);
    astar.search(&start, &goal).unwrap();

    let path = bidirectional.path();
    assert_valid_path(path, &start, &goal);
    let cost = bidirectional.metrics().path_cost.unwrap();
    assert!((road_length(path) - cost).abs() < EPS);
    assert!(cost + EPS >= astar.metrics().path_cost.unwrap());
}
