//! Lock tests: repeated runs over the same world produce identical paths,
//! counters and report digests, whether on fresh or reused instances.

use lock_tests::fixtures::{at, jittered_grid, scrambled};
use wayfarer_harness::runner::{build_search, run_search, AlgorithmKind};
use wayfarer_harness::worlds::road_map::euclidean;
use wayfarer_harness::worlds::sliding_tile::{manhattan, Move, TileBoard};
use wayfarer_search::contract::Search;
use wayfarer_search::policy::SearchPolicy;

const SCRAMBLE: [Move; 7] = [
    Move::Left,
    Move::Up,
    Move::Right,
    Move::Up,
    Move::Left,
    Move::Left,
    Move::Down,
];

fn start_and_goal() -> (TileBoard, TileBoard) {
    (scrambled(&SCRAMBLE), scrambled(&[]))
}

#[test]
fn fresh_runs_are_identical_n5() {
    let (start, goal) = start_and_goal();

    for kind in AlgorithmKind::ALL {
        let first = run_search(kind, &start, &goal, manhattan, SearchPolicy::default());
        let first_digest = first.report.digest().unwrap();

        for _ in 1..5 {
            let again = run_search(kind, &start, &goal, manhattan, SearchPolicy::default());
            assert_eq!(again.path, first.path, "{kind}");
            assert_eq!(again.report.expanded, first.report.expanded, "{kind}");
            assert_eq!(again.report.branches, first.report.branches, "{kind}");
            assert_eq!(again.report.memory, first.report.memory, "{kind}");
            assert_eq!(again.report.digest().unwrap(), first_digest, "{kind}");
        }
    }
}

#[test]
fn reused_instance_repeats_its_own_metrics() {
    let (start, goal) = start_and_goal();

    for kind in AlgorithmKind::ALL {
        let mut search: Box<dyn Search<TileBoard>> =
            build_search(kind, manhattan, SearchPolicy::default());
        search.search(&start, &goal).unwrap();
        let path = search.path().to_vec();
        let metrics = search.metrics().clone();

        search.search(&start, &goal).unwrap();
        assert_eq!(search.path(), path.as_slice(), "{kind}");
        assert_eq!(search.metrics().expanded, metrics.expanded, "{kind}");
        assert_eq!(search.metrics().branches, metrics.branches, "{kind}");
        assert_eq!(search.metrics().memory, metrics.memory, "{kind}");
        assert_eq!(search.metrics().path_cost, metrics.path_cost, "{kind}");
    }
}

#[test]
fn road_map_digests_are_stable() {
    let map = jittered_grid(5);
    let (start, goal) = (at(&map, 2), at(&map, 22));

    for kind in AlgorithmKind::ALL {
        let digests: Vec<String> = (0..3)
            .map(|_| {
                run_search(kind, &start, &goal, euclidean, SearchPolicy::default())
                    .report
                    .digest()
                    .unwrap()
            })
            .collect();
        assert!(digests.windows(2).all(|w| w[0] == w[1]), "{kind}");
    }
}

#[test]
fn report_json_carries_timing_outside_the_digest() {
    let (start, goal) = start_and_goal();
    let run = run_search(
        AlgorithmKind::AStar,
        &start,
        &goal,
        manhattan,
        SearchPolicy::default(),
    );

    let value = run.report.to_json_value();
    assert_eq!(value["algorithm"], "astar");
    assert_eq!(value["outcome"], "found");
    assert!(value["elapsed_secs"].as_f64().unwrap() >= 0.0);

    let canonical: serde_json::Value =
        serde_json::from_slice(&run.report.to_canonical_json_bytes().unwrap()).unwrap();
    assert!(canonical.get("elapsed_secs").is_none());
    assert_eq!(canonical["path_len"], value["path_len"]);
}
