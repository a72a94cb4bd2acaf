//! Worlds and assertions used by more than one lock test.

use std::sync::Arc;

use wayfarer_harness::worlds::road_map::{Junction, RoadMap, RoadMapBuilder};
use wayfarer_harness::worlds::sliding_tile::{Move, TileBoard};
use wayfarer_kernel::state::State;

/// Solved 3×3 board.
///
/// # Panics
///
/// Never; 3 is a supported size.
#[must_use]
pub fn tile_goal() -> TileBoard {
    TileBoard::solved(3).expect("3x3 is a supported size")
}

/// Solved 3×3 board with `moves` applied to the blank.
///
/// # Panics
///
/// Panics if a move pushes the blank off the board.
#[must_use]
pub fn scrambled(moves: &[Move]) -> TileBoard {
    tile_goal().scramble(moves).expect("legal scramble")
}

/// Two triangles with no road between them: `{0, 1, 2}` and `{3, 4, 5}`.
///
/// # Panics
///
/// Never; every road joins two existing junctions.
#[must_use]
pub fn two_islands() -> Arc<RoadMap> {
    let mut builder = RoadMapBuilder::new();
    let ids: Vec<usize> = [
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (10.0, 10.0),
        (11.0, 10.0),
        (10.0, 11.0),
    ]
    .into_iter()
    .map(|(x, y)| builder.junction(x, y))
    .collect();
    for (a, b) in [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)] {
        builder.road(ids[a], ids[b]).expect("known junctions");
    }
    builder.build()
}

/// Junction 0 at the origin and junction 4 at `(10, 0)`, joined by a
/// two-road detour through `(5, 10)` (junction 1) and a three-road straight
/// route through `(3, 0)` and `(7, 0)` (junctions 2 and 3).
///
/// # Panics
///
/// Never; every road joins two existing junctions.
#[must_use]
pub fn detour_map() -> Arc<RoadMap> {
    let mut builder = RoadMapBuilder::new();
    let origin = builder.junction(0.0, 0.0);
    let peak = builder.junction(5.0, 10.0);
    let left = builder.junction(3.0, 0.0);
    let right = builder.junction(7.0, 0.0);
    let end = builder.junction(10.0, 0.0);
    builder
        .road(origin, peak)
        .and_then(|b| b.road(peak, end))
        .and_then(|b| b.road(origin, left))
        .and_then(|b| b.road(left, right))
        .and_then(|b| b.road(right, end))
        .expect("known junctions");
    builder.build()
}

/// `n`×`n` grid with jittered coordinates, roads to the right and downward
/// neighbour, and a diagonal road out of every other cell.
///
/// # Panics
///
/// Never; every road joins two existing junctions.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jittered_grid(n: usize) -> Arc<RoadMap> {
    let mut builder = RoadMapBuilder::new();
    for row in 0..n {
        for col in 0..n {
            let jitter_x = ((row * 7 + col * 3) % 5) as f64;
            let jitter_y = ((row * 2 + col * 5) % 3) as f64;
            builder.junction(col as f64 * 10.0 + jitter_x, row as f64 * 10.0 + jitter_y);
        }
    }
    for row in 0..n {
        for col in 0..n {
            let id = row * n + col;
            if col + 1 < n {
                builder.road(id, id + 1).expect("known junctions");
            }
            if row + 1 < n {
                builder.road(id, id + n).expect("known junctions");
            }
            if col + 1 < n && row + 1 < n && (row + col) % 2 == 0 {
                builder.road(id, id + n + 1).expect("known junctions");
            }
        }
    }
    builder.build()
}

/// Look up junction `id`.
///
/// # Panics
///
/// Panics if `id` is not on the map.
#[must_use]
pub fn at(map: &Arc<RoadMap>, id: usize) -> Junction {
    map.junction(id).expect("junction on map")
}

/// Sum of straight-line lengths along `path`.
#[must_use]
pub fn road_length(path: &[Junction]) -> f64 {
    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Assert `path` runs from `start` to `goal` and every step is a successor
/// of the state before it.
///
/// # Panics
///
/// Panics if any of those conditions fails.
pub fn assert_valid_path<S: State>(path: &[S], start: &S, goal: &S) {
    assert_eq!(path.first(), Some(start), "path must begin at start");
    assert_eq!(path.last(), Some(goal), "path must end at goal");
    for pair in path.windows(2) {
        assert!(
            pair[0].expand().iter().any(|(_, next)| *next == pair[1]),
            "{:?} is not a successor of {:?}",
            pair[1],
            pair[0]
        );
    }
}
