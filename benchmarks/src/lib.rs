//! Shared inputs for the wayfarer benchmark suites.

use wayfarer_harness::worlds::sliding_tile::{Move, TileBoard};

/// A named 8-puzzle instance.
pub struct PuzzleCase {
    pub name: &'static str,
    pub start: TileBoard,
    pub goal: TileBoard,
}

/// Scrambles of increasing length from the solved 3×3 board.
///
/// Scrambles that hit the board edge are skipped, so a case may be
/// shorter than its nominal length.
#[must_use]
pub fn puzzle_cases() -> Vec<PuzzleCase> {
    let Ok(goal) = TileBoard::solved(3) else {
        return Vec::new();
    };
    [("short", 4usize), ("medium", 10), ("long", 16)]
        .into_iter()
        .map(|(name, length)| PuzzleCase {
            name,
            start: walk(&goal, length),
            goal: goal.clone(),
        })
        .collect()
}

/// Deterministic walk of up to `length` moves that never undoes its
/// previous move.
#[must_use]
pub fn walk(from: &TileBoard, length: usize) -> TileBoard {
    let mut board = from.clone();
    let mut last: Option<Move> = None;
    let mut cursor = 0usize;
    for _ in 0..length {
        for offset in 0..Move::ALL.len() {
            let step = Move::ALL[(cursor + offset) % Move::ALL.len()];
            if last.is_some_and(|prev| prev.inverse() == step) {
                continue;
            }
            if let Some(next) = board.apply(step) {
                board = next;
                last = Some(step);
                break;
            }
        }
        cursor += 3;
    }
    board
}
