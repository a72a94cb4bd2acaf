//! `TileBoard`: the n×n sliding-tile puzzle.
//!
//! Tiles are numbered `1..n²`; `0` is the blank. Moves are named after the
//! direction the blank travels. Every move costs 1.
//!
//! The solved board reads `1, 2, …, n²-1` row by row with the blank in the
//! bottom-right corner.

use std::fmt;

use wayfarer_kernel::state::State;

use crate::error::WorldError;

/// Largest supported width (`n²` must fit the `u8` tile labels).
pub const MAX_SIZE: usize = 15;

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order of successors.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

/// A sliding-tile configuration. Equality and hashing cover the tiles only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileBoard {
    size: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl TileBoard {
    /// The solved `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidBoard`] if `size` is outside `2..=MAX_SIZE`.
    pub fn solved(size: usize) -> Result<Self, WorldError> {
        check_size(size)?;
        let cells = size * size;
        let mut tiles: Vec<u8> = (1..cells)
            .map(|t| u8::try_from(t).unwrap_or(u8::MAX))
            .collect();
        tiles.push(0);
        Ok(Self {
            size,
            tiles,
            blank: cells - 1,
        })
    }

    /// Build a board from rows of tile labels.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidBoard`] unless the rows form a square of
    /// supported width holding each label `0..n²` exactly once.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, WorldError> {
        let size = rows.len();
        check_size(size)?;

        let mut tiles = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(WorldError::InvalidBoard {
                    detail: format!("row {i} has {} tiles, expected {size}", row.len()),
                });
            }
            tiles.extend_from_slice(row);
        }

        let mut seen = vec![false; tiles.len()];
        for &tile in &tiles {
            let slot = seen.get_mut(usize::from(tile)).ok_or_else(|| WorldError::InvalidBoard {
                detail: format!("tile {tile} out of range for a {size}x{size} board"),
            })?;
            if *slot {
                return Err(WorldError::InvalidBoard {
                    detail: format!("tile {tile} appears twice"),
                });
            }
            *slot = true;
        }

        let blank = tiles.iter().position(|&t| t == 0).ok_or_else(|| {
            WorldError::InvalidBoard {
                detail: "no blank tile".into(),
            }
        })?;
        Ok(Self { size, tiles, blank })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Board after moving the blank, or `None` if the blank is on that edge.
    #[must_use]
    pub fn apply(&self, step: Move) -> Option<Self> {
        let (row, col) = self.blank();
        let target = match step {
            Move::Up if row > 0 => self.blank - self.size,
            Move::Down if row + 1 < self.size => self.blank + self.size,
            Move::Left if col > 0 => self.blank - 1,
            Move::Right if col + 1 < self.size => self.blank + 1,
            _ => return None,
        };
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Self {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// Apply a sequence of moves in order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::IllegalMove`] for the first move that would push
    /// the blank off the board.
    pub fn scramble(&self, moves: &[Move]) -> Result<Self, WorldError> {
        let mut board = self.clone();
        for (index, &step) in moves.iter().enumerate() {
            board = board.apply(step).ok_or_else(|| WorldError::IllegalMove {
                index,
                step: step.to_string(),
            })?;
        }
        Ok(board)
    }

    /// Whether `goal` is reachable from this board.
    ///
    /// Moves preserve the parity of the tile permutation (plus the blank's
    /// row on even widths), so two boards are connected iff those parities
    /// agree.
    #[must_use]
    pub fn can_reach(&self, goal: &TileBoard) -> bool {
        self.size == goal.size && self.parity() == goal.parity()
    }

    fn parity(&self) -> usize {
        let numbered: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        let mut inversions = 0usize;
        for (i, &a) in numbered.iter().enumerate() {
            inversions += numbered[i + 1..].iter().filter(|&&b| b < a).count();
        }
        if self.size % 2 == 1 {
            inversions % 2
        } else {
            (inversions + self.blank().0) % 2
        }
    }

    /// Sum over numbered tiles of the grid distance to their place in `goal`.
    #[must_use]
    pub fn manhattan_distance(&self, goal: &TileBoard) -> u32 {
        let mut home = vec![0usize; goal.tiles.len()];
        for (index, &tile) in goal.tiles.iter().enumerate() {
            if let Some(slot) = home.get_mut(usize::from(tile)) {
                *slot = index;
            }
        }

        let mut distance = 0usize;
        for (index, &tile) in self.tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let target = home.get(usize::from(tile)).copied().unwrap_or(index);
            distance += (index / self.size).abs_diff(target / self.size)
                + (index % self.size).abs_diff(target % self.size);
        }
        u32::try_from(distance).unwrap_or(u32::MAX)
    }

    /// Number of numbered tiles not on their `goal` square.
    #[must_use]
    pub fn misplaced_tiles(&self, goal: &TileBoard) -> u32 {
        let count = self
            .tiles
            .iter()
            .zip(&goal.tiles)
            .filter(|&(&a, &b)| a != 0 && a != b)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

fn check_size(size: usize) -> Result<(), WorldError> {
    if !(2..=MAX_SIZE).contains(&size) {
        return Err(WorldError::InvalidBoard {
            detail: format!("width {size} outside 2..={MAX_SIZE}"),
        });
    }
    Ok(())
}

impl State for TileBoard {
    fn expand(&self) -> Vec<(f64, Self)> {
        Move::ALL
            .iter()
            .filter_map(|&step| self.apply(step))
            .map(|board| (1.0, board))
            .collect()
    }
}

impl fmt::Display for TileBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Manhattan-distance heuristic (admissible).
#[must_use]
pub fn manhattan(state: &TileBoard, goal: &TileBoard) -> f64 {
    f64::from(state.manhattan_distance(goal))
}

/// Misplaced-tiles heuristic (admissible, weaker than Manhattan).
#[must_use]
pub fn misplaced(state: &TileBoard, goal: &TileBoard) -> f64 {
    f64::from(state.misplaced_tiles(goal))
}
