//! `RoadMap`: planar junctions joined by two-way roads.
//!
//! Junction states share one immutable map through an `Arc`; equality and
//! hashing use the junction id only. Road cost is the Euclidean length of
//! the segment, so [`euclidean`] is an admissible heuristic.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use wayfarer_kernel::state::State;

use crate::error::WorldError;

/// Immutable road network.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    coords: Vec<(f64, f64)>,
    roads: Vec<Vec<usize>>,
}

/// Incremental builder for a [`RoadMap`].
#[derive(Debug, Clone, Default)]
pub struct RoadMapBuilder {
    map: RoadMap,
}

impl RoadMapBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a junction and return its id.
    pub fn junction(&mut self, x: f64, y: f64) -> usize {
        self.map.coords.push((x, y));
        self.map.roads.push(Vec::new());
        self.map.coords.len() - 1
    }

    /// Join two junctions with a two-way road. Duplicate roads are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownJunction`] if either id was never added,
    /// or [`WorldError::SelfLoop`] if `a == b`.
    pub fn road(&mut self, a: usize, b: usize) -> Result<&mut Self, WorldError> {
        let count = self.map.coords.len();
        for id in [a, b] {
            if id >= count {
                return Err(WorldError::UnknownJunction { id });
            }
        }
        if a == b {
            return Err(WorldError::SelfLoop { id: a });
        }
        if !self.map.roads[a].contains(&b) {
            self.map.roads[a].push(b);
            self.map.roads[b].push(a);
        }
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Arc<RoadMap> {
        Arc::new(self.map)
    }
}

impl RoadMap {
    /// Number of junctions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Junction `id` as a search state.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownJunction`] if `id` is out of range.
    pub fn junction(self: &Arc<Self>, id: usize) -> Result<Junction, WorldError> {
        if id >= self.coords.len() {
            return Err(WorldError::UnknownJunction { id });
        }
        Ok(Junction {
            id,
            map: Arc::clone(self),
        })
    }

    /// Bounding box `((min_x, min_y), (max_x, max_y))`, `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let (&first, rest) = self.coords.split_first()?;
        Some(rest.iter().fold((first, first), |(lo, hi), &(x, y)| {
            ((lo.0.min(x), lo.1.min(y)), (hi.0.max(x), hi.1.max(y)))
        }))
    }

    /// Connected-component label for every junction, numbered from 0 in
    /// order of first appearance.
    #[must_use]
    pub fn components(&self) -> Vec<usize> {
        let mut labels = vec![usize::MAX; self.coords.len()];
        let mut next = 0;
        for seed in 0..self.coords.len() {
            if labels[seed] != usize::MAX {
                continue;
            }
            labels[seed] = next;
            let mut stack = vec![seed];
            while let Some(id) = stack.pop() {
                for &neighbour in &self.roads[id] {
                    if labels[neighbour] == usize::MAX {
                        labels[neighbour] = next;
                        stack.push(neighbour);
                    }
                }
            }
            next += 1;
        }
        labels
    }

    fn distance(&self, a: usize, b: usize) -> f64 {
        let (ax, ay) = self.coords[a];
        let (bx, by) = self.coords[b];
        (ax - bx).hypot(ay - by)
    }
}

/// A junction of a shared [`RoadMap`].
#[derive(Clone)]
pub struct Junction {
    id: usize,
    map: Arc<RoadMap>,
}

impl Junction {
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// `(x, y)` position.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        self.map.coords[self.id]
    }

    /// Straight-line distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Junction) -> f64 {
        let (ax, ay) = self.position();
        let (bx, by) = other.position();
        (ax - bx).hypot(ay - by)
    }
}

impl PartialEq for Junction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Junction {}

impl Hash for Junction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.position();
        write!(f, "Junction({}, {x}, {y})", self.id)
    }
}

impl State for Junction {
    fn expand(&self) -> Vec<(f64, Self)> {
        self.map.roads[self.id]
            .iter()
            .map(|&to| {
                (
                    self.map.distance(self.id, to),
                    Junction {
                        id: to,
                        map: Arc::clone(&self.map),
                    },
                )
            })
            .collect()
    }
}

/// Straight-line distance heuristic (admissible for Euclidean road costs).
#[must_use]
pub fn euclidean(state: &Junction, goal: &Junction) -> f64 {
    state.distance(goal)
}
