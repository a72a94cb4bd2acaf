//! Wayfarer Search: four interchangeable strategies over one state contract.
//!
//! This crate provides the algorithm layer. It depends only on
//! `wayfarer_kernel`; it does NOT depend on `wayfarer_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfarer_kernel  ←  wayfarer_search  ←  wayfarer_harness
//! (state, frontier)   (algorithms)         (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`contract::Search`] -- lifecycle shared by every algorithm (`clear`, `search`, results)
//! - [`bfs::BreadthFirstSearch`] -- FIFO frontier, minimum edge count
//! - [`ids::IterativeDeepeningSearch`] -- LIFO frontier with a growing depth budget
//! - [`astar::AStarSearch`] -- `(g + h, h)` priority frontier
//! - [`bidirectional::BidirectionalAStarSearch`] -- two A* halves meeting in the middle
//! - [`metrics::SearchMetrics`] -- elapsed time, peak frontier, expanded and admitted counts
//! - [`policy::SearchPolicy`] -- depth and expansion limits

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod astar;
pub mod bfs;
pub mod bidirectional;
pub mod contract;
pub mod error;
pub mod heuristic;
pub mod ids;
pub mod metrics;
pub mod policy;
