//! Wayfarer Kernel: the search-graph vocabulary shared by every algorithm.
//!
//! # API Surface
//!
//! - [`state::State`] -- the contract a concrete search-graph vertex implements
//! - [`tree::SearchTree`] -- per-run arena of generated nodes with parent links
//! - [`frontier::Frontier`] -- uniform container over FIFO, LIFO and priority orderings
//!
//! # Module Dependency Direction
//!
//! `state` ← `tree`, `error` ← `frontier`
//!
//! One-way only. No cycles. The kernel knows nothing about algorithms.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frontier;
pub mod state;
pub mod tree;
