//! Wayfarer Harness: concrete worlds and run orchestration for the search engine.
//!
//! The harness selects an algorithm, runs it through the `Search` contract
//! and packages the metrics as a report with a deterministic digest.
//!
//! The harness does NOT implement search logic; it delegates to
//! `wayfarer_search`. Worlds provide states and heuristics only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod report;
pub mod runner;
pub mod worlds;
