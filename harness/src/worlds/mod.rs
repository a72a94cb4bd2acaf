//! Concrete state spaces for the harness runner.

pub mod road_map;
pub mod sliding_tile;
