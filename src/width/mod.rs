//! Corridor width estimation.

mod parallel;

pub use parallel::{average_sampled_distance, find_parallel_edge};
