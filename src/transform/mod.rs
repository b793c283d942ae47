//! Polyline stitching and corridor grouping transforms.

mod cluster;
mod merge;

pub use cluster::cluster_paths;
pub use merge::merge_fragments;
