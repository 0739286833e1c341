//! Traversal and path-finding algorithms over a labeled graph
//!
//! All algorithms validate their start/end vertices up front and fail
//! with `UnknownVertex` before touching any traversal state.

pub mod dijkstra;
pub mod traversal;

pub use dijkstra::shortest_path;
pub use traversal::{breadth_first, depth_first};
