//! Labeled directed graph container and algorithms
//!
//! Provides the graph data structure and the operations over it:
//! - `LabeledGraph` for vertex/edge mutation and adjacency queries
//! - DFS/BFS visitor traversals
//! - Dijkstra shortest path over non-negative weights

pub mod algos;
pub mod container;
pub mod types;

pub use algos::{breadth_first, depth_first, shortest_path};
pub use container::LabeledGraph;
pub use types::{PathResult, Weight, NO_EDGE};
