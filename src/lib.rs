//! Skein Library
//!
//! An in-memory labeled directed graph keyed by string vertex
//! identifiers, with per-vertex payload data, per-edge integer weights,
//! and visitor-driven traversal (depth-first, breadth-first, Dijkstra
//! shortest path).

pub mod error;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{LabeledGraph, PathResult, Weight, NO_EDGE};
