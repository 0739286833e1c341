//! Dijkstra single-source shortest path
//!
//! Binary-heap relaxation without decrease-key: improving a distance
//! pushes a fresh heap entry and the superseded one is skipped when it
//! surfaces. The heap is seeded with every vertex, so popping an
//! infinite distance means everything still queued is unreachable and
//! the loop can stop early.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::Result;
use crate::graph::container::LabeledGraph;
use crate::graph::types::{PathResult, Weight};

const UNREACHABLE: Weight = Weight::MAX;

/// Min-heap entry ordered by accumulated distance, then vertex id.
///
/// The secondary key makes equal-distance pops resolve in lexicographic
/// id order, so tie-breaking between equal-cost paths is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry<'a> {
    vertex: &'a str,
    distance: Weight,
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(other.vertex))
    }
}

/// Compute the shortest path from `from` to `to` over non-negative edge
/// weights.
///
/// An unreachable target is a normal outcome reported through
/// [`PathResult::found`] and a `None` cost, not an error. When `from`
/// and `to` are the same vertex the cost is 0 and the path is that
/// single vertex. Results over negative weights are unspecified.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn shortest_path<P>(graph: &LabeledGraph<P>, from: &str, to: &str) -> Result<PathResult> {
    graph.record(from)?;
    graph.record(to)?;

    let mut dist: HashMap<&str, Weight> = HashMap::new();
    let mut prev: HashMap<&str, &str> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<'_>>> = BinaryHeap::new();

    for id in graph.vertex_ids() {
        let initial = if id == from { 0 } else { UNREACHABLE };
        dist.insert(id, initial);
        heap.push(Reverse(HeapEntry {
            vertex: id,
            distance: initial,
        }));
    }

    let mut relaxed = 0usize;
    while let Some(Reverse(HeapEntry { vertex, distance })) = heap.pop() {
        if distance == UNREACHABLE {
            break;
        }

        let best = dist.get(vertex).copied().unwrap_or(UNREACHABLE);
        if distance > best {
            // Stale entry superseded by a later improvement
            continue;
        }

        let record = graph.record(vertex)?;
        for (neighbor, weight) in &record.edges {
            // Saturation keeps an absurdly large weight from wrapping;
            // a saturated distance simply never beats a finite one.
            let alt = distance.saturating_add(*weight);
            let current = dist.get(neighbor.as_str()).copied().unwrap_or(UNREACHABLE);
            if alt < current {
                dist.insert(neighbor.as_str(), alt);
                prev.insert(neighbor.as_str(), vertex);
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor.as_str(),
                    distance: alt,
                }));
                relaxed += 1;
            }
        }
    }
    tracing::trace!(relaxed, "relaxation finished");

    let end_cost = dist.get(to).copied().unwrap_or(UNREACHABLE);
    if end_cost == UNREACHABLE {
        return Ok(PathResult::unreachable(from, to));
    }

    let mut path = vec![to.to_string()];
    let mut current = to;
    while current != from {
        match prev.get(current) {
            Some(&pred) => {
                path.push(pred.to_string());
                current = pred;
            }
            None => break,
        }
    }
    path.reverse();

    Ok(PathResult::reached(from, to, end_cost, path))
}
