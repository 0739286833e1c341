//! Depth-first and breadth-first visitor traversals
//!
//! Both traversals share the same policy: neighbors are pushed/enqueued
//! regardless of visited status, and the visited check happens when an
//! identifier comes back off the stack/queue. A vertex can therefore sit
//! in the frontier more than once; later occurrences are silently
//! skipped. Neighbor expansion follows the adjacency map's sorted
//! iteration order, so the full visitation order is deterministic.

use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::container::LabeledGraph;

/// Depth-first traversal from `start`, invoking `visit(id, payload)`
/// once per reachable vertex.
///
/// Uses an explicit stack rather than recursion, so call depth stays
/// constant regardless of graph size.
#[tracing::instrument(skip(graph, visit), fields(start = %start))]
pub fn depth_first<P, F>(graph: &LabeledGraph<P>, start: &str, mut visit: F) -> Result<()>
where
    F: FnMut(&str, &P),
{
    graph.record(start)?;

    let mut stack = vec![start];
    let mut visited: HashSet<&str> = HashSet::new();

    while let Some(id) = stack.pop() {
        if visited.contains(id) {
            continue;
        }

        let record = graph.record(id)?;
        visit(id, &record.payload);
        visited.insert(id);

        for neighbor in record.edges.keys() {
            stack.push(neighbor);
        }
    }

    tracing::trace!(visited = visited.len(), "depth-first traversal complete");
    Ok(())
}

/// Breadth-first traversal from `start`, invoking `visit(id, payload)`
/// once per reachable vertex, in level order. Vertices unreachable from
/// `start` are never visited.
#[tracing::instrument(skip(graph, visit), fields(start = %start))]
pub fn breadth_first<P, F>(graph: &LabeledGraph<P>, start: &str, mut visit: F) -> Result<()>
where
    F: FnMut(&str, &P),
{
    graph.record(start)?;

    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        if visited.contains(id) {
            continue;
        }

        visited.insert(id);
        let record = graph.record(id)?;
        visit(id, &record.payload);

        for neighbor in record.edges.keys() {
            queue.push_back(neighbor);
        }
    }

    tracing::trace!(visited = visited.len(), "breadth-first traversal complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    /// root -> mid -> leaf, plus a second branch and an isolated vertex
    fn sample() -> LabeledGraph<&'static str> {
        let mut graph = LabeledGraph::new();
        for (id, payload) in [
            ("a", "root"),
            ("b", "mid"),
            ("c", "mid"),
            ("d", "leaf"),
            ("z", "isolated"),
        ] {
            graph.add_vertex(id, payload).unwrap();
        }
        graph.add_directed_edge("a", "b", 1).unwrap();
        graph.add_directed_edge("a", "c", 1).unwrap();
        graph.add_directed_edge("b", "d", 1).unwrap();
        graph
    }

    fn collect_dfs(graph: &LabeledGraph<&str>, start: &str) -> Vec<String> {
        let mut order = Vec::new();
        depth_first(graph, start, |id, _| order.push(id.to_string())).unwrap();
        order
    }

    fn collect_bfs(graph: &LabeledGraph<&str>, start: &str) -> Vec<String> {
        let mut order = Vec::new();
        breadth_first(graph, start, |id, _| order.push(id.to_string())).unwrap();
        order
    }

    #[test]
    fn test_dfs_visits_reachable_set_exactly_once() {
        let graph = sample();
        let order = collect_dfs(&graph, "a");
        assert_eq!(order.len(), 4);
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_dfs_deterministic_order() {
        let graph = sample();
        // Neighbors are pushed in ascending order, so the stack pops the
        // lexicographically greatest branch first.
        assert_eq!(collect_dfs(&graph, "a"), vec!["a", "c", "b", "d"]);
        assert_eq!(collect_dfs(&graph, "a"), collect_dfs(&graph, "a"));
    }

    #[test]
    fn test_bfs_level_order() {
        let graph = sample();
        assert_eq!(collect_bfs(&graph, "a"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_bfs_never_visits_isolated_vertex() {
        let graph = sample();
        let order = collect_bfs(&graph, "a");
        assert!(!order.contains(&"z".to_string()));
    }

    #[test]
    fn test_traversal_from_isolated_vertex_visits_only_itself() {
        let graph = sample();
        assert_eq!(collect_dfs(&graph, "z"), vec!["z"]);
        assert_eq!(collect_bfs(&graph, "z"), vec!["z"]);
    }

    #[test]
    fn test_cycle_visited_once() {
        let mut graph = LabeledGraph::new();
        graph.add_vertex("a", ()).unwrap();
        graph.add_vertex("b", ()).unwrap();
        graph.add_directed_edge("a", "b", 1).unwrap();
        graph.add_directed_edge("b", "a", 1).unwrap();

        let mut count = 0;
        depth_first(&graph, "a", |_, _| count += 1).unwrap();
        assert_eq!(count, 2);

        count = 0;
        breadth_first(&graph, "a", |_, _| count += 1).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_callback_receives_payload() {
        let graph = sample();
        let mut payloads = Vec::new();
        breadth_first(&graph, "b", |_, payload| payloads.push(*payload)).unwrap();
        assert_eq!(payloads, vec!["mid", "leaf"]);
    }

    #[test]
    fn test_unknown_start_fails() {
        let graph = sample();
        let err = depth_first(&graph, "zz", |_, _| {}).unwrap_err();
        assert_eq!(err, GraphError::unknown("zz"));
        let err = breadth_first(&graph, "zz", |_, _| {}).unwrap_err();
        assert_eq!(err, GraphError::unknown("zz"));
    }

    #[test]
    fn test_self_loop_visited_once() {
        let mut graph = LabeledGraph::new();
        graph.add_vertex("a", ()).unwrap();
        graph.add_directed_edge("a", "a", 1).unwrap();

        let mut count = 0;
        breadth_first(&graph, "a", |_, _| count += 1).unwrap();
        assert_eq!(count, 1);
    }
}
