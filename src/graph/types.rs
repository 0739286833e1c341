use serde::Serialize;

/// Edge weight for a directed edge.
///
/// Negative values are accepted by the container without validation;
/// shortest-path results over negative weights are unspecified.
pub type Weight = i64;

/// Sentinel returned by [`cost`](crate::graph::LabeledGraph::cost) when
/// both endpoints exist but no directed edge connects them. Absence of
/// an edge is a normal query result, not an error.
pub const NO_EDGE: Weight = -1;

/// Result of a shortest-path query between two vertices
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    /// Total path cost. `None` when the target is unreachable — the
    /// unreachable state is never encoded as a magic cost value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Weight>,
    /// Vertex identifiers in start-to-end order; empty when unreachable
    pub path: Vec<String>,
    /// Number of edges on the path
    pub path_length: usize,
}

impl PathResult {
    pub(crate) fn unreachable(from: &str, to: &str) -> Self {
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            cost: None,
            path: Vec::new(),
            path_length: 0,
        }
    }

    pub(crate) fn reached(from: &str, to: &str, cost: Weight, path: Vec<String>) -> Self {
        let path_length = path.len().saturating_sub(1);
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            found: true,
            cost: Some(cost),
            path,
            path_length,
        }
    }

    /// Convert the result to JSON for machine consumption
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::json!({
            "from": self.from,
            "to": self.to,
            "found": self.found,
            "path": self.path,
            "path_length": self.path_length,
        });

        // Cost is omitted entirely when unreachable, never encoded as a
        // sentinel value
        if let Some(cost) = self.cost {
            value["cost"] = serde_json::json!(cost);
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_result_has_no_cost() {
        let result = PathResult::unreachable("a", "z");
        assert!(!result.found);
        assert_eq!(result.cost, None);
        assert!(result.path.is_empty());
        assert_eq!(result.path_length, 0);
    }

    #[test]
    fn test_reached_result_counts_edges() {
        let path = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let result = PathResult::reached("a", "c", 2, path);
        assert!(result.found);
        assert_eq!(result.cost, Some(2));
        assert_eq!(result.path_length, 2);
    }

    #[test]
    fn test_single_vertex_path_has_zero_edges() {
        let result = PathResult::reached("a", "a", 0, vec!["a".to_string()]);
        assert_eq!(result.path_length, 0);
        assert_eq!(result.cost, Some(0));
    }

    #[test]
    fn test_to_json_shape() {
        let result = PathResult::reached("a", "b", 5, vec!["a".to_string(), "b".to_string()]);
        let json = result.to_json();
        assert_eq!(json["found"], true);
        assert_eq!(json["cost"], 5);
        assert_eq!(json["path_length"], 1);
    }
}
