//! Directed, labelled knowledge graph used to ground prompts.
//!
//! The graph is `G = (V, E)` where every edge `(from, to, relation)` joins two distinct
//! vertices. It serializes to the `{"vertices": [...], "edges": [[from, to, relation]]}`
//! shape models are prompted with.
//!
//! ```rust
//! use pgraph::TripleGraph;
//!
//! let mut graph = TripleGraph::new();
//! graph.add_vertex("Paris");
//! graph.add_vertex("France");
//! graph.add_edge("Paris", "France", "capital_of").expect("distinct vertices");
//!
//! assert!(graph.contains_edge("Paris", "France", "capital_of"));
//! assert!(graph.add_edge("Paris", "Paris", "is").is_err());
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphErrorKind {
    VertexNotFound,
    EdgeNotFound,
    SelfLoop,
    Serialization,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphError {
    pub kind: GraphErrorKind,
    pub message: String,
}

impl GraphError {
    pub fn new(kind: GraphErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for GraphError {}

/// A directed edge, serialized as a `[from, to, relation]` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "(String, String, String)",
    into = "(String, String, String)"
)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub relation: String,
}

impl Edge {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation: relation.into(),
        }
    }

    fn matches(&self, from: &str, to: &str, relation: &str) -> bool {
        self.from == from && self.to == to && self.relation == relation
    }
}

impl From<(String, String, String)> for Edge {
    fn from((from, to, relation): (String, String, String)) -> Self {
        Self { from, to, relation }
    }
}

impl From<Edge> for (String, String, String) {
    fn from(value: Edge) -> Self {
        (value.from, value.to, value.relation)
    }
}

/// Neither vertices nor edges are de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphDocument")]
pub struct TripleGraph {
    vertices: Vec<String>,
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct GraphDocument {
    vertices: Vec<String>,
    edges: Vec<Edge>,
}

impl TryFrom<GraphDocument> for TripleGraph {
    type Error = GraphError;

    fn try_from(value: GraphDocument) -> Result<Self, Self::Error> {
        let mut graph = Self {
            vertices: value.vertices,
            edges: Vec::with_capacity(value.edges.len()),
        };
        for edge in value.edges {
            graph.add_edge(edge.from, edge.to, edge.relation)?;
        }
        Ok(graph)
    }
}

impl TripleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn add_vertex(&mut self, vertex_id: impl Into<String>) {
        self.vertices.push(vertex_id.into());
    }

    /// Removes the first occurrence of `vertex_id`. Edges touching it are kept.
    pub fn remove_vertex(&mut self, vertex_id: &str) -> Result<String, GraphError> {
        let index = self
            .vertices
            .iter()
            .position(|vertex| vertex == vertex_id)
            .ok_or_else(|| {
                GraphError::new(
                    GraphErrorKind::VertexNotFound,
                    format!("vertex '{vertex_id}' is not in the graph"),
                )
            })?;

        Ok(self.vertices.remove(index))
    }

    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        relation: impl Into<String>,
    ) -> Result<(), GraphError> {
        let edge = Edge::new(from, to, relation);
        if edge.from == edge.to {
            return Err(GraphError::new(
                GraphErrorKind::SelfLoop,
                format!("edge '{}' may not point at itself", edge.from),
            ));
        }

        self.edges.push(edge);
        Ok(())
    }

    /// Removes the first edge equal to `(from, to, relation)`.
    pub fn remove_edge(&mut self, from: &str, to: &str, relation: &str) -> Result<Edge, GraphError> {
        let index = self
            .edges
            .iter()
            .position(|edge| edge.matches(from, to, relation))
            .ok_or_else(|| {
                GraphError::new(
                    GraphErrorKind::EdgeNotFound,
                    format!("edge ({from}, {to}, {relation}) is not in the graph"),
                )
            })?;

        Ok(self.edges.remove(index))
    }

    pub fn contains_vertex(&self, vertex_id: &str) -> bool {
        self.vertices.iter().any(|vertex| vertex == vertex_id)
    }

    pub fn contains_edge(&self, from: &str, to: &str, relation: &str) -> bool {
        self.edges.iter().any(|edge| edge.matches(from, to, relation))
    }

    pub fn to_json_pretty(&self) -> Result<String, GraphError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| GraphError::new(GraphErrorKind::Serialization, err.to_string()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, GraphError> {
        serde_json::from_str(raw)
            .map_err(|err| GraphError::new(GraphErrorKind::Serialization, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> TripleGraph {
        let mut graph = TripleGraph::new();
        graph.add_vertex("Paris");
        graph.add_vertex("France");
        graph
            .add_edge("Paris", "France", "capital_of")
            .expect("distinct vertices");
        graph
    }

    #[test]
    fn vertices_are_not_deduplicated_and_removal_takes_first() {
        let mut graph = sample();
        graph.add_vertex("Paris");
        assert_eq!(graph.vertices(), ["Paris", "France", "Paris"]);

        assert_eq!(graph.remove_vertex("Paris").expect("present"), "Paris");
        assert_eq!(graph.vertices(), ["France", "Paris"]);
    }

    #[test]
    fn removing_missing_items_is_an_error() {
        let mut graph = sample();

        let err = graph.remove_vertex("Berlin").expect_err("missing vertex");
        assert_eq!(err.kind, GraphErrorKind::VertexNotFound);

        let err = graph
            .remove_edge("France", "Paris", "capital_of")
            .expect_err("direction matters");
        assert_eq!(err.kind, GraphErrorKind::EdgeNotFound);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut graph = sample();
        let err = graph.add_edge("Paris", "Paris", "is").expect_err("self loop");
        assert_eq!(err.kind, GraphErrorKind::SelfLoop);
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn duplicate_edges_are_kept_and_removed_one_at_a_time() {
        let mut graph = sample();
        graph
            .add_edge("Paris", "France", "capital_of")
            .expect("distinct vertices");
        assert_eq!(graph.edges().len(), 2);

        graph
            .remove_edge("Paris", "France", "capital_of")
            .expect("present");
        assert!(graph.contains_edge("Paris", "France", "capital_of"));
    }

    #[test]
    fn serializes_edges_as_triples() {
        let value = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(
            value,
            json!({
                "vertices": ["Paris", "France"],
                "edges": [["Paris", "France", "capital_of"]]
            })
        );

        let pretty = sample().to_json_pretty().expect("serialize");
        assert_eq!(TripleGraph::from_json_str(&pretty).expect("parse"), sample());
    }

    #[test]
    fn parsing_rejects_self_loops() {
        let raw = r#"{"vertices": ["Paris"], "edges": [["Paris", "Paris", "is"]]}"#;

        let err = TripleGraph::from_json_str(raw).expect_err("self loop");
        assert_eq!(err.kind, GraphErrorKind::Serialization);
        assert!(err.message.contains("may not point at itself"));
    }
}
