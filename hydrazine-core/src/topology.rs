//! The fixed star system map: named nodes and the static links between them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TopologyError;
use crate::geometry::Point;

/// Stable short identifier of a node, unique within a topology.
pub type NodeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeCategory {
    Planet,
    Station,
    Moon,
}

impl NodeCategory {
    /// Radius of the node circle.
    pub fn node_radius(self) -> f64 {
        match self {
            NodeCategory::Planet => 10.0,
            NodeCategory::Station | NodeCategory::Moon => 5.0,
        }
    }

    /// Vertical distance from the node centre to its label baseline.
    pub fn label_offset(self) -> f64 {
        match self {
            NodeCategory::Planet => 22.0,
            NodeCategory::Station | NodeCategory::Moon => 16.0,
        }
    }

    /// Distance at which shop markers fan out around the node.
    pub fn marker_radius(self) -> f64 {
        match self {
            NodeCategory::Planet => 18.0,
            NodeCategory::Station | NodeCategory::Moon => 12.0,
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeCategory::Planet => f.pad("planet"),
            NodeCategory::Station => f.pad("station"),
            NodeCategory::Moon => f.pad("moon"),
        }
    }
}

/// A named location on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationNode {
    pub id: NodeId,
    pub name: String,
    #[serde(flatten)]
    pub position: Point,
    #[serde(alias = "type")]
    pub category: NodeCategory,
}

/// Static background link between two nodes. Carries no weight or direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Deserialize)]
struct TopologyRecord {
    nodes: Vec<LocationNode>,
    #[serde(default)]
    edges: Vec<Edge>,
}

/// Read-only set of nodes and edges, in declaration order.
///
/// Declaration order matters: name resolution scans nodes front to back and
/// the first match wins.
#[derive(Debug, Clone)]
pub struct Topology {
    nodes: Vec<LocationNode>,
    edges: Vec<Edge>,
    index: HashMap<NodeId, usize>,
}

impl Topology {
    /// Builds a topology, rejecting duplicate ids and dangling edges.
    pub fn new(nodes: Vec<LocationNode>, edges: Vec<Edge>) -> Result<Self, TopologyError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(TopologyError::DuplicateNode(node.id.clone()));
            }
        }

        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if !index.contains_key(endpoint) {
                    return Err(TopologyError::UnknownEndpoint {
                        source_id: edge.source.clone(),
                        target_id: edge.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        Ok(Self {
            nodes,
            edges,
            index,
        })
    }

    /// Parses `{"nodes": [{id, name, x, y, category}], "edges": [{source, target}]}`.
    pub fn from_json(json: &str) -> Result<Self, TopologyError> {
        let record: TopologyRecord = serde_json::from_str(json)?;
        Self::new(record.nodes, record.edges)
    }

    /// The built-in Stanton system map.
    pub fn stanton() -> Self {
        let nodes: Vec<LocationNode> = STANTON_NODES
            .iter()
            .map(|&(id, name, x, y, category)| LocationNode {
                id: id.to_string(),
                name: name.to_string(),
                position: Point::new(x, y),
                category,
            })
            .collect();
        let edges = STANTON_EDGES
            .iter()
            .map(|&(source, target)| Edge {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();

        Self {
            nodes,
            edges,
            index,
        }
    }

    pub fn all_nodes(&self) -> &[LocationNode] {
        &self.nodes
    }

    pub fn all_edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_by_id(&self, id: &str) -> Option<&LocationNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges as coordinate pairs for background drawing.
    pub fn edge_segments(&self) -> Vec<(Point, Point)> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let source = self.node_by_id(&edge.source);
                let target = self.node_by_id(&edge.target);
                match (source, target) {
                    (Some(s), Some(t)) => Some((s.position, t.position)),
                    _ => {
                        warn!(from = %edge.source, to = %edge.target, "skipping dangling edge");
                        None
                    }
                }
            })
            .collect()
    }

    /// Location picker filter: nodes whose name or id contains `query`,
    /// case-insensitively, in declaration order. An empty query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&LocationNode> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.nodes
            .iter()
            .filter(|n| {
                n.name.to_lowercase().contains(&needle) || n.id.to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect()
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::stanton()
    }
}

use NodeCategory::{Moon, Planet, Station};

const STANTON_NODES: &[(&str, &str, f64, f64, NodeCategory)] = &[
    // Planets
    ("crusader", "Crusader", 200.0, 200.0, Planet),
    ("hurston", "Hurston", 600.0, 150.0, Planet),
    ("microtech", "microTech", 750.0, 400.0, Planet),
    ("arc_corp", "ArcCorp", 100.0, 400.0, Planet),
    // Landing zones
    ("orison", "Orison", 215.0, 215.0, Station),
    ("lorville", "Lorville", 615.0, 165.0, Station),
    ("new_babbage", "New Babbage", 765.0, 415.0, Station),
    ("area18", "Area18", 115.0, 415.0, Station),
    // Orbital stations
    ("seraphim", "Seraphim Station", 235.0, 175.0, Station),
    ("everus_harbor", "Everus Harbor", 635.0, 125.0, Station),
    ("port_tressler", "Port Tressler", 785.0, 375.0, Station),
    ("bajini", "Bajini Point", 135.0, 375.0, Station),
    // Crusader
    ("cellin", "Cellin", 255.0, 225.0, Moon),
    ("yela", "Yela", 175.0, 185.0, Moon),
    ("daymar", "Daymar", 245.0, 255.0, Moon),
    ("grim_hex", "GrimHEX", 165.0, 165.0, Station),
    // Hurston
    ("arial", "Arial", 645.0, 185.0, Moon),
    ("aberdeen", "Aberdeen", 585.0, 105.0, Moon),
    ("magda", "Magda", 655.0, 135.0, Moon),
    ("ita", "Ita", 565.0, 185.0, Moon),
    // ArcCorp
    ("wala", "Wala", 75.0, 375.0, Moon),
    ("lyria", "Lyria", 135.0, 445.0, Moon),
    // microTech
    ("calliope", "Calliope", 725.0, 365.0, Moon),
    ("clio", "Clio", 795.0, 435.0, Moon),
    ("euterpe", "Euterpe", 825.0, 385.0, Moon),
    // Lagrange points
    ("hur_l1", "HUR-L1", 505.0, 155.0, Station),
    ("hur_l2", "HUR-L2", 655.0, 255.0, Station),
    ("cru_l1", "CRU-L1", 355.0, 205.0, Station),
    ("arc_l1", "ARC-L1", 205.0, 355.0, Station),
    ("mic_l1", "MIC-L1", 605.0, 355.0, Station),
];

const STANTON_EDGES: &[(&str, &str)] = &[
    ("crusader", "hurston"),
    ("hurston", "microtech"),
    ("microtech", "arc_corp"),
    ("arc_corp", "crusader"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, category: NodeCategory) -> LocationNode {
        LocationNode {
            id: id.to_string(),
            name: id.to_uppercase(),
            position: Point::default(),
            category,
        }
    }

    #[test]
    fn stanton_ids_are_unique() {
        let stanton = Topology::stanton();
        let rebuilt = Topology::new(stanton.all_nodes().to_vec(), stanton.all_edges().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(stanton.len(), 30);
        assert_eq!(stanton.all_edges().len(), 4);
    }

    #[test]
    fn node_by_id_hit_and_miss() {
        let stanton = Topology::stanton();
        assert_eq!(stanton.node_by_id("yela").unwrap().name, "Yela");
        assert!(stanton.node_by_id("pyro").is_none());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let result = Topology::new(
            vec![node("a", NodeCategory::Moon), node("a", NodeCategory::Planet)],
            vec![],
        );
        assert!(matches!(result, Err(TopologyError::DuplicateNode(id)) if id == "a"));
    }

    #[test]
    fn dangling_edge_rejected() {
        let result = Topology::new(
            vec![node("a", NodeCategory::Moon)],
            vec![Edge {
                source: "a".to_string(),
                target: "b".to_string(),
            }],
        );
        match result {
            Err(TopologyError::UnknownEndpoint { missing, .. }) => assert_eq!(missing, "b"),
            other => panic!("expected UnknownEndpoint, got {:?}", other),
        }
    }

    #[test]
    fn from_json_accepts_flat_coordinates() {
        let json = r#"{
            "nodes": [
                {"id": "p", "name": "Prime", "x": 1, "y": 2, "category": "Planet"},
                {"id": "m", "name": "Minor", "x": 3.5, "y": 4, "type": "Moon"}
            ],
            "edges": [{"source": "p", "target": "m"}]
        }"#;
        let topo = Topology::from_json(json).unwrap();
        assert_eq!(topo.node_by_id("p").unwrap().position, Point::new(1.0, 2.0));
        assert_eq!(topo.node_by_id("m").unwrap().category, NodeCategory::Moon);
        assert_eq!(
            topo.edge_segments(),
            vec![(Point::new(1.0, 2.0), Point::new(3.5, 4.0))]
        );
    }

    #[test]
    fn search_matches_name_or_id() {
        let stanton = Topology::stanton();
        let hits: Vec<&str> = stanton
            .search("hur", 8)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(hits, vec!["hurston", "hur_l1", "hur_l2"]);

        assert!(stanton.search("", 8).is_empty());
        assert_eq!(stanton.search("a", 8).len(), 8);
    }

    #[test]
    fn planet_radii_exceed_others() {
        assert!(NodeCategory::Planet.marker_radius() > NodeCategory::Moon.marker_radius());
        assert_eq!(
            NodeCategory::Station.marker_radius(),
            NodeCategory::Moon.marker_radius()
        );
    }
}
