use serde::Serialize;
use tracing::debug;

use crate::curve;
use crate::geometry::Point;
use crate::resolver::NameResolver;
use crate::topology::{LocationNode, NodeId};

/// Coordinates of the waypoints that resolved, in route order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutePath {
    pub points: Vec<Point>,
    pub nodes: Vec<NodeId>,
}

impl RoutePath {
    /// A path needs at least two points to be drawn.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bundled B-spline samples through the path, empty when not drawable.
    pub fn smooth(&self, beta: f64, samples_per_segment: usize) -> Vec<Point> {
        if !self.is_drawable() {
            return Vec::new();
        }
        curve::bundle(&self.points, beta, samples_per_segment)
    }
}

/// Resolves each waypoint in order and keeps the positions of those that
/// match. Unresolved waypoints are dropped, repeats are kept.
pub fn layout_route<S: AsRef<str>>(resolver: &NameResolver<'_>, waypoints: &[S]) -> RoutePath {
    let mut path = RoutePath::default();
    for waypoint in waypoints {
        let waypoint = waypoint.as_ref();
        match resolver.resolve(waypoint) {
            Some(node) => {
                path.points.push(node.position);
                path.nodes.push(node.id.clone());
            }
            None => debug!(waypoint, "dropping unresolved waypoint"),
        }
    }
    path
}

/// How a node relates to the current route, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Touched by the first waypoint.
    Origin,
    /// Touched by some other waypoint.
    OnRoute,
    #[default]
    Idle,
}

/// Role of `node` for the given route. Uses the alias-free membership test,
/// so several nodes may light up for one waypoint.
pub fn node_role<S: AsRef<str>>(
    resolver: &NameResolver<'_>,
    node: &LocationNode,
    waypoints: &[S],
) -> NodeRole {
    match waypoints.first() {
        Some(start) if resolver.touches(node, start.as_ref()) => NodeRole::Origin,
        _ if waypoints.iter().any(|w| resolver.touches(node, w.as_ref())) => NodeRole::OnRoute,
        _ => NodeRole::Idle,
    }
}
