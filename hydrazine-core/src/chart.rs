//! Everything a map renderer needs for one recommendation, in one value.

use serde::Serialize;
use tracing::instrument;

use crate::build::{Component, LoadoutBuild};
use crate::curve::DEFAULT_BETA;
use crate::geometry::Point;
use crate::markers::{Marker, place_markers};
use crate::resolver::NameResolver;
use crate::route::{NodeRole, RoutePath, layout_route, node_role};
use crate::topology::{NodeCategory, Topology};

/// Chart composition options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    /// Bundle tension for the route curve.
    pub beta: f64,
    /// Curve samples per spline segment.
    pub samples_per_segment: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            samples_per_segment: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: NodeCategory,
    pub position: Point,
    pub radius: f64,
    pub label_offset: f64,
    pub role: NodeRole,
    /// The route lists this node's display name verbatim.
    pub labelled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart<'a> {
    pub nodes: Vec<NodeView<'a>>,
    pub edges: Vec<(Point, Point)>,
    pub route: RoutePath,
    /// Sampled route curve; empty when fewer than two waypoints resolved.
    pub curve: Vec<Point>,
    pub markers: Vec<Marker<'a>>,
}

impl<'a> Chart<'a> {
    #[instrument(skip_all, fields(waypoints = route.len(), components = components.len()))]
    pub fn compose<S: AsRef<str>>(
        topology: &'a Topology,
        route: &[S],
        components: &'a [Component],
        options: ChartOptions,
    ) -> Self {
        let resolver = NameResolver::new(topology);

        let nodes = topology
            .all_nodes()
            .iter()
            .map(|node| NodeView {
                id: &node.id,
                name: &node.name,
                category: node.category,
                position: node.position,
                radius: node.category.node_radius(),
                label_offset: node.category.label_offset(),
                role: node_role(&resolver, node, route),
                labelled: route.iter().any(|w| w.as_ref() == node.name),
            })
            .collect();

        let path = layout_route(&resolver, route);
        let curve = path.smooth(options.beta, options.samples_per_segment);

        Self {
            nodes,
            edges: topology.edge_segments(),
            route: path,
            curve,
            markers: place_markers(&resolver, components),
        }
    }

    /// Chart for a decoded build.
    pub fn for_build(topology: &'a Topology, build: &'a LoadoutBuild, options: ChartOptions) -> Self {
        Self::compose(topology, &build.route, &build.components, options)
    }

    /// Items whose location did not resolve to any node.
    pub fn unplaced(&self) -> impl Iterator<Item = &Marker<'a>> {
        self.markers.iter().filter(|m| m.placement.is_none())
    }
}
