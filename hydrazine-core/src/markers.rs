//! Fans out shop markers around the node their location resolves to.
//!
//! Items sharing a node take consecutive angular slots, 45° apart, in the
//! order they appear in the input. The ninth item at a node lands back on
//! slot 0's angle.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::build::Component;
use crate::geometry::Point;
use crate::resolver::NameResolver;
use crate::topology::{LocationNode, NodeId};

/// Angular step between consecutive markers at one node.
pub const SLOT_STEP_DEGREES: f64 = 45.0;
/// Distinct slots before angles repeat.
pub const SLOTS_PER_RING: usize = 8;

/// Per-call count of markers already placed at each node.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    counts: HashMap<NodeId, usize>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next free slot at `node` and claims it.
    pub fn claim(&mut self, node: &NodeId) -> usize {
        let count = self.counts.entry(node.clone()).or_insert(0);
        let slot = *count;
        *count += 1;
        slot
    }

    pub fn count(&self, node: &str) -> usize {
        self.counts.get(node).copied().unwrap_or(0)
    }
}

/// Where a resolved item's marker goes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub node_id: NodeId,
    pub slot: usize,
    pub angle_degrees: f64,
    pub position: Point,
    /// Vector from the marker back to the node centre.
    pub tether: Point,
}

/// An item together with its placement, if its location resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker<'a> {
    pub component: &'a Component,
    pub node: Option<&'a LocationNode>,
    pub label: String,
    pub placement: Option<Placement>,
}

impl Marker<'_> {
    pub fn position(&self) -> Option<Point> {
        self.placement.as_ref().map(|p| p.position)
    }
}

/// Places every item with a fresh occupancy count.
pub fn place_markers<'a>(
    resolver: &NameResolver<'a>,
    components: &'a [Component],
) -> Vec<Marker<'a>> {
    place_markers_with(resolver, components, &mut Occupancy::new())
}

/// Places every item, continuing from a caller-owned occupancy count.
pub fn place_markers_with<'a>(
    resolver: &NameResolver<'a>,
    components: &'a [Component],
    occupancy: &mut Occupancy,
) -> Vec<Marker<'a>> {
    components
        .iter()
        .map(|component| {
            let node = resolver.resolve(&component.location);
            let placement = match node {
                Some(node) => Some(place(node, occupancy.claim(&node.id))),
                None => {
                    debug!(location = %component.location, item = %component.name, "no node for item");
                    None
                }
            };
            Marker {
                component,
                node,
                label: component.marker_label(),
                placement,
            }
        })
        .collect()
}

fn place(node: &LocationNode, slot: usize) -> Placement {
    let angle_degrees = slot as f64 * SLOT_STEP_DEGREES;
    let radius = node.category.marker_radius();
    let position = node.position.polar_offset(radius, angle_degrees.to_radians());
    Placement {
        node_id: node.id.clone(),
        slot,
        angle_degrees,
        position,
        tether: -(position - node.position),
    }
}
