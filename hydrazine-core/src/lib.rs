//! Location resolution and route layout for recommended ship builds.
//!
//! A recommender (see [`RecommendationService`]) produces a [`LoadoutBuild`]:
//! a list of components, each tagged with a free-text shop location, and a
//! route given as free-text waypoints. This crate interprets that text against
//! a fixed [`Topology`]:
//!
//! - [`NameResolver`] maps free text to at most one node,
//! - [`layout_route`] turns waypoints into an ordered coordinate path,
//! - [`place_markers`] fans out shop markers around their resolved nodes,
//! - [`Chart`] bundles all of it for a renderer.
//!
//! # Example
//!
//! ```
//! use hydrazine_core::{NameResolver, Topology, layout_route};
//!
//! let topology = Topology::stanton();
//! let resolver = NameResolver::new(&topology);
//!
//! let path = layout_route(&resolver, &["Seraphim Station", "Somewhere else", "Lorville"]);
//! assert_eq!(path.nodes, vec!["seraphim", "hurston"]);
//! assert!(path.is_drawable());
//! ```

mod build;
mod catalog;
mod chart;
pub mod curve;
mod error;
mod geometry;
mod markers;
mod offline;
mod resolver;
mod route;
pub mod serde_helpers;
mod service;
mod topology;

pub use build::{BuildPayload, Component, LoadoutBuild, MissionRequest, Priority, decode_build};
pub use catalog::{Ship, ShipCatalog};
pub use chart::{Chart, ChartOptions, NodeView};
pub use error::{OfflineError, TopologyError};
pub use geometry::{LAYOUT_HEIGHT, LAYOUT_WIDTH, Point};
pub use markers::{
    Marker, Occupancy, Placement, SLOT_STEP_DEGREES, SLOTS_PER_RING, place_markers,
    place_markers_with,
};
pub use offline::OfflineLibrary;
pub use resolver::{ALIASES, NameResolver};
pub use route::{NodeRole, RoutePath, layout_route, node_role};
pub use service::RecommendationService;
pub use topology::{Edge, LocationNode, NodeCategory, NodeId, Topology};
