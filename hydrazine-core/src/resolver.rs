//! Maps free-text place names to topology nodes.
//!
//! Matching is case-insensitive and first-match-wins over the topology's
//! declaration order. A node matches when any of these hold:
//!
//! - its display name contains the text,
//! - the text contains its id,
//! - the alias table pairs its id with a phrase found in the text.
//!
//! There is no scoring. Ambiguity is settled purely by declaration order.

use tracing::trace;

use crate::topology::{LocationNode, Topology};

/// Closed set of `(node id, phrase)` synonyms. Landing zones named in free
/// text resolve to their parent planet even without any shared substring.
pub const ALIASES: &[(&str, &str)] = &[
    ("arc_corp", "area18"),
    ("crusader", "orison"),
    ("microtech", "new babbage"),
    ("hurston", "lorville"),
];

/// Resolves free text against a borrowed topology.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    topology: &'a Topology,
}

impl<'a> NameResolver<'a> {
    pub fn new(topology: &'a Topology) -> Self {
        Self { topology }
    }

    pub fn topology(&self) -> &'a Topology {
        self.topology
    }

    /// Returns the first node matching `text`, or `None` when nothing does.
    pub fn resolve(&self, text: &str) -> Option<&'a LocationNode> {
        let lowered = text.to_lowercase();
        let found = self
            .topology
            .all_nodes()
            .iter()
            .find(|node| substring_match(node, &lowered) || alias_match(node, &lowered));

        trace!(text, node = found.map(|n| n.id.as_str()), "resolve");
        found
    }

    /// Alias-free membership test used for highlighting nodes along a route.
    /// Unlike [`resolve`](Self::resolve), every node that passes is relevant.
    pub fn touches(&self, node: &LocationNode, text: &str) -> bool {
        substring_match(node, &text.to_lowercase())
    }
}

fn substring_match(node: &LocationNode, lowered: &str) -> bool {
    node.name.to_lowercase().contains(lowered) || lowered.contains(&node.id.to_lowercase())
}

fn alias_match(node: &LocationNode, lowered: &str) -> bool {
    ALIASES
        .iter()
        .any(|&(id, phrase)| node.id == id && lowered.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_id(text: &str) -> Option<String> {
        let topo = Topology::stanton();
        NameResolver::new(&topo).resolve(text).map(|n| n.id.clone())
    }

    #[test]
    fn display_name_contains_text() {
        assert_eq!(resolve_id("Yela").as_deref(), Some("yela"));
        assert_eq!(resolve_id("port tress").as_deref(), Some("port_tressler"));
        assert_eq!(resolve_id("MICROTECH").as_deref(), Some("microtech"));
    }

    #[test]
    fn text_contains_id() {
        assert_eq!(
            resolve_id("Dumper's Depot, Daymar outpost").as_deref(),
            Some("daymar")
        );
        assert_eq!(resolve_id("orbit near hur_l2").as_deref(), Some("hur_l2"));
    }

    #[test]
    fn earlier_declaration_wins() {
        // "Everus Harbor (Hurston)" contains the id of Hurston, which is
        // declared before Everus Harbor.
        assert_eq!(
            resolve_id("Everus Harbor (Hurston)").as_deref(),
            Some("hurston")
        );
    }

    #[test]
    fn aliases_resolve_to_parent_planet() {
        assert_eq!(resolve_id("Lorville").as_deref(), Some("hurston"));
        assert_eq!(resolve_id("New Babbage").as_deref(), Some("microtech"));
        assert_eq!(resolve_id("Area18 Plaza").as_deref(), Some("arc_corp"));
        assert_eq!(resolve_id("Orison Platforms").as_deref(), Some("crusader"));
    }

    #[test]
    fn unknown_text_is_not_found() {
        assert_eq!(resolve_id("Pyro Gateway"), None);
        assert_eq!(resolve_id("Terra"), None);
    }

    #[test]
    fn touches_ignores_aliases() {
        let topo = Topology::stanton();
        let resolver = NameResolver::new(&topo);
        let hurston = topo.node_by_id("hurston").unwrap();
        let lorville = topo.node_by_id("lorville").unwrap();
        assert!(!resolver.touches(hurston, "Lorville"));
        assert!(resolver.touches(lorville, "Lorville"));
    }
}
