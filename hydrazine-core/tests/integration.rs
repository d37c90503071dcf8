//! Resolution, route layout and marker placement against the Stanton map.

use hydrazine_core::{
    Chart, ChartOptions, Component, LoadoutBuild, NameResolver, NodeCategory, NodeRole,
    Occupancy, Point, Topology, decode_build, layout_route, place_markers, place_markers_with,
};

fn component(name: &str, location: &str) -> Component {
    Component {
        id: None,
        name: name.to_string(),
        kind: "Cooler".to_string(),
        size: 1,
        grade: Some("A".to_string()),
        class: None,
        description: String::new(),
        price: Some(1500.0),
        location: location.to_string(),
        shop_name: "Platinum Bay".to_string(),
    }
}

fn angle_of(marker_pos: Point, node_pos: Point) -> f64 {
    let d = marker_pos - node_pos;
    let deg = d.y.atan2(d.x).to_degrees();
    if deg < 0.0 { deg + 360.0 } else { deg }
}

#[test]
fn exact_display_names_resolve_to_their_node() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);

    for node in topology.all_nodes() {
        let resolved = resolver.resolve(&node.name).unwrap();
        // Some names contain an earlier node's id ("Lorville" aliases to
        // Hurston); every other name resolves to itself.
        let aliased = hydrazine_core::ALIASES
            .iter()
            .any(|&(_, phrase)| node.name.to_lowercase().contains(phrase));
        if !aliased {
            assert_eq!(resolved.id, node.id, "name {:?}", node.name);
        }
    }
}

#[test]
fn identifiers_inside_text_resolve() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);

    assert_eq!(resolver.resolve("shop at cru_l1 rest stop").unwrap().id, "cru_l1");
    assert_eq!(resolver.resolve("Bajini Point").unwrap().id, "bajini");
    // Both "arc_l1" and "arc_corp" are ids; only the former is in the text.
    assert_eq!(resolver.resolve("ARC_L1").unwrap().id, "arc_l1");
}

#[test]
fn first_declared_match_wins_over_better_match() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);

    // Text names a moon but also contains the planet id declared first.
    assert_eq!(
        resolver.resolve("Daymar, orbiting crusader").unwrap().id,
        "crusader"
    );
}

#[test]
fn alias_without_shared_substring() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);

    let node = resolver.resolve("Lorville Central Business District").unwrap();
    assert_eq!(node.id, "hurston");
    assert_eq!(node.category, NodeCategory::Planet);
}

#[test]
fn nothing_matches_unknown_text() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);
    assert!(resolver.resolve("Ruin Station, Pyro").is_none());
}

#[test]
fn text_extending_a_display_name_does_not_resolve() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);
    // The name must contain the text, not the other way round.
    assert!(resolver.resolve("Everus Harbor shop").is_none());
    assert!(resolver.resolve("Port Tressler Admin").is_none());
    assert_eq!(resolver.resolve("Everus Harbor").map(|n| n.id.as_str()), Some("everus_harbor"));
}

#[test]
fn unresolved_middle_waypoint_is_skipped() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);

    let path = layout_route(&resolver, &["Yela", "Nyx Gateway", "Magda"]);
    let yela = topology.node_by_id("yela").unwrap().position;
    let magda = topology.node_by_id("magda").unwrap().position;
    assert_eq!(path.points, vec![yela, magda]);
}

#[test]
fn empty_or_unknown_routes_yield_nothing() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);

    let empty: [&str; 0] = [];
    assert!(layout_route(&resolver, &empty).is_empty());
    assert!(layout_route(&resolver, &["unknown"]).is_empty());
}

#[test]
fn shared_node_gets_slots_in_input_order() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);
    let magda = topology.node_by_id("magda").unwrap().position;

    let items = vec![
        component("Snowfall", "Magda"),
        component("Bracer", "Magda"),
        component("Glacier", "Magda"),
    ];
    let markers = place_markers(&resolver, &items);
    let angles: Vec<f64> = markers
        .iter()
        .map(|m| angle_of(m.position().unwrap(), magda).round())
        .collect();
    assert_eq!(angles, vec![0.0, 45.0, 90.0]);

    let reversed: Vec<Component> = items.iter().rev().cloned().collect();
    let markers = place_markers(&resolver, &reversed);
    let glacier = markers.iter().find(|m| m.component.name == "Glacier").unwrap();
    let snowfall = markers.iter().find(|m| m.component.name == "Snowfall").unwrap();
    assert_eq!(glacier.placement.as_ref().unwrap().angle_degrees, 0.0);
    assert_eq!(snowfall.placement.as_ref().unwrap().angle_degrees, 90.0);
}

#[test]
fn planet_markers_sit_further_out() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);

    let items = vec![component("Voltaic", "Hurston"), component("Voltaic", "Ita")];
    let markers = place_markers(&resolver, &items);

    let offset = |i: usize| {
        let m = &markers[i];
        m.position().unwrap().distance(m.node.unwrap().position)
    };
    assert_eq!(markers[0].node.unwrap().category, NodeCategory::Planet);
    assert_eq!(markers[1].node.unwrap().category, NodeCategory::Moon);
    assert!(offset(0) > offset(1));
}

#[test]
fn repeated_calls_are_identical() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);
    let route = ["Seraphim Station", "Orison", "Area18", "Port Tressler"];
    let items = vec![
        component("Ranger", "Area18"),
        component("Ranger", "Area18"),
        component("Ranger", "Ghost Hollow"),
    ];

    assert_eq!(layout_route(&resolver, &route), layout_route(&resolver, &route));
    assert_eq!(
        place_markers(&resolver, &items),
        place_markers(&resolver, &items)
    );
}

#[test]
fn explicit_occupancy_is_shared_between_batches() {
    let topology = Topology::stanton();
    let resolver = NameResolver::new(&topology);
    let first = vec![component("A", "Wala")];
    let second = vec![component("B", "Wala")];

    let mut occupancy = Occupancy::new();
    place_markers_with(&resolver, &first, &mut occupancy);
    let markers = place_markers_with(&resolver, &second, &mut occupancy);
    assert_eq!(markers[0].placement.as_ref().unwrap().slot, 1);
    assert_eq!(occupancy.count("wala"), 2);
}

#[test]
fn chart_for_decoded_build() {
    let payload = r#"```json
    {
        "ship": "Cutlass Black",
        "goal": "Budget Balanced",
        "components": [
            {"name": "Tarantula GT-870 Mark 3", "type": "Weapon", "size": 3,
             "location": "Lorville", "shopName": "Cubby Blast", "price": 15000},
            {"name": "Sukoran", "type": "Shield", "size": 2,
             "location": "Area18", "shopName": "Centermass"},
            {"name": "Atlas", "type": "Quantum Drive", "size": 1,
             "location": "Klescher", "shopName": "Unknown"}
        ],
        "totalCost": "15000",
        "route": ["Seraphim Station", "Lorville", "Somewhere", "Area18"],
        "totalJumps": 2.0,
        "estimatedTravelTime": "35 minutes"
    }
    ```"#;
    let build: LoadoutBuild = decode_build(payload).into_result().unwrap();
    let topology = Topology::stanton();
    let chart = Chart::for_build(&topology, &build, ChartOptions::default());

    assert_eq!(chart.route.nodes, vec!["seraphim", "hurston", "arc_corp"]);
    assert!(chart.route.is_drawable());
    assert_eq!(chart.curve.first().copied(), Some(Point::new(235.0, 175.0)));
    assert_eq!(chart.curve.last().copied(), Some(Point::new(100.0, 400.0)));
    assert_eq!(chart.edges.len(), 4);

    let unplaced: Vec<&str> = chart.unplaced().map(|m| m.component.name.as_str()).collect();
    assert_eq!(unplaced, vec!["Atlas"]);
    assert_eq!(chart.markers[0].label, "W: 3");

    let role = |id: &str| chart.nodes.iter().find(|n| n.id == id).unwrap().role;
    assert_eq!(role("seraphim"), NodeRole::Origin);
    assert_eq!(role("lorville"), NodeRole::OnRoute);
    assert_eq!(role("area18"), NodeRole::OnRoute);
    assert_eq!(role("clio"), NodeRole::Idle);

    let labelled = |id: &str| chart.nodes.iter().find(|n| n.id == id).unwrap().labelled;
    assert!(labelled("seraphim"));
    assert!(labelled("lorville"));
    assert!(labelled("area18"));
    assert!(!labelled("hurston"));
    assert!(!labelled("arc_corp"));
}

#[test]
fn labels_need_the_exact_display_name() {
    let topology = Topology::stanton();
    let route = ["seraphim station", "Lorville gate", "Hurston"];
    let chart = Chart::compose(&topology, &route, &[], ChartOptions::default());
    let labelled: Vec<&str> = chart.nodes.iter().filter(|n| n.labelled).map(|n| n.id).collect();
    assert_eq!(labelled, vec!["hurston"]);
}

#[test]
fn chart_without_drawable_route_has_no_curve() {
    let topology = Topology::stanton();
    let chart = Chart::compose(&topology, &["Seraphim Station"], &[], ChartOptions::default());
    assert_eq!(chart.route.len(), 1);
    assert!(chart.curve.is_empty());
    assert!(chart.markers.is_empty());
}

#[test]
fn bundled_offline_library_charts_cleanly() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/offline_builds.json");
    let library = hydrazine_core::OfflineLibrary::load(path).unwrap();
    assert_eq!(library.len(), 3);

    let build = library.find(Some("titan"), "budget").unwrap();
    let topology = Topology::stanton();
    let chart = Chart::for_build(&topology, build, ChartOptions::default());

    // Two shops share Port Tressler; the Pyro one has nowhere to go.
    let slots: Vec<Option<usize>> = chart
        .markers
        .iter()
        .map(|m| m.placement.as_ref().map(|p| p.slot))
        .collect();
    assert_eq!(slots, vec![Some(0), Some(1), None]);
    assert_eq!(chart.route.nodes, vec!["seraphim", "port_tressler"]);
}
