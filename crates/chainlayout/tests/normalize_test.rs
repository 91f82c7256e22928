use chainlayout::graphlib::NodeIx;
use chainlayout::{Error, LayoutGraph, Layering, normalize, rank};

fn new_graph(nodes: &[&'static str], links: &[(&str, &str)]) -> LayoutGraph<&'static str> {
    let mut g: LayoutGraph<&'static str> = LayoutGraph::new();
    for id in nodes {
        g.add_content_node(*id, *id).unwrap();
    }
    for (from, to) in links {
        g.add_link(format!("{from}->{to}"), from, to).unwrap();
    }
    g
}

fn ids(g: &LayoutGraph<&'static str>, vs: impl IntoIterator<Item = NodeIx>) -> Vec<String> {
    vs.into_iter().map(|v| g.node_id(v).to_string()).collect()
}

fn waypoint_ids(g: &LayoutGraph<&'static str>, link: &str) -> Vec<String> {
    let link = g.link(g.link_ix(link).unwrap()).unwrap();
    ids(g, link.waypoints.iter().copied())
}

fn properize(g: &mut LayoutGraph<&'static str>) -> (Layering, usize) {
    let mut layering = rank::assign_layers(g).unwrap();
    let inserted = normalize::run(g, &mut layering).unwrap();
    (layering, inserted)
}

#[test]
fn normalize_run_leaves_a_proper_diamond_alone() {
    let mut g = new_graph(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );

    let (layering, inserted) = properize(&mut g);

    assert_eq!(inserted, 0);
    assert_eq!(g.routing_node_count(), 0);
    assert_eq!(layering.node_count(), 4);
    assert_eq!(waypoint_ids(&g, "A->B"), vec!["A", "B"]);
}

#[test]
fn normalize_run_routes_a_skip_link_through_one_routing_node() {
    let mut g = new_graph(&["A", "B", "D"], &[("A", "D"), ("A", "B"), ("B", "D")]);

    let (layering, inserted) = properize(&mut g);

    assert_eq!(inserted, 1);
    assert_eq!(waypoint_ids(&g, "A->D"), vec!["A", "_r0", "D"]);
    assert_eq!(waypoint_ids(&g, "A->B"), vec!["A", "B"]);

    let r = g.node_ix("_r0").unwrap();
    assert!(g.node(r).unwrap().is_routing());
    assert_eq!(g.node(r).unwrap().domain(), None);
    assert_eq!(g.layer_of(r), Some(1));
    assert_eq!(ids(&g, layering.layer(1).unwrap().iter().copied()), vec!["B", "_r0"]);

    let a = g.node_ix("A").unwrap();
    let d = g.node_ix("D").unwrap();
    // The replacement segments take the original link's slot at both ends.
    assert_eq!(ids(&g, g.graph().successors(a)), vec!["_r0", "B"]);
    assert_eq!(ids(&g, g.graph().predecessors(d)), vec!["_r0", "B"]);
    assert_eq!(ids(&g, g.graph().predecessors(r)), vec!["A"]);
    assert_eq!(ids(&g, g.graph().successors(r)), vec!["D"]);
}

#[test]
fn normalize_run_chains_routing_nodes_across_several_layers() {
    let mut g = new_graph(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")],
    );

    let (layering, inserted) = properize(&mut g);

    assert_eq!(inserted, 2);
    assert_eq!(waypoint_ids(&g, "A->D"), vec!["A", "_r0", "_r1", "D"]);
    assert_eq!(g.layer_of(g.node_ix("_r0").unwrap()), Some(2));
    assert_eq!(g.layer_of(g.node_ix("_r1").unwrap()), Some(1));
    let sizes: Vec<usize> = (0..layering.layer_count())
        .map(|i| layering.layer_size(i).unwrap())
        .collect();
    assert_eq!(sizes, vec![1, 2, 2, 1]);
}

#[test]
fn normalize_run_makes_every_segment_span_one_layer() {
    let names: Vec<&'static str> = vec!["s", "a", "b", "c", "d", "e", "f", "t"];
    let links = [
        ("s", "a"),
        ("a", "b"),
        ("b", "c"),
        ("c", "t"),
        ("s", "t"),
        ("s", "d"),
        ("d", "t"),
        ("a", "e"),
        ("e", "f"),
        ("b", "f"),
        ("s", "f"),
    ];
    let mut g = new_graph(&names, &links);

    let (layering, _) = properize(&mut g);

    layering.validate(&g).unwrap();
    let graph = g.graph();
    for e in graph.edge_ixs() {
        let (v, w) = graph.edge_endpoints(e).unwrap();
        assert_eq!(g.layer_of(v), g.layer_of(w).map(|l| l + 1));
        assert!(graph.out_edges(v).contains(&e));
        assert!(graph.in_edges(w).contains(&e));
    }
    for link in g.links() {
        assert_eq!(link.waypoints.first(), Some(&link.from));
        assert_eq!(link.waypoints.last(), Some(&link.to));
        for pair in link.waypoints.windows(2) {
            assert_eq!(g.layer_of(pair[0]), g.layer_of(pair[1]).map(|l| l + 1));
        }
    }
}

#[test]
fn normalize_run_rejects_a_successor_above_its_node() {
    let mut g = new_graph(&["A", "B"], &[("A", "B")]);
    let a = g.node_ix("A").unwrap();
    let b = g.node_ix("B").unwrap();
    let mut layering = Layering::from_layers(&mut g, vec![vec![a], vec![b]]).unwrap();

    let err = normalize::run(&mut g, &mut layering).unwrap_err();

    assert_eq!(
        err,
        Error::InvariantViolation {
            node: "A".to_string(),
            layer: 0,
            successor: "B".to_string(),
            successor_layer: Some(1),
        }
    );
}

#[test]
fn normalize_run_rejects_a_successor_on_the_same_layer() {
    let mut g = new_graph(&["X", "A", "B"], &[("A", "B")]);
    let [x, a, b] = ["X", "A", "B"].map(|id| g.node_ix(id).unwrap());
    let mut layering = Layering::from_layers(&mut g, vec![vec![x], vec![a, b]]).unwrap();

    let err = normalize::run(&mut g, &mut layering).unwrap_err();

    assert_eq!(
        err,
        Error::InvariantViolation {
            node: "A".to_string(),
            layer: 1,
            successor: "B".to_string(),
            successor_layer: Some(1),
        }
    );
}
