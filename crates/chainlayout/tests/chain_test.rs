use chainlayout::{ChainGraph, ChainView, Error, LayoutGraph};

/// A view that only lists its root; the rest of the chain is discovered through links.
struct RootOnlyView {
    /// Also report a link into `leaf` that the view cannot resolve.
    unresolved_link: bool,
}

impl ChainView for RootOnlyView {
    type Node = u32;

    fn node_ids(&self) -> Vec<String> {
        vec!["root".to_string()]
    }

    fn node(&self, id: &str) -> Option<u32> {
        match id {
            "root" => Some(1),
            "mid" => Some(2),
            "leaf" => Some(3),
            _ => None,
        }
    }

    fn outgoing_links(&self, id: &str) -> Vec<String> {
        match id {
            "root" => vec!["l1".to_string()],
            "mid" => vec!["l2".to_string()],
            _ => Vec::new(),
        }
    }

    fn incoming_links(&self, id: &str) -> Vec<String> {
        match id {
            "mid" => vec!["l1".to_string()],
            "leaf" if self.unresolved_link => vec!["l2".to_string(), "l3".to_string()],
            "leaf" => vec!["l2".to_string()],
            _ => Vec::new(),
        }
    }

    fn link_endpoints(&self, link: &str) -> Option<(String, String)> {
        match link {
            "l1" => Some(("root".to_string(), "mid".to_string())),
            "l2" => Some(("mid".to_string(), "leaf".to_string())),
            _ => None,
        }
    }
}

#[test]
fn from_view_wraps_nodes_discovered_through_links() {
    let view = RootOnlyView {
        unresolved_link: false,
    };

    let g = LayoutGraph::from_view(&view).unwrap();

    let ids: Vec<&str> = g.graph().node_ixs().map(|v| g.node_id(v)).collect();
    assert_eq!(ids, vec!["root", "mid", "leaf"]);
    let leaf = g.node_ix("leaf").unwrap();
    assert_eq!(g.node(leaf).unwrap().domain(), Some(&3));
    let links: Vec<&str> = g.links().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(links, vec!["l1", "l2"]);
}

#[test]
fn from_view_rejects_an_unknown_link() {
    let view = RootOnlyView {
        unresolved_link: true,
    };

    let err = LayoutGraph::from_view(&view).unwrap_err();

    assert_eq!(
        err,
        Error::UnknownLink {
            id: "l3".to_string()
        }
    );
}

#[test]
fn from_view_rejects_a_dangling_endpoint() {
    let mut chain: ChainGraph<()> = ChainGraph::new();
    chain.add_node("A", ()).add_link("a-ghost", "A", "ghost");

    let err = LayoutGraph::from_view(&chain).unwrap_err();

    assert_eq!(
        err,
        Error::MissingEndpoint {
            link: "a-ghost".to_string(),
            node: "ghost".to_string(),
        }
    );
}

#[test]
fn chain_graph_adopts_links_recorded_before_their_nodes() {
    let mut chain: ChainGraph<&str> = ChainGraph::new();
    chain.add_link("ab", "A", "B");
    chain.add_node("A", "a").add_node("B", "b");

    assert_eq!(chain.outgoing_links("A"), vec!["ab".to_string()]);
    assert_eq!(chain.incoming_links("B"), vec!["ab".to_string()]);
    assert_eq!(
        chain.link_endpoints("ab"),
        Some(("A".to_string(), "B".to_string()))
    );
    assert_eq!(chain.node_count(), 2);
    assert_eq!(chain.link_count(), 1);
}

#[test]
fn chain_graph_keeps_the_first_link_for_a_repeated_id() {
    let mut chain: ChainGraph<()> = ChainGraph::new();
    chain
        .add_node("A", ())
        .add_node("B", ())
        .add_node("C", ())
        .add_link("x", "A", "B")
        .add_link("x", "A", "C");

    assert_eq!(
        chain.link_endpoints("x"),
        Some(("A".to_string(), "B".to_string()))
    );
    assert_eq!(chain.outgoing_links("A").len(), 1);
}

#[test]
fn layout_graph_rejects_duplicates_and_missing_endpoints() {
    let mut g: LayoutGraph<()> = LayoutGraph::new();
    g.add_content_node("A", ()).unwrap();
    g.add_content_node("B", ()).unwrap();

    assert_eq!(
        g.add_content_node("A", ()).unwrap_err(),
        Error::DuplicateNode {
            id: "A".to_string()
        }
    );
    g.add_link("ab", "A", "B").unwrap();
    assert_eq!(
        g.add_link("ab", "B", "A").unwrap_err(),
        Error::DuplicateLink {
            id: "ab".to_string()
        }
    );
    assert_eq!(
        g.add_link("az", "A", "Z").unwrap_err(),
        Error::MissingEndpoint {
            link: "az".to_string(),
            node: "Z".to_string(),
        }
    );
    assert_eq!(g.link_count(), 1);
    assert_eq!(g.graph().edge_count(), 1);
}

#[test]
fn add_link_records_a_layout_edge_for_every_domain_link() {
    let mut g: LayoutGraph<()> = LayoutGraph::new();
    let a = g.add_content_node("A", ()).unwrap();
    let b = g.add_content_node("B", ()).unwrap();
    let ab = g.add_link("ab", "A", "B").unwrap();
    let ba = g.add_link("ba", "B", "A").unwrap();

    let graph = g.graph();
    let edges: Vec<_> = graph.edge_ixs().collect();
    assert_eq!(edges.len(), 2);
    assert_eq!(graph.edge_endpoints(edges[0]), Some((a, b)));
    assert_eq!(graph.edge(edges[0]).and_then(|l| l.origin), Some(ab));
    assert_eq!(graph.edge_endpoints(edges[1]), Some((b, a)));
    assert_eq!(graph.edge(edges[1]).and_then(|l| l.origin), Some(ba));
}
