//! Layout node/link types and the graph that holds them.
//!
//! A [`LayoutGraph`] wraps every domain node in a [`LayoutNode`] with [`NodeKind::Content`] and
//! every domain link in a single [`LayoutLink`]. Properization later splits long links through
//! [`NodeKind::Routing`] nodes; the originating [`DomainLink`] keeps the ordered waypoint chain.

use crate::error::{Error, Result};
use crate::graphlib::{EdgeIx, Graph, NodeIx};
use rustc_hash::FxHashMap as HashMap;

/// Prefix for generated routing node ids.
pub const ROUTING_NODE_PREFIX: &str = "_r";

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<D> {
    /// Wraps a node of the analysis chain.
    Content(D),
    /// Layout-only node carrying a long link through an intermediate layer.
    Routing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode<D> {
    pub kind: NodeKind<D>,
    layer: Option<usize>,
    position: f64,
}

impl<D> LayoutNode<D> {
    pub fn content(data: D) -> Self {
        Self {
            kind: NodeKind::Content(data),
            layer: None,
            position: 0.0,
        }
    }

    pub fn routing(layer: usize) -> Self {
        Self {
            kind: NodeKind::Routing,
            layer: Some(layer),
            position: 0.0,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self.kind, NodeKind::Content(_))
    }

    pub fn is_routing(&self) -> bool {
        matches!(self.kind, NodeKind::Routing)
    }

    /// The wrapped domain node, for content nodes.
    pub fn domain(&self) -> Option<&D> {
        match &self.kind {
            NodeKind::Content(data) => Some(data),
            NodeKind::Routing => None,
        }
    }

    pub fn layer(&self) -> Option<usize> {
        self.layer
    }

    /// Position within the layer; only meaningful once crossing reduction has run.
    pub fn position(&self) -> f64 {
        self.position
    }
}

/// Handle of a [`DomainLink`] inside a [`LayoutGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkIx(usize);

impl LinkIx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Edge label of the layout graph.
///
/// `origin` names the domain link a segment belongs to. Segments created by properization keep
/// the origin so later splits can extend the same waypoint chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutLink {
    pub origin: Option<LinkIx>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainLink {
    pub id: String,
    pub from: NodeIx,
    pub to: NodeIx,
    /// `from`, any inserted routing nodes, then `to`.
    pub waypoints: Vec<NodeIx>,
}

#[derive(Debug, Clone)]
pub struct LayoutGraph<D> {
    graph: Graph<LayoutNode<D>, LayoutLink>,
    links: Vec<DomainLink>,
    link_index: HashMap<String, LinkIx>,
    routing_nodes: usize,
}

impl<D> Default for LayoutGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> LayoutGraph<D> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            links: Vec::new(),
            link_index: HashMap::default(),
            routing_nodes: 0,
        }
    }

    pub fn graph(&self) -> &Graph<LayoutNode<D>, LayoutLink> {
        &self.graph
    }

    pub fn add_content_node(&mut self, id: impl Into<String>, data: D) -> Result<NodeIx> {
        let id = id.into();
        if self.graph.has_node(&id) {
            return Err(Error::DuplicateNode { id });
        }
        Ok(self.graph.set_node(id, LayoutNode::content(data)))
    }

    /// Adds a domain link between two existing content nodes.
    pub fn add_link(&mut self, id: impl Into<String>, from: &str, to: &str) -> Result<LinkIx> {
        let id = id.into();
        if self.link_index.contains_key(id.as_str()) {
            return Err(Error::DuplicateLink { id });
        }
        let missing = |node: &str| Error::MissingEndpoint {
            link: id.clone(),
            node: node.to_string(),
        };
        let v = self.graph.node_ix(from).ok_or_else(|| missing(from))?;
        let w = self.graph.node_ix(to).ok_or_else(|| missing(to))?;

        let link = LinkIx(self.links.len());
        self.graph
            .add_edge(v, w, LayoutLink { origin: Some(link) })
            .ok_or_else(|| missing(to))?;
        self.links.push(DomainLink {
            id: id.clone(),
            from: v,
            to: w,
            waypoints: vec![v, w],
        });
        self.link_index.insert(id, link);
        Ok(link)
    }

    pub(crate) fn add_routing_node(&mut self, layer: usize) -> NodeIx {
        let mut n = self.routing_nodes;
        let ix = loop {
            let id = format!("{ROUTING_NODE_PREFIX}{n}");
            if !self.graph.has_node(&id) {
                break self.graph.set_node(id, LayoutNode::routing(layer));
            }
            n += 1;
        };
        self.routing_nodes = n + 1;
        ix
    }

    /// Fixes the layer of `v`. A node keeps its first layer for the rest of the layout.
    pub fn assign_layer(&mut self, v: NodeIx, layer: usize) -> Result<()> {
        let id = self.node_id(v).to_string();
        let Some(node) = self.graph.node_mut(v) else {
            return Err(Error::UnknownNode { id });
        };
        match node.layer {
            Some(current) if current != layer => Err(Error::LayerReassigned {
                node: id,
                layer: current,
                requested: layer,
            }),
            _ => {
                node.layer = Some(layer);
                Ok(())
            }
        }
    }

    pub(crate) fn set_position(&mut self, v: NodeIx, position: f64) {
        if let Some(node) = self.graph.node_mut(v) {
            node.position = position;
        }
    }

    pub(crate) fn split_segment(
        &mut self,
        e: EdgeIx,
        via: NodeIx,
    ) -> Option<(LayoutLink, EdgeIx, EdgeIx)> {
        let label = *self.graph.edge(e)?;
        self.graph.split_edge(e, via, label, label)
    }

    pub(crate) fn link_mut(&mut self, link: LinkIx) -> Option<&mut DomainLink> {
        self.links.get_mut(link.0)
    }

    pub fn node(&self, v: NodeIx) -> Option<&LayoutNode<D>> {
        self.graph.node(v)
    }

    /// Id of `v`, or an empty string for a handle from another graph.
    pub fn node_id(&self, v: NodeIx) -> &str {
        self.graph.node_id(v).unwrap_or_default()
    }

    pub fn node_ix(&self, id: &str) -> Option<NodeIx> {
        self.graph.node_ix(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn layer_of(&self, v: NodeIx) -> Option<usize> {
        self.graph.node(v).and_then(LayoutNode::layer)
    }

    pub fn routing_node_count(&self) -> usize {
        self.graph.nodes().filter(|(_, n)| n.is_routing()).count()
    }

    pub fn links(&self) -> &[DomainLink] {
        &self.links
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn link(&self, link: LinkIx) -> Option<&DomainLink> {
        self.links.get(link.0)
    }

    pub fn link_ix(&self, id: &str) -> Option<LinkIx> {
        self.link_index.get(id).copied()
    }
}
