//! Layout driver.
//!
//! This module hosts the public entrypoints (`layout`, `layout_graph`) and the [`Layout`] result
//! handed to renderers, keeping `lib.rs` focused on crate-level exports.

use crate::chain::ChainView;
use crate::error::{Error, Result};
use crate::graphlib::NodeIx;
use crate::layering::Layering;
use crate::model::{DomainLink, LayoutGraph, LayoutNode};
use crate::options::LayoutOptions;
use crate::order::OrderStats;
use crate::{normalize, order, rank};
use serde::Serialize;

/// Lays out a chain from scratch.
///
/// The chain is wrapped into a fresh [`LayoutGraph`] on every call, so repeated calls on an
/// unchanged chain return identical layouts. A layout computed before a chain edit is stale and
/// must be recomputed.
pub fn layout<V>(view: &V, options: &LayoutOptions) -> Result<Layout<V::Node>>
where
    V: ChainView,
{
    let graph = LayoutGraph::from_view(view)?;
    layout_graph(graph, options)
}

/// Runs layer assignment, properization, and crossing reduction on a freshly built graph.
pub fn layout_graph<D>(
    mut graph: LayoutGraph<D>,
    options: &LayoutOptions,
) -> Result<Layout<D>> {
    let span = tracing::debug_span!(
        "chainlayout",
        nodes = graph.node_count(),
        links = graph.link_count()
    );
    let _enter = span.enter();

    let mut layering = rank::assign_layers(&mut graph)?;
    let routing_nodes = normalize::run(&mut graph, &mut layering)?;
    let stats = order::run(&mut graph, &mut layering, options);

    Ok(Layout {
        graph,
        layering,
        stats,
        routing_nodes,
    })
}

/// Final layering plus the graph it indexes into.
#[derive(Debug, Clone)]
pub struct Layout<D> {
    graph: LayoutGraph<D>,
    layering: Layering,
    stats: OrderStats,
    routing_nodes: usize,
}

impl<D> Layout<D> {
    pub fn layer_count(&self) -> usize {
        self.layering.layer_count()
    }

    pub fn layer_size(&self, layer: usize) -> Result<usize> {
        self.layering.layer_size(layer)
    }

    pub fn node_at(&self, layer: usize, index: usize) -> Result<&LayoutNode<D>> {
        let v = self.layering.node_at(layer, index)?;
        self.graph.node(v).ok_or_else(|| Error::UnknownNode {
            id: format!("#{}", v.index()),
        })
    }

    pub fn node_ix_at(&self, layer: usize, index: usize) -> Result<NodeIx> {
        self.layering.node_at(layer, index)
    }

    pub fn node(&self, v: NodeIx) -> Option<&LayoutNode<D>> {
        self.graph.node(v)
    }

    pub fn node_id(&self, v: NodeIx) -> &str {
        self.graph.node_id(v)
    }

    /// Layer of a content or routing node by id.
    pub fn layer_of(&self, id: &str) -> Option<usize> {
        self.graph.node_ix(id).and_then(|v| self.graph.layer_of(v))
    }

    /// Ordered waypoints of a domain link: its two endpoints with any routing nodes between.
    pub fn waypoints(&self, link: &str) -> Option<&[NodeIx]> {
        self.graph
            .link_ix(link)
            .and_then(|l| self.graph.link(l))
            .map(|l| l.waypoints.as_slice())
    }

    pub fn links(&self) -> &[DomainLink] {
        self.graph.links()
    }

    pub fn routing_node_count(&self) -> usize {
        self.routing_nodes
    }

    pub fn stats(&self) -> &OrderStats {
        &self.stats
    }

    pub fn layering(&self) -> &Layering {
        &self.layering
    }

    pub fn graph(&self) -> &LayoutGraph<D> {
        &self.graph
    }

    /// Id-based copy of the layout for renderers that consume JSON.
    pub fn snapshot(&self) -> LayoutSnapshot {
        let layers: Vec<Vec<SnapshotNode>> = self
            .layering
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .filter_map(|&v| {
                        let node = self.graph.node(v)?;
                        Some(SnapshotNode {
                            id: self.graph.node_id(v).to_string(),
                            kind: if node.is_routing() {
                                SnapshotKind::Routing
                            } else {
                                SnapshotKind::Content
                            },
                            position: node.position(),
                        })
                    })
                    .collect()
            })
            .collect();

        let links: Vec<SnapshotLink> = self
            .graph
            .links()
            .iter()
            .map(|l| SnapshotLink {
                id: l.id.clone(),
                waypoints: l
                    .waypoints
                    .iter()
                    .map(|&v| self.graph.node_id(v).to_string())
                    .collect(),
            })
            .collect();

        LayoutSnapshot {
            layers,
            links,
            stats: self.stats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub layers: Vec<Vec<SnapshotNode>>,
    pub links: Vec<SnapshotLink>,
    pub stats: OrderStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    Content,
    Routing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotNode {
    pub id: String,
    pub kind: SnapshotKind,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotLink {
    pub id: String,
    pub waypoints: Vec<String>,
}
