//! Adapter between an analysis chain and the layout graph.
//!
//! The layout core only needs a read-only view of the chain: the nodes, each node's incoming and
//! outgoing links, and each link's endpoints. [`ChainView`] captures exactly that, and
//! [`ChainGraph`] is an owned in-memory implementation.

use crate::error::{Error, Result};
use crate::model::LayoutGraph;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::collections::VecDeque;

pub trait ChainView {
    type Node: Clone;

    /// Ids of the chain's nodes, in a reproducible order.
    fn node_ids(&self) -> Vec<String>;

    fn node(&self, id: &str) -> Option<Self::Node>;

    fn outgoing_links(&self, id: &str) -> Vec<String>;

    fn incoming_links(&self, id: &str) -> Vec<String>;

    /// `(from, to)` node ids of a link.
    fn link_endpoints(&self, link: &str) -> Option<(String, String)>;
}

impl<D: Clone> LayoutGraph<D> {
    /// Wraps every node and link reachable from `view` in layout nodes and links.
    ///
    /// Nodes are visited in `node_ids()` order; endpoints first seen through a link are queued
    /// behind them. Each node's outgoing links are wrapped before its incoming links.
    pub fn from_view<V>(view: &V) -> Result<Self>
    where
        V: ChainView<Node = D>,
    {
        let mut g = LayoutGraph::new();
        let mut queue: VecDeque<String> = VecDeque::new();

        for id in view.node_ids() {
            if g.node_ix(&id).is_some() {
                continue;
            }
            let data = view
                .node(&id)
                .ok_or_else(|| Error::UnknownNode { id: id.clone() })?;
            g.add_content_node(id.clone(), data)?;
            queue.push_back(id);
        }

        while let Some(id) = queue.pop_front() {
            let links = view
                .outgoing_links(&id)
                .into_iter()
                .chain(view.incoming_links(&id));
            for link in links {
                if g.link_ix(&link).is_some() {
                    continue;
                }
                let (from, to) = view
                    .link_endpoints(&link)
                    .ok_or_else(|| Error::UnknownLink { id: link.clone() })?;
                for endpoint in [&from, &to] {
                    if g.node_ix(endpoint).is_some() {
                        continue;
                    }
                    let data = view.node(endpoint).ok_or_else(|| Error::MissingEndpoint {
                        link: link.clone(),
                        node: endpoint.clone(),
                    })?;
                    g.add_content_node(endpoint.clone(), data)?;
                    queue.push_back(endpoint.clone());
                }
                g.add_link(link, &from, &to)?;
            }
        }

        Ok(g)
    }
}

#[derive(Debug, Clone)]
struct ChainNode<N> {
    data: N,
    outgoing: Vec<String>,
    incoming: Vec<String>,
}

#[derive(Debug, Clone)]
struct ChainLink {
    from: String,
    to: String,
}

/// An analysis chain held in memory, with insertion-ordered nodes and links.
#[derive(Debug, Clone)]
pub struct ChainGraph<N> {
    nodes: IndexMap<String, ChainNode<N>>,
    links: IndexMap<String, ChainLink>,
}

impl<N> Default for ChainGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> ChainGraph<N> {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            links: IndexMap::new(),
        }
    }

    /// Inserts a node, or replaces the data of an existing node. A new node picks up links that
    /// were recorded before it existed.
    pub fn add_node(&mut self, id: impl Into<String>, data: N) -> &mut Self {
        match self.nodes.entry(id.into()) {
            Entry::Occupied(mut e) => e.get_mut().data = data,
            Entry::Vacant(e) => {
                let id = e.key();
                let outgoing = self
                    .links
                    .iter()
                    .filter(|(_, l)| &l.from == id)
                    .map(|(k, _)| k.clone())
                    .collect();
                let incoming = self
                    .links
                    .iter()
                    .filter(|(_, l)| &l.to == id)
                    .map(|(k, _)| k.clone())
                    .collect();
                e.insert(ChainNode {
                    data,
                    outgoing,
                    incoming,
                });
            }
        }
        self
    }

    /// Records a link. Endpoints that are not (yet) nodes are kept as dangling references and
    /// surface as [`Error::MissingEndpoint`] when the chain is laid out.
    pub fn add_link(
        &mut self,
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> &mut Self {
        let id = id.into();
        let from = from.into();
        let to = to.into();
        if self.links.contains_key(&id) {
            return self;
        }
        if let Some(n) = self.nodes.get_mut(&from) {
            n.outgoing.push(id.clone());
        }
        if let Some(n) = self.nodes.get_mut(&to) {
            n.incoming.push(id.clone());
        }
        self.links.insert(id, ChainLink { from, to });
        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

impl<N: Clone> ChainView for ChainGraph<N> {
    type Node = N;

    fn node_ids(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    fn node(&self, id: &str) -> Option<N> {
        self.nodes.get(id).map(|n| n.data.clone())
    }

    fn outgoing_links(&self, id: &str) -> Vec<String> {
        self.nodes
            .get(id)
            .map(|n| n.outgoing.clone())
            .unwrap_or_default()
    }

    fn incoming_links(&self, id: &str) -> Vec<String> {
        self.nodes
            .get(id)
            .map(|n| n.incoming.clone())
            .unwrap_or_default()
    }

    fn link_endpoints(&self, link: &str) -> Option<(String, String)> {
        self.links
            .get(link)
            .map(|l| (l.from.clone(), l.to.clone()))
    }
}
