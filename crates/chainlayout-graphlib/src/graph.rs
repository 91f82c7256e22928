//! Graph container APIs used by `chainlayout`.
//!
//! This module contains the core `Graph` container plus a small set of helper algorithms
//! re-exported as `chainlayout_graphlib::alg`.
//!
//! Nodes and edges live in arenas addressed by [`NodeIx`] / [`EdgeIx`]. Splitting an edge
//! leaves a tombstone so that previously handed out indices remain valid. Every node keeps its
//! incident edges in two ordered lists, and each mutation updates both endpoints in the same call.

use rustc_hash::FxBuildHasher;
use std::fmt;

mod entries;

use entries::{EdgeEntry, NodeEntry};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Stable handle of a node inside a [`Graph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIx(usize);

impl NodeIx {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Stable handle of an edge inside a [`Graph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIx(usize);

impl EdgeIx {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, NodeIx>,

    edges: Vec<Option<EdgeEntry<E>>>,
    live_edges: usize,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            live_edges: 0,
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts a node, or replaces the label of an existing node with the same id.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> NodeIx {
        let id = id.into();
        if let Some(&ix) = self.node_index.get(id.as_str()) {
            self.nodes[ix.0].label = label;
            return ix;
        }
        let ix = NodeIx(self.nodes.len());
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        });
        self.node_index.insert(id, ix);
        ix
    }

    pub fn node_ix(&self, id: &str) -> Option<NodeIx> {
        self.node_index.get(id).copied()
    }

    pub fn node(&self, v: NodeIx) -> Option<&N> {
        self.nodes.get(v.0).map(|n| &n.label)
    }

    pub fn node_mut(&mut self, v: NodeIx) -> Option<&mut N> {
        self.nodes.get_mut(v.0).map(|n| &mut n.label)
    }

    pub fn node_id(&self, v: NodeIx) -> Option<&str> {
        self.nodes.get(v.0).map(|n| n.id.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node handles in insertion order.
    pub fn node_ixs(&self) -> impl Iterator<Item = NodeIx> + '_ {
        (0..self.nodes.len()).map(NodeIx)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIx, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeIx(i), &n.label))
    }

    /// Adds `v -> w`. Returns `None` when either endpoint is unknown.
    pub fn add_edge(&mut self, v: NodeIx, w: NodeIx, label: E) -> Option<EdgeIx> {
        if v.0 >= self.nodes.len() || w.0 >= self.nodes.len() {
            return None;
        }
        let e = EdgeIx(self.edges.len());
        self.edges.push(Some(EdgeEntry { v, w, label }));
        self.live_edges += 1;
        self.nodes[v.0].out_edges.push(e);
        self.nodes[w.0].in_edges.push(e);
        Some(e)
    }

    pub fn edge(&self, e: EdgeIx) -> Option<&E> {
        self.entry(e).map(|entry| &entry.label)
    }

    pub fn edge_endpoints(&self, e: EdgeIx) -> Option<(NodeIx, NodeIx)> {
        self.entry(e).map(|entry| (entry.v, entry.w))
    }

    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Live edge handles in insertion order.
    pub fn edge_ixs(&self) -> impl Iterator<Item = EdgeIx> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_some())
            .map(|(i, _)| EdgeIx(i))
    }

    /// Replaces `v -> w` with `v -> via -> w`.
    ///
    /// The `v -> via` edge takes the old edge's slot in `v`'s out-list and the `via -> w` edge
    /// takes its slot in `w`'s in-list, so neighbor order at both ends is preserved. The new
    /// edges are appended to `via`'s lists. Returns the replaced label and the two new handles.
    pub fn split_edge(
        &mut self,
        e: EdgeIx,
        via: NodeIx,
        head: E,
        tail: E,
    ) -> Option<(E, EdgeIx, EdgeIx)> {
        let (v, w) = self.edge_endpoints(e)?;
        if via.0 >= self.nodes.len() || via == v || via == w {
            return None;
        }
        let old = self.edges[e.0].take()?;

        let first = EdgeIx(self.edges.len());
        self.edges.push(Some(EdgeEntry {
            v,
            w: via,
            label: head,
        }));
        let second = EdgeIx(self.edges.len());
        self.edges.push(Some(EdgeEntry {
            v: via,
            w,
            label: tail,
        }));
        self.live_edges += 1;

        replace_in(&mut self.nodes[v.0].out_edges, e, first);
        replace_in(&mut self.nodes[w.0].in_edges, e, second);
        self.nodes[via.0].in_edges.push(first);
        self.nodes[via.0].out_edges.push(second);

        Some((old.label, first, second))
    }

    pub fn out_edges(&self, v: NodeIx) -> &[EdgeIx] {
        self.nodes
            .get(v.0)
            .map(|n| n.out_edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn in_edges(&self, v: NodeIx) -> &[EdgeIx] {
        self.nodes
            .get(v.0)
            .map(|n| n.in_edges.as_slice())
            .unwrap_or(&[])
    }

    /// Heads of `v`'s out-edges, in edge order. Parallel edges yield repeated entries.
    pub fn successors(&self, v: NodeIx) -> impl Iterator<Item = NodeIx> + '_ {
        self.out_edges(v)
            .iter()
            .filter_map(|&e| self.entry(e).map(|entry| entry.w))
    }

    /// Tails of `v`'s in-edges, in edge order. Parallel edges yield repeated entries.
    pub fn predecessors(&self, v: NodeIx) -> impl Iterator<Item = NodeIx> + '_ {
        self.in_edges(v)
            .iter()
            .filter_map(|&e| self.entry(e).map(|entry| entry.v))
    }

    fn entry(&self, e: EdgeIx) -> Option<&EdgeEntry<E>> {
        self.edges.get(e.0).and_then(Option::as_ref)
    }
}

fn replace_in(list: &mut [EdgeIx], old: EdgeIx, new: EdgeIx) {
    if let Some(slot) = list.iter_mut().find(|x| **x == old) {
        *slot = new;
    }
}

pub mod alg {
    //! Helper algorithms over [`Graph`](super::Graph).

    use super::{Graph, NodeIx};

    /// Strongly connected components that form cycles (size > 1, or a self-loop), each sorted
    /// by insertion order. Components are ordered by their first member.
    ///
    /// Tarjan's algorithm with an explicit frame stack, so long chains do not grow the call
    /// stack.
    pub fn find_cycles<N, E>(g: &Graph<N, E>) -> Vec<Vec<NodeIx>> {
        let n = g.node_count();
        let mut index = 0usize;
        let mut indices: Vec<Option<usize>> = vec![None; n];
        let mut lowlink: Vec<usize> = vec![0; n];
        let mut on_stack = vec![false; n];
        let mut stack: Vec<NodeIx> = Vec::new();
        let mut sccs: Vec<Vec<NodeIx>> = Vec::new();

        // (node, position of the next out-edge to follow)
        let mut frames: Vec<(NodeIx, usize)> = Vec::new();

        for root in g.node_ixs() {
            if indices[root.0].is_some() {
                continue;
            }
            indices[root.0] = Some(index);
            lowlink[root.0] = index;
            index += 1;
            stack.push(root);
            on_stack[root.0] = true;
            frames.push((root, 0));

            while let Some(frame) = frames.last_mut() {
                let (v, next) = *frame;
                let out = g.out_edges(v);
                if next < out.len() {
                    frame.1 += 1;
                    let Some((_, w)) = g.edge_endpoints(out[next]) else {
                        continue;
                    };
                    match indices[w.0] {
                        None => {
                            indices[w.0] = Some(index);
                            lowlink[w.0] = index;
                            index += 1;
                            stack.push(w);
                            on_stack[w.0] = true;
                            frames.push((w, 0));
                        }
                        Some(w_idx) if on_stack[w.0] => {
                            lowlink[v.0] = lowlink[v.0].min(w_idx);
                        }
                        Some(_) => {}
                    }
                    continue;
                }

                frames.pop();
                if let Some(&(parent, _)) = frames.last() {
                    lowlink[parent.0] = lowlink[parent.0].min(lowlink[v.0]);
                }
                if Some(lowlink[v.0]) == indices[v.0] {
                    let mut scc: Vec<NodeIx> = Vec::new();
                    while let Some(w) = stack.pop() {
                        on_stack[w.0] = false;
                        scc.push(w);
                        if w == v {
                            break;
                        }
                    }
                    sccs.push(scc);
                }
            }
        }

        let mut cycles: Vec<Vec<NodeIx>> = Vec::new();
        for mut scc in sccs {
            if scc.len() > 1 {
                scc.sort();
                cycles.push(scc);
            } else if g.successors(scc[0]).any(|w| w == scc[0]) {
                cycles.push(scc);
            }
        }

        cycles.sort_by(|a, b| a.first().cmp(&b.first()));
        cycles
    }
}
