//! Layer assignment (longest path from the sinks).
//!
//! Layer 0 holds the sinks. A node joins layer `k` on the first scan in which every successor
//! already sits in a layer below `k`, so every edge `u -> v` ends with `layer(u) > layer(v)`.
//! A scan that places nothing means the remaining nodes wait on each other: the graph has a
//! cycle, and the stage fails instead of spinning.

use crate::error::{Error, Result};
use crate::graphlib::{NodeIx, alg};
use crate::layering::Layering;
use crate::model::LayoutGraph;

pub fn assign_layers<D>(g: &mut LayoutGraph<D>) -> Result<Layering> {
    let mut assigned: Vec<Option<usize>> = vec![None; g.node_count()];
    let mut unassigned: Vec<NodeIx> = g.graph().node_ixs().collect();
    let mut layers: Vec<Vec<NodeIx>> = Vec::new();

    while !unassigned.is_empty() {
        let current = layers.len();
        let mut layer: Vec<NodeIx> = Vec::new();
        let graph = g.graph();

        unassigned.retain(|&v| {
            let ready = graph
                .successors(v)
                .all(|w| matches!(assigned[w.index()], Some(l) if l < current));
            if ready {
                assigned[v.index()] = Some(current);
                layer.push(v);
            }
            !ready
        });

        if layer.is_empty() {
            return Err(cycle_error(g, unassigned.len()));
        }
        layers.push(layer);
    }

    tracing::debug!(
        layers = layers.len(),
        nodes = g.node_count(),
        "assigned layers"
    );
    Layering::from_layers(g, layers)
}

fn cycle_error<D>(g: &LayoutGraph<D>, unassigned: usize) -> Error {
    let nodes = alg::find_cycles(g.graph())
        .into_iter()
        .next()
        .unwrap_or_default()
        .into_iter()
        .map(|v| g.node_id(v).to_string())
        .collect();
    Error::CyclicGraph { nodes, unassigned }
}
