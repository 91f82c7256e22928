//! Properization: split long links with routing nodes.
//!
//! Layers are walked from the top down. Whenever a node in layer `i` links to a node below
//! layer `i - 1`, the link is split through a routing node in layer `i - 1`. The lower half
//! may still be long; it is split again when layer `i - 1` is visited. Afterwards every link
//! spans exactly one layer.

use crate::error::{Error, Result};
use crate::graphlib::{EdgeIx, NodeIx};
use crate::layering::Layering;
use crate::model::LayoutGraph;

/// Runs properization and returns the number of routing nodes inserted.
pub fn run<D>(g: &mut LayoutGraph<D>, layering: &mut Layering) -> Result<usize> {
    let mut inserted = 0usize;
    for i in (0..layering.layer_count()).rev() {
        let members: Vec<NodeIx> = layering.layer(i)?.to_vec();
        for v in members {
            let out_edges: Vec<EdgeIx> = g.graph().out_edges(v).to_vec();
            for e in out_edges {
                if split_if_long(g, layering, v, i, e)? {
                    inserted += 1;
                }
            }
        }
    }

    tracing::debug!(routing_nodes = inserted, "properized layering");
    Ok(inserted)
}

fn split_if_long<D>(
    g: &mut LayoutGraph<D>,
    layering: &mut Layering,
    v: NodeIx,
    layer: usize,
    e: EdgeIx,
) -> Result<bool> {
    let Some((_, w)) = g.graph().edge_endpoints(e) else {
        return Ok(false);
    };
    let w_layer = g.layer_of(w);
    let below = match w_layer {
        Some(l) if l < layer => l,
        _ => {
            return Err(Error::InvariantViolation {
                node: g.node_id(v).to_string(),
                layer,
                successor: g.node_id(w).to_string(),
                successor_layer: w_layer,
            });
        }
    };
    if below + 1 == layer {
        return Ok(false);
    }

    let routing = g.add_routing_node(layer - 1);
    layering.push(layer - 1, routing);
    let Some((label, _, _)) = g.split_segment(e, routing) else {
        return Ok(true);
    };

    if let Some(link) = label.origin.and_then(|link| g.link_mut(link)) {
        // Insert right after the chain's node at `layer`, i.e. the current tail `v`.
        let at = link
            .waypoints
            .iter()
            .position(|&x| x == v)
            .map_or(link.waypoints.len().saturating_sub(1), |p| p + 1);
        link.waypoints.insert(at, routing);
    }
    Ok(true)
}
