//! Barycenter computation and the stable layer sort.

use super::Relationship;
use crate::graphlib::NodeIx;
use crate::model::LayoutGraph;

#[derive(Debug, Clone, PartialEq)]
pub struct BarycenterEntry {
    pub v: NodeIx,
    /// Mean position of the counted neighbors, `0.0` when there are none.
    pub barycenter: f64,
    pub neighbors: usize,
}

/// Computes the barycenter of every node in `movable` against the neighbors that sit in
/// `neighbor_layer`. Parallel links count once per link.
pub fn barycenter<D>(
    g: &LayoutGraph<D>,
    movable: &[NodeIx],
    relationship: Relationship,
    neighbor_layer: usize,
) -> Vec<BarycenterEntry> {
    let graph = g.graph();
    movable
        .iter()
        .map(|&v| {
            let mut sum: f64 = 0.0;
            let mut neighbors: usize = 0;
            let mut visit = |u: NodeIx| {
                let Some(node) = graph.node(u) else {
                    return;
                };
                if node.layer() == Some(neighbor_layer) {
                    sum += node.position();
                    neighbors += 1;
                }
            };
            match relationship {
                Relationship::OutEdges => graph.successors(v).for_each(&mut visit),
                Relationship::InEdges => graph.predecessors(v).for_each(&mut visit),
            }

            BarycenterEntry {
                v,
                barycenter: if neighbors == 0 {
                    0.0
                } else {
                    sum / neighbors as f64
                },
                neighbors,
            }
        })
        .collect()
}

/// Insertion sort by barycenter. Equal barycenters keep their incoming order.
///
/// Returns the number of adjacent transpositions performed; zero means the order was already
/// sorted.
pub fn sort(entries: &mut [BarycenterEntry]) -> usize {
    let mut transpositions = 0usize;
    for i in 1..entries.len() {
        let mut j = i;
        while j > 0 && entries[j - 1].barycenter > entries[j].barycenter {
            entries.swap(j - 1, j);
            transpositions += 1;
            j -= 1;
        }
    }
    transpositions
}
