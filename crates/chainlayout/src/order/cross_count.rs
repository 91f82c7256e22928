//! Crossing count between adjacent layers (accumulator tree).

use crate::graphlib::NodeIx;
use crate::layering::Layering;
use crate::model::LayoutGraph;

/// Counts link crossings between every pair of adjacent layers.
///
/// Links leave layer `i` and land in layer `i - 1`; links that do not connect adjacent layers
/// are ignored.
pub fn cross_count<D>(g: &LayoutGraph<D>, layering: &Layering) -> usize {
    let layers = layering.layers();
    let mut cc: usize = 0;
    for i in 1..layers.len() {
        cc += two_layer_cross_count(g, &layers[i], &layers[i - 1], i - 1);
    }
    cc
}

fn two_layer_cross_count<D>(
    g: &LayoutGraph<D>,
    north: &[NodeIx],
    south: &[NodeIx],
    south_layer: usize,
) -> usize {
    if south.is_empty() {
        return 0;
    }

    let mut south_pos: Vec<Option<usize>> = vec![None; g.node_count()];
    for (i, v) in south.iter().enumerate() {
        if let Some(slot) = south_pos.get_mut(v.index()) {
            *slot = Some(i);
        }
    }

    let mut south_entries: Vec<usize> = Vec::new();
    for &v in north {
        let mut entries: Vec<usize> = g
            .graph()
            .successors(v)
            .filter(|w| g.layer_of(*w) == Some(south_layer))
            .filter_map(|w| south_pos.get(w.index()).copied().flatten())
            .collect();
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    // Accumulator tree over south positions.
    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }

    cc
}
