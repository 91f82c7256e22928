use super::{OrderStats, Relationship, barycenter, cross_count, sort};
use crate::graphlib::NodeIx;
use crate::layering::Layering;
use crate::model::LayoutGraph;
use crate::options::LayoutOptions;

/// Reorders every layer of a proper layering to reduce crossings.
///
/// Layer 0 is numbered `0, 1, 2, …` in its current order. Each iteration sweeps layers
/// `1..n` against the layer below, then layers `n-2..=0` against the layer above. The loop
/// stops after `options.max_iterations` iterations, or earlier once an iteration leaves every
/// layer untouched.
pub fn run<D>(
    g: &mut LayoutGraph<D>,
    layering: &mut Layering,
    options: &LayoutOptions,
) -> OrderStats {
    let mut stats = OrderStats::default();
    let layer_count = layering.layer_count();
    if layer_count == 0 {
        return stats;
    }

    if options.count_crossings {
        stats.crossings_before = Some(cross_count(g, layering));
    }

    number_layer(g, layering, 0);

    for _ in 0..options.max_iterations {
        let mut transposed = 0usize;

        for i in 1..layer_count {
            transposed += sweep_layer(g, layering, i, Relationship::OutEdges, i - 1);
        }
        stats.sweeps += 1;

        for i in (0..layer_count - 1).rev() {
            transposed += sweep_layer(g, layering, i, Relationship::InEdges, i + 1);
        }
        stats.sweeps += 1;

        stats.iterations += 1;
        stats.transpositions += transposed;
        if transposed == 0 {
            break;
        }
    }

    // With no iterations (or a single layer) some layers were never numbered.
    assign_positions(g, layering);

    if options.count_crossings {
        stats.crossings_after = Some(cross_count(g, layering));
    }

    tracing::debug!(
        iterations = stats.iterations,
        sweeps = stats.sweeps,
        transpositions = stats.transpositions,
        crossings_before = ?stats.crossings_before,
        crossings_after = ?stats.crossings_after,
        "reduced crossings"
    );
    stats
}

/// Sets every node's position to its index within its layer.
pub fn assign_positions<D>(g: &mut LayoutGraph<D>, layering: &Layering) {
    for i in 0..layering.layer_count() {
        number_layer(g, layering, i);
    }
}

fn number_layer<D>(g: &mut LayoutGraph<D>, layering: &Layering, layer: usize) {
    let Ok(nodes) = layering.layer(layer) else {
        return;
    };
    for (i, &v) in nodes.iter().enumerate() {
        g.set_position(v, i as f64);
    }
}

fn sweep_layer<D>(
    g: &mut LayoutGraph<D>,
    layering: &mut Layering,
    layer: usize,
    relationship: Relationship,
    neighbor_layer: usize,
) -> usize {
    let Some(nodes) = layering.layer_mut(layer) else {
        return 0;
    };

    let mut entries = barycenter(g, nodes, relationship, neighbor_layer);
    let transposed = sort(&mut entries);

    let sorted: Vec<NodeIx> = entries.iter().map(|e| e.v).collect();
    for (i, &v) in sorted.iter().enumerate() {
        g.set_position(v, i as f64);
    }
    *nodes = sorted;
    transposed
}
