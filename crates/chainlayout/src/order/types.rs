/// Which neighbors of a node feed its barycenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// Successors, i.e. the layer below. Used when sweeping upward from layer 0.
    OutEdges,
    /// Predecessors, i.e. the layer above. Used when sweeping back down.
    InEdges,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub iterations: usize,
    pub sweeps: usize,
    pub transpositions: usize,
    pub crossings_before: Option<usize>,
    pub crossings_after: Option<usize>,
}
