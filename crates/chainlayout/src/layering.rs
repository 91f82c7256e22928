//! Layer-indexed node order shared by all layout stages.

use crate::error::{Error, Result};
use crate::graphlib::NodeIx;
use crate::model::LayoutGraph;

/// Ordered layers of node handles; layer `i` holds exactly the nodes with `layer == i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layering {
    layers: Vec<Vec<NodeIx>>,
}

impl Layering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a layering from explicit layers, fixing each node's layer on `g`.
    pub fn from_layers<D>(g: &mut LayoutGraph<D>, layers: Vec<Vec<NodeIx>>) -> Result<Self> {
        for (i, layer) in layers.iter().enumerate() {
            for &v in layer {
                g.assign_layer(v, i)?;
            }
        }
        Ok(Self { layers })
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_size(&self, layer: usize) -> Result<usize> {
        self.layer(layer).map(<[NodeIx]>::len)
    }

    pub fn layer(&self, layer: usize) -> Result<&[NodeIx]> {
        self.layers
            .get(layer)
            .map(Vec::as_slice)
            .ok_or(Error::LayerOutOfRange {
                layer,
                layer_count: self.layers.len(),
            })
    }

    pub fn node_at(&self, layer: usize, index: usize) -> Result<NodeIx> {
        let nodes = self.layer(layer)?;
        nodes.get(index).copied().ok_or(Error::IndexOutOfRange {
            layer,
            index,
            layer_size: nodes.len(),
        })
    }

    pub fn layers(&self) -> &[Vec<NodeIx>] {
        &self.layers
    }

    pub fn iter(&self) -> impl Iterator<Item = &[NodeIx]> + '_ {
        self.layers.iter().map(Vec::as_slice)
    }

    pub fn node_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Appends `v` to `layer`, growing the layer list as needed.
    pub(crate) fn push(&mut self, layer: usize, v: NodeIx) {
        if self.layers.len() <= layer {
            self.layers.resize_with(layer + 1, Vec::new);
        }
        self.layers[layer].push(v);
    }

    pub(crate) fn layer_mut(&mut self, layer: usize) -> Option<&mut Vec<NodeIx>> {
        self.layers.get_mut(layer)
    }

    /// Checks that every node of `g` sits in exactly one layer, once, matching its own layer.
    pub fn validate<D>(&self, g: &LayoutGraph<D>) -> Result<()> {
        let mut seen: Vec<Option<usize>> = vec![None; g.node_count()];
        for (i, layer) in self.layers.iter().enumerate() {
            for &v in layer {
                let id = g.node_id(v).to_string();
                let Some(slot) = seen.get_mut(v.index()) else {
                    return Err(Error::UnknownNode { id });
                };
                if let Some(first) = slot.replace(i) {
                    return Err(Error::LayerReassigned {
                        node: id,
                        layer: first,
                        requested: i,
                    });
                }
                match g.layer_of(v) {
                    Some(layer) if layer == i => {}
                    Some(layer) => {
                        return Err(Error::LayerReassigned {
                            node: id,
                            layer,
                            requested: i,
                        });
                    }
                    None => return Err(Error::NotLayered { id }),
                }
            }
        }
        if let Some(missing) = seen.iter().position(Option::is_none) {
            let id = g
                .graph()
                .node_ixs()
                .nth(missing)
                .map(|v| g.node_id(v).to_string())
                .unwrap_or_default();
            return Err(Error::NotLayered { id });
        }
        Ok(())
    }
}
