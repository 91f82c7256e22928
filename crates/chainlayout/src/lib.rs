//! Layered layout of analysis-chain graphs.
//!
//! The pipeline runs layer assignment ([`rank`]), properization ([`normalize`]), and barycenter
//! crossing reduction ([`order`]) over a DAG of chain nodes, producing a [`Layering`] that a
//! renderer walks layer by layer.

pub use chainlayout_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod chain;
pub mod error;
pub mod layering;
pub mod model;
pub mod normalize;
pub mod options;
pub mod order;
pub mod pipeline;
pub mod rank;

pub use chain::{ChainGraph, ChainView};
pub use error::{Error, Result};
pub use layering::Layering;
pub use model::{DomainLink, LayoutGraph, LayoutLink, LayoutNode, LinkIx, NodeKind};
pub use options::LayoutOptions;
pub use order::OrderStats;
pub use pipeline::{
    Layout, LayoutSnapshot, SnapshotKind, SnapshotLink, SnapshotNode, layout, layout_graph,
};
