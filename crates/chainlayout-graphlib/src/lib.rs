//! Graph container APIs used by `chainlayout`.
//!
//! The container keeps every adjacency list in insertion order and never shifts indices, so
//! layout stages that iterate neighbors produce the same result on every run.

pub mod graph;

pub use graph::{EdgeIx, Graph, NodeIx, alg};
