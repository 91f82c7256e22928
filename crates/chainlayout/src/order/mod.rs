//! Node ordering / crossing minimization.
//!
//! Barycenter sweeps alternate downward and upward over a proper layering, reordering one layer
//! at a time against its already-ordered neighbor layer.

mod types;
pub use types::{OrderStats, Relationship};

mod barycenter;
pub use barycenter::{BarycenterEntry, barycenter, sort};

mod cross_count;
pub use cross_count::cross_count;

mod ordering;
pub use ordering::{assign_positions, run};
