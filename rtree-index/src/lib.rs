//! # R-Tree Index - In-Memory Spatial Indexing
//!
//! A dynamic R-Tree after Guttman (SIGMOD 1984) for objects with
//! axis-aligned bounding boxes in any number of dimensions.
//!
//! ## Features
//!
//! - **Balanced**: every leaf sits at the same depth, node fill stays within
//!   the configured minimum and maximum
//! - **Quadratic Split**: overflowing nodes are partitioned with Guttman's
//!   quadratic-cost algorithm
//! - **Condensing Deletes**: underfull nodes are dissolved and their entries
//!   reinserted at their own level
//! - **Generic Payloads**: anything implementing [`Spatial`] can be stored
//! - **Queries**: intersection, containment and k-nearest-neighbor search
//! - **Thread Safe Handle**: [`SharedRTree`] for concurrent readers and a
//!   single writer
//!
//! ## Quick Start
//!
//! ```rust
//! use rtree_index::{Rect, RTree, RTreeResult};
//!
//! # fn main() -> RTreeResult<()> {
//! let mut tree = RTree::new(2, 2, 4)?;
//! for (x, y) in [(0.0, 0.0), (10.0, 10.0), (1.0, 1.0), (9.0, 9.0), (5.0, 5.0)] {
//!     tree.insert(Rect::from_point(&[x, y])?)?;
//! }
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.depth(), 2);
//!
//! let window = Rect::new(vec![0.0, 0.0], vec![2.0, 2.0])?;
//! assert_eq!(tree.search_intersecting(&window)?.len(), 2);
//!
//! assert!(tree.delete(&Rect::from_point(&[5.0, 5.0])?)?);
//! assert!(tree.check_integrity().is_valid);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Objects
//!
//! ```rust
//! use rtree_index::{Rect, RTree, Spatial};
//!
//! #[derive(Debug, PartialEq)]
//! struct City {
//!     name: &'static str,
//!     location: [f64; 2],
//! }
//!
//! impl Spatial for City {
//!     fn bounds(&self) -> Rect {
//!         Rect::from_point(&self.location).expect("finite coordinates")
//!     }
//! }
//!
//! let mut tree = RTree::default();
//! tree.insert(City { name: "Oslo", location: [10.75, 59.91] }).unwrap();
//! tree.insert(City { name: "Rome", location: [12.50, 41.90] }).unwrap();
//!
//! let nearest = tree.nearest_neighbors(&[11.0, 55.0], 1).unwrap();
//! assert_eq!(nearest[0].0.name, "Oslo");
//! ```

// Geometry and configuration
pub mod config;
pub mod errors;
pub mod rect;
pub mod spatial;

// Tree structure and algorithms
mod delete;
mod insert;
pub mod integrity;
mod node;
mod search;
mod split;
pub mod tree;

pub mod shared;

pub use config::{
    RTreeBuilder, RTreeConfig, DEFAULT_DIMENSIONS, DEFAULT_MAX_CHILDREN, DEFAULT_MIN_CHILDREN,
};
pub use errors::{RTreeError, RTreeResult};
pub use integrity::IntegrityReport;
pub use rect::Rect;
pub use shared::SharedRTree;
pub use spatial::Spatial;
pub use tree::{Iter, RTree, RTreeStats};

#[cfg(test)]
#[ctor::ctor]
fn init() {
    colog::init();
}
