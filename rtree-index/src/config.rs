//! Branching-factor and dimensionality configuration for an R-Tree.

use std::fmt;
use std::marker::PhantomData;

use crate::errors::{RTreeError, RTreeResult};
use crate::spatial::Spatial;
use crate::tree::RTree;

/// Default number of spatial dimensions
pub const DEFAULT_DIMENSIONS: usize = 2;

/// Default maximum entries per node
pub const DEFAULT_MAX_CHILDREN: usize = 16;

/// Default minimum entries per non-root node (roughly 40% of max)
pub const DEFAULT_MIN_CHILDREN: usize = 6;

/// Fixed configuration of an R-Tree.
///
/// A valid configuration has at least one dimension, `min_children >= 1`
/// and `max_children >= 2 * min_children`, which guarantees that a node
/// overflowing by one entry can always be split into two groups that both
/// respect the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RTreeConfig {
    dimensions: usize,
    min_children: usize,
    max_children: usize,
}

impl Default for RTreeConfig {
    fn default() -> Self {
        RTreeConfig {
            dimensions: DEFAULT_DIMENSIONS,
            min_children: DEFAULT_MIN_CHILDREN,
            max_children: DEFAULT_MAX_CHILDREN,
        }
    }
}

impl RTreeConfig {
    /// Creates and validates a configuration.
    pub fn new(dimensions: usize, min_children: usize, max_children: usize) -> RTreeResult<Self> {
        let config = RTreeConfig {
            dimensions,
            min_children,
            max_children,
        };
        config.validate()?;
        Ok(config)
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    #[inline]
    pub fn min_children(&self) -> usize {
        self.min_children
    }

    #[inline]
    pub fn max_children(&self) -> usize {
        self.max_children
    }

    pub fn validate(&self) -> RTreeResult<()> {
        if self.dimensions < 1 {
            return Err(RTreeError::InvalidConfig(
                "dimensions must be at least 1".into(),
            ));
        }
        if self.min_children < 1 {
            return Err(RTreeError::InvalidConfig(
                "min_children must be at least 1".into(),
            ));
        }
        if self.max_children < 2 * self.min_children {
            return Err(RTreeError::InvalidConfig(format!(
                "max_children ({}) must be at least twice min_children ({})",
                self.max_children, self.min_children
            )));
        }
        Ok(())
    }
}

/// Builder for [`RTree`].
///
/// ```rust
/// use rtree_index::{RTree, Rect};
///
/// let tree: RTree<Rect> = RTree::builder()
///     .dimensions(3)
///     .min_children(2)
///     .max_children(8)
///     .build()
///     .unwrap();
/// assert_eq!(tree.dimensions(), 3);
/// ```
pub struct RTreeBuilder<T> {
    config: RTreeConfig,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for RTreeBuilder<T> {
    fn default() -> Self {
        RTreeBuilder {
            config: RTreeConfig::default(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for RTreeBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RTreeBuilder")
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Spatial> RTreeBuilder<T> {
    pub fn new() -> Self {
        RTreeBuilder::default()
    }

    #[inline]
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        self.config.dimensions = dimensions;
        self
    }

    #[inline]
    pub fn min_children(mut self, min_children: usize) -> Self {
        self.config.min_children = min_children;
        self
    }

    #[inline]
    pub fn max_children(mut self, max_children: usize) -> Self {
        self.config.max_children = max_children;
        self
    }

    /// Validates the configuration and creates an empty tree.
    pub fn build(self) -> RTreeResult<RTree<T>> {
        self.config.validate()?;
        Ok(RTree::with_config(self.config))
    }
}
