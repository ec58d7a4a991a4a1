//! Thread-safe handle around an [`RTree`].

use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::RTreeResult;
use crate::integrity::IntegrityReport;
use crate::rect::Rect;
use crate::spatial::Spatial;
use crate::tree::{RTree, RTreeStats};

/// A cloneable, thread-safe R-Tree.
///
/// Every clone refers to the same tree. Mutations take an exclusive lock and
/// run to completion before any other caller sees the tree; queries share a
/// read lock and return owned copies of the matching objects.
///
/// ```rust
/// use rtree_index::{Rect, RTree, SharedRTree};
///
/// let shared = SharedRTree::new(RTree::new(2, 2, 4).unwrap());
/// let writer = shared.clone();
/// std::thread::spawn(move || {
///     writer.insert(Rect::from_point(&[1.0, 1.0]).unwrap()).unwrap();
/// })
/// .join()
/// .unwrap();
/// assert_eq!(shared.size(), 1);
/// ```
pub struct SharedRTree<T> {
    inner: Arc<RwLock<RTree<T>>>,
}

impl<T> Clone for SharedRTree<T> {
    fn clone(&self) -> Self {
        SharedRTree {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Spatial> From<RTree<T>> for SharedRTree<T> {
    fn from(tree: RTree<T>) -> Self {
        SharedRTree::new(tree)
    }
}

impl<T: Spatial> SharedRTree<T> {
    pub fn new(tree: RTree<T>) -> Self {
        SharedRTree {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    pub fn insert(&self, obj: T) -> RTreeResult<()> {
        self.inner.write().insert(obj)
    }

    pub fn clear(&self) {
        self.inner.write().clear()
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn depth(&self) -> usize {
        self.inner.read().depth()
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.inner.read().bounds()
    }

    pub fn stats(&self) -> RTreeStats {
        self.inner.read().stats()
    }

    pub fn check_integrity(&self) -> IntegrityReport {
        self.inner.read().check_integrity()
    }

    /// Runs `f` with shared access to the tree. Other readers may run
    /// concurrently; writers wait until `f` returns.
    pub fn read<R>(&self, f: impl FnOnce(&RTree<T>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the tree.
    pub fn write<R>(&self, f: impl FnOnce(&mut RTree<T>) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<T: Spatial + PartialEq> SharedRTree<T> {
    pub fn delete(&self, obj: &T) -> RTreeResult<bool> {
        self.inner.write().delete(obj)
    }

    pub fn remove(&self, obj: &T) -> RTreeResult<Option<T>> {
        self.inner.write().remove(obj)
    }
}

impl<T: Spatial + Clone> SharedRTree<T> {
    pub fn search_intersecting(&self, query: &Rect) -> RTreeResult<Vec<T>> {
        let tree = self.inner.read();
        Ok(tree.search_intersecting(query)?.into_iter().cloned().collect())
    }

    pub fn search_contained(&self, query: &Rect) -> RTreeResult<Vec<T>> {
        let tree = self.inner.read();
        Ok(tree.search_contained(query)?.into_iter().cloned().collect())
    }

    pub fn nearest_neighbors(&self, point: &[f64], k: usize) -> RTreeResult<Vec<(T, f64)>> {
        let tree = self.inner.read();
        Ok(tree
            .nearest_neighbors(point, k)?
            .into_iter()
            .map(|(obj, dist)| (obj.clone(), dist))
            .collect())
    }
}
