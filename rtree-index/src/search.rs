//! Window and nearest-neighbor queries.

use crate::errors::{RTreeError, RTreeResult};
use crate::node::{Entry, NodeId};
use crate::rect::Rect;
use crate::spatial::Spatial;
use crate::tree::RTree;

impl<T: Spatial> RTree<T> {
    /// Returns every stored object whose bounds intersect `query`.
    /// Touching boundaries count as intersecting.
    pub fn search_intersecting(&self, query: &Rect) -> RTreeResult<Vec<&T>> {
        RTreeError::check_dimensions(self.config.dimensions(), query.dim())?;

        let mut results = Vec::new();
        self.search_recursive(self.root, query, &mut |bb: &Rect| bb.intersects(query), &mut results);
        Ok(results)
    }

    /// Returns every stored object whose bounds lie entirely inside `query`.
    pub fn search_contained(&self, query: &Rect) -> RTreeResult<Vec<&T>> {
        RTreeError::check_dimensions(self.config.dimensions(), query.dim())?;

        let mut results = Vec::new();
        self.search_recursive(self.root, query, &mut |bb: &Rect| query.contains(bb), &mut results);
        Ok(results)
    }

    /// Descends into every child intersecting `query` and collects the leaf
    /// objects accepted by `matches`.
    fn search_recursive<'a, F>(
        &'a self,
        id: NodeId,
        query: &Rect,
        matches: &mut F,
        results: &mut Vec<&'a T>,
    ) where
        F: FnMut(&Rect) -> bool,
    {
        for entry in &self.arena.get(id).entries {
            match entry {
                Entry::Object { bb, obj } => {
                    if matches(bb) {
                        results.push(obj);
                    }
                }
                // a contained object can sit in a child that only
                // partially overlaps the query
                Entry::Node { bb, child } => {
                    if bb.intersects(query) {
                        self.search_recursive(*child, query, matches, results);
                    }
                }
            }
        }
    }

    /// Finds the `k` objects closest to `point`.
    ///
    /// Distance is the Euclidean distance from the point to the nearest
    /// point of an object's bounds, 0 when the point lies inside them.
    /// Results are sorted nearest first; fewer than `k` are returned when
    /// the tree holds fewer objects.
    pub fn nearest_neighbors(&self, point: &[f64], k: usize) -> RTreeResult<Vec<(&T, f64)>> {
        RTreeError::check_dimensions(self.config.dimensions(), point.len())?;

        if k == 0 || self.is_empty() {
            return Ok(Vec::new());
        }

        let mut results: Vec<(&T, f64)> = Vec::with_capacity(k + 1);
        let mut max_dist = f64::INFINITY;
        self.nearest_recursive(self.root, point, k, &mut results, &mut max_dist);

        Ok(results
            .into_iter()
            .map(|(obj, dist_sq)| (obj, dist_sq.sqrt()))
            .collect())
    }

    /// Branch-and-bound helper for [`RTree::nearest_neighbors`]. Works on
    /// squared distances; `max_dist` is the k-th best distance found so far.
    fn nearest_recursive<'a>(
        &'a self,
        id: NodeId,
        point: &[f64],
        k: usize,
        results: &mut Vec<(&'a T, f64)>,
        max_dist: &mut f64,
    ) {
        let node = self.arena.get(id);

        if node.leaf {
            for entry in &node.entries {
                if let Entry::Object { bb, obj } = entry {
                    let dist = bb.min_distance_squared(point);
                    if dist > *max_dist {
                        continue;
                    }

                    results.push((obj, dist));
                    results.sort_by(|a, b| a.1.total_cmp(&b.1));
                    if results.len() > k {
                        results.truncate(k);
                    }
                    if results.len() == k {
                        if let Some((_, kth)) = results.last() {
                            *max_dist = *kth;
                        }
                    }
                }
            }
            return;
        }

        let mut candidates: Vec<(NodeId, f64)> = node
            .entries
            .iter()
            .filter_map(|e| match e {
                Entry::Node { bb, child } => Some((*child, bb.min_distance_squared(point))),
                Entry::Object { .. } => None,
            })
            .collect();
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        for (child, dist) in candidates {
            if dist > *max_dist {
                // sorted, so every later candidate is farther still
                break;
            }
            self.nearest_recursive(child, point, k, results, max_dist);
        }
    }
}
