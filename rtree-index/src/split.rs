//! Quadratic-cost node splitting.
//!
//! Implemented per Section 3.5.2 of "R-trees: A Dynamic Index Structure for
//! Spatial Searching" by A. Guttman, Proceedings of ACM SIGMOD, p. 47-57, 1984.

use crate::node::Entry;
use crate::rect::Rect;

/// Group chosen for an entry during a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Partitions the entries of an overflowing node into two groups.
///
/// Both groups end up with at least `min_group_size` entries, provided
/// `entries.len() >= 2 * min_group_size`. The first group is meant to stay
/// in the original node and the second to move to a new sibling.
pub(crate) fn quadratic_split<T>(
    mut entries: Vec<Entry<T>>,
    min_group_size: usize,
) -> (Vec<Entry<T>>, Vec<Entry<T>>) {
    assert!(entries.len() >= 2, "cannot split fewer than two entries");

    let (l, r) = pick_seeds(&entries);
    // r > l, so removing r first keeps l valid
    let right_seed = entries.remove(r);
    let left_seed = entries.remove(l);
    let mut remaining = entries;

    let mut left_bb = left_seed.bb().clone();
    let mut right_bb = right_seed.bb().clone();
    let mut left = vec![left_seed];
    let mut right = vec![right_seed];

    while !remaining.is_empty() {
        let pending = remaining.len();
        let next = pick_next(&left_bb, &right_bb, &remaining);
        let entry = remaining.remove(next);

        let side = if left.len() + pending <= min_group_size {
            Side::Left
        } else if right.len() + pending <= min_group_size {
            Side::Right
        } else {
            choose_group(entry.bb(), &left_bb, &right_bb, left.len(), right.len())
        };

        match side {
            Side::Left => {
                left_bb = left_bb.union(entry.bb());
                left.push(entry);
            }
            Side::Right => {
                right_bb = right_bb.union(entry.bb());
                right.push(entry);
            }
        }
    }

    (left, right)
}

/// Picks the two entries that would waste the most space if grouped
/// together. Returns their indices in increasing order.
pub(crate) fn pick_seeds<T>(entries: &[Entry<T>]) -> (usize, usize) {
    let mut seeds = (0, 1);
    let mut max_wasted = f64::NEG_INFINITY;
    for (i, e1) in entries.iter().enumerate() {
        for (j, e2) in entries.iter().enumerate().skip(i + 1) {
            let wasted = e1.bb().union(e2.bb()).size() - e1.bb().size() - e2.bb().size();
            if wasted > max_wasted {
                max_wasted = wasted;
                seeds = (i, j);
            }
        }
    }
    seeds
}

/// Picks the remaining entry with the strongest preference for one group.
pub(crate) fn pick_next<T>(left_bb: &Rect, right_bb: &Rect, remaining: &[Entry<T>]) -> usize {
    let mut next = 0;
    let mut max_diff = f64::NEG_INFINITY;
    for (i, e) in remaining.iter().enumerate() {
        let d1 = left_bb.enlargement(e.bb());
        let d2 = right_bb.enlargement(e.bb());
        let diff = (d1 - d2).abs();
        if diff > max_diff {
            max_diff = diff;
            next = i;
        }
    }
    next
}

/// Chooses a group by least enlargement, then smaller area, then fewer
/// entries. Remaining ties go left.
pub(crate) fn choose_group(
    bb: &Rect,
    left_bb: &Rect,
    right_bb: &Rect,
    left_len: usize,
    right_len: usize,
) -> Side {
    let left_diff = left_bb.enlargement(bb);
    let right_diff = right_bb.enlargement(bb);
    if left_diff < right_diff {
        return Side::Left;
    }
    if right_diff < left_diff {
        return Side::Right;
    }

    let left_size = left_bb.size();
    let right_size = right_bb.size();
    if left_size < right_size {
        return Side::Left;
    }
    if right_size < left_size {
        return Side::Right;
    }

    if left_len <= right_len {
        Side::Left
    } else {
        Side::Right
    }
}
