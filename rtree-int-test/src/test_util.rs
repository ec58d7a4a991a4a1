use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rtree_index::{RTree, RTreeResult, Rect, Spatial};

/// A stored object with an identity distinct from its bounds, so that two
/// items with identical boxes are still different objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u64,
    pub bounds: Rect,
}

impl Spatial for Item {
    fn bounds(&self) -> Rect {
        self.bounds.clone()
    }
}

impl Item {
    pub fn point(id: u64, coords: &[f64]) -> Item {
        Item {
            id,
            bounds: Rect::from_point(coords).expect("valid point"),
        }
    }

    pub fn boxed(id: u64, min: &[f64], max: &[f64]) -> Item {
        Item {
            id,
            bounds: Rect::new(min.to_vec(), max.to_vec()).expect("valid box"),
        }
    }
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generates `count` boxes of up to `max_side` per axis inside
/// `[0, extent)^dims`, with ids starting at `first_id`.
pub fn random_items(
    rng: &mut StdRng,
    first_id: u64,
    count: usize,
    dims: usize,
    extent: f64,
    max_side: f64,
) -> Vec<Item> {
    (0..count as u64)
        .map(|i| {
            let min: Vec<f64> = (0..dims).map(|_| rng.gen_range(0.0..extent)).collect();
            let max: Vec<f64> = min
                .iter()
                .map(|lo| lo + rng.gen_range(0.0..=max_side))
                .collect();
            Item::boxed(first_id + i, &min, &max)
        })
        .collect()
}

pub fn build_tree(
    dims: usize,
    min_children: usize,
    max_children: usize,
    items: &[Item],
) -> RTreeResult<RTree<Item>> {
    let mut tree = RTree::new(dims, min_children, max_children)?;
    tree.insert_all(items.iter().cloned())?;
    Ok(tree)
}

/// Sorted ids of the given items.
pub fn ids<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<u64> {
    let mut ids: Vec<u64> = items.into_iter().map(|item| item.id).collect();
    ids.sort_unstable();
    ids
}

/// Panics with every reported violation unless the tree is structurally
/// sound.
pub fn assert_valid<T: Spatial>(tree: &RTree<T>) {
    let report = tree.check_integrity();
    assert!(
        report.is_valid,
        "integrity check failed ({} nodes checked):\n{}",
        report.nodes_checked,
        report.errors.join("\n")
    );
}

/// Asserts the tree holds exactly the items of `expected`.
pub fn assert_contents(tree: &RTree<Item>, expected: &[Item]) {
    assert_eq!(tree.size(), expected.len());
    assert_eq!(ids(tree.iter()), ids(expected));
}
