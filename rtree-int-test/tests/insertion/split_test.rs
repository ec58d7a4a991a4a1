use rtree_index::{RTree, Rect};
use rtree_int_test::test_util::{assert_valid, random_items, seeded_rng, Item};

#[test]
fn test_leaf_split_on_overflow() {
    let mut tree = RTree::new(2, 2, 4).unwrap();
    for id in 0..4 {
        tree.insert(Item::point(id, &[id as f64, id as f64])).unwrap();
    }
    assert_eq!(tree.stats().node_count, 1);

    tree.insert(Item::point(4, &[4.0, 4.0])).unwrap();
    let stats = tree.stats();
    assert_eq!(stats.tree_height, 2);
    assert_eq!(stats.leaf_count, 2);
    assert_eq!(stats.node_count, 3);
    assert_valid(&tree);
}

#[test]
fn test_splits_respect_fill_bounds_for_many_configs() {
    for (seed, (min, max)) in [(1, 2), (2, 4), (2, 5), (3, 6), (3, 9), (5, 12)]
        .into_iter()
        .enumerate()
    {
        let mut rng = seeded_rng(seed as u64);
        let items = random_items(&mut rng, 0, 700, 2, 500.0, 10.0);
        let mut tree = RTree::new(2, min, max).unwrap();
        tree.insert_all(items).unwrap();

        assert_valid(&tree);
        assert_eq!(tree.size(), 700);
    }
}

#[test]
fn test_root_grows_one_level_at_a_time() {
    let mut tree = RTree::new(2, 2, 4).unwrap();
    let mut heights = Vec::new();
    for id in 0..300 {
        let x = (id % 17) as f64;
        let y = (id / 17) as f64;
        tree.insert(Item::point(id, &[x, y])).unwrap();
        if heights.last() != Some(&tree.depth()) {
            heights.push(tree.depth());
        }
    }

    let expected: Vec<usize> = (1..=tree.depth()).collect();
    assert_eq!(heights, expected);
}

#[test]
fn test_split_of_overlapping_boxes() {
    // every box contains every other, so seeds have negative waste
    let mut tree = RTree::new(2, 2, 4).unwrap();
    for id in 0..40 {
        let shrink = id as f64 * 0.01;
        tree.insert(Item::boxed(id, &[shrink, shrink], &[10.0 - shrink, 10.0 - shrink]))
            .unwrap();
    }
    assert_valid(&tree);
    assert_eq!(
        tree.bounds(),
        Some(Rect::new(vec![0.0, 0.0], vec![10.0, 10.0]).unwrap())
    );
}
