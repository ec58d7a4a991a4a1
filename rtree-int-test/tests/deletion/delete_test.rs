use rtree_index::{RTree, RTreeError};
use rtree_int_test::test_util::{
    assert_contents, assert_valid, build_tree, ids, random_items, seeded_rng, Item,
};

#[test]
fn test_insert_then_delete_is_inverse() {
    let mut rng = seeded_rng(10);
    let items = random_items(&mut rng, 0, 200, 2, 100.0, 5.0);
    let mut tree = build_tree(2, 2, 4, &items).unwrap();
    let before = ids(tree.iter());

    for probe in random_items(&mut rng, 1000, 50, 2, 100.0, 5.0) {
        tree.insert(probe.clone()).unwrap();
        assert!(tree.delete(&probe).unwrap());
        assert_eq!(ids(tree.iter()), before);
        assert_valid(&tree);
    }
}

#[test]
fn test_delete_missing_reports_false() {
    let mut rng = seeded_rng(11);
    let items = random_items(&mut rng, 0, 100, 2, 100.0, 5.0);
    let mut tree = build_tree(2, 2, 4, &items).unwrap();

    // same bounds, different identity
    let impostor = Item {
        id: 999,
        bounds: items[0].bounds.clone(),
    };
    assert!(!tree.delete(&impostor).unwrap());
    assert!(!tree.delete(&Item::point(5, &[-1.0, -1.0])).unwrap());
    assert_contents(&tree, &items);
}

#[test]
fn test_delete_dimension_mismatch() {
    let mut tree = build_tree(2, 2, 4, &[Item::point(1, &[1.0, 1.0])]).unwrap();
    let result = tree.delete(&Item::point(1, &[1.0]));
    assert!(matches!(
        result,
        Err(RTreeError::DimensionMismatch {
            expected: 2,
            actual: 1
        })
    ));
    assert_eq!(tree.size(), 1);
}

#[test]
fn test_conservation_over_deletes() {
    let mut rng = seeded_rng(12);
    let items = random_items(&mut rng, 0, 500, 2, 300.0, 8.0);
    let mut tree = build_tree(2, 3, 8, &items).unwrap();

    let (gone, kept): (Vec<Item>, Vec<Item>) = items.into_iter().partition(|item| item.id % 3 == 0);
    for item in &gone {
        assert!(tree.delete(item).unwrap());
    }

    assert_eq!(tree.size(), kept.len());
    assert_contents(&tree, &kept);
    assert_valid(&tree);
    for item in &gone {
        assert!(!tree.delete(item).unwrap());
    }
}

#[test]
fn test_remove_returns_payload() {
    let mut tree = RTree::new(2, 2, 4).unwrap();
    tree.insert(Item::point(1, &[1.0, 2.0])).unwrap();
    tree.insert(Item::point(2, &[3.0, 4.0])).unwrap();

    let removed = tree.remove(&Item::point(2, &[3.0, 4.0])).unwrap();
    assert_eq!(removed.map(|item| item.id), Some(2));
    assert_eq!(tree.remove(&Item::point(2, &[3.0, 4.0])).unwrap(), None);
}

#[test]
fn test_delete_everything_in_random_order() {
    use rand::seq::SliceRandom;

    let mut rng = seeded_rng(13);
    let mut items = random_items(&mut rng, 0, 400, 2, 100.0, 3.0);
    let mut tree = build_tree(2, 2, 6, &items).unwrap();

    items.shuffle(&mut rng);
    for (i, item) in items.iter().enumerate() {
        assert!(tree.delete(item).unwrap());
        if i % 40 == 0 {
            assert_valid(&tree);
        }
    }

    assert!(tree.is_empty());
    assert_eq!(tree.depth(), 1);
    assert!(tree.bounds().is_none());
    assert_eq!(tree.stats().node_count, 1);
}
