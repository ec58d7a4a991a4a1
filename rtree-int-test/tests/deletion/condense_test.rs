use rtree_index::RTree;
use rtree_int_test::test_util::{assert_contents, assert_valid, build_tree, random_items, seeded_rng, Item};

fn spread_tree() -> (RTree<Item>, Vec<Item>) {
    let items: Vec<Item> = (0..5)
        .map(|i| Item::point(i, &[i as f64 * 100.0, 0.0]))
        .collect();
    (build_tree(2, 2, 4, &items).unwrap(), items)
}

#[test]
fn test_underfull_leaf_is_dissolved_and_root_collapses() {
    let (mut tree, items) = spread_tree();
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.stats().leaf_count, 2);

    // whichever leaves hold the two objects, one of them underflows
    assert!(tree.delete(&items[0]).unwrap());
    assert!(tree.delete(&items[4]).unwrap());
    assert_valid(&tree);
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.depth(), 1);
    assert_contents(&tree, &items[1..4]);
}

#[test]
fn test_height_shrinks_as_tree_empties() {
    let mut rng = seeded_rng(20);
    let items = random_items(&mut rng, 0, 600, 2, 200.0, 2.0);
    let mut tree = build_tree(2, 2, 4, &items).unwrap();
    assert!(tree.depth() >= 5);

    for (i, item) in items.iter().enumerate() {
        assert!(tree.delete(item).unwrap());
        if i == 300 {
            assert_valid(&tree);
        }
    }
    assert!(tree.is_empty());
    assert_eq!(tree.depth(), 1);
}

#[test]
fn test_condensation_keeps_surviving_objects_reachable() {
    let mut rng = seeded_rng(21);
    let items = random_items(&mut rng, 0, 300, 2, 100.0, 4.0);
    let mut tree = build_tree(2, 3, 7, &items).unwrap();

    // delete a spatially clustered region to empty whole subtrees
    let (doomed, survivors): (Vec<Item>, Vec<Item>) = items
        .iter()
        .cloned()
        .partition(|item| item.bounds.min()[0] < 60.0);
    for item in &doomed {
        assert!(tree.delete(item).unwrap());
    }

    assert_valid(&tree);
    assert_contents(&tree, &survivors);
    for item in &survivors {
        let hits = tree.search_intersecting(&item.bounds).unwrap();
        assert!(hits.iter().any(|hit| hit.id == item.id), "item {} unreachable", item.id);
    }
}

#[test]
fn test_reinsertion_after_condense_with_large_nodes() {
    let mut rng = seeded_rng(22);
    let items = random_items(&mut rng, 0, 2000, 2, 1000.0, 10.0);
    let mut tree = build_tree(2, 6, 16, &items).unwrap();

    for item in items.iter().filter(|item| item.id % 2 == 1) {
        assert!(tree.delete(item).unwrap());
    }
    assert_valid(&tree);
    assert_eq!(tree.size(), 1000);
}
