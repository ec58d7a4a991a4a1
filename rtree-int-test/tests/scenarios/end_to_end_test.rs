use rtree_index::RTree;
use rtree_int_test::test_util::{assert_valid, Item};

fn scenario_items() -> Vec<Item> {
    [(0.0, 0.0), (10.0, 10.0), (1.0, 1.0), (9.0, 9.0), (5.0, 5.0)]
        .iter()
        .enumerate()
        .map(|(id, (x, y))| Item::point(id as u64, &[*x, *y]))
        .collect()
}

#[test]
fn test_fifth_point_triggers_single_leaf_split() {
    let items = scenario_items();
    let mut tree = RTree::new(2, 2, 4).unwrap();

    for item in &items[..4] {
        tree.insert(item.clone()).unwrap();
        assert_eq!(tree.depth(), 1);
    }

    tree.insert(items[4].clone()).unwrap();
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.size(), 5);

    let stats = tree.stats();
    assert_eq!(stats.leaf_count, 2);
    assert_eq!(stats.node_count, 3);
    assert_valid(&tree);
}

#[test]
fn test_scenario_round_trip() {
    let items = scenario_items();
    let mut tree = RTree::new(2, 2, 4).unwrap();
    tree.insert_all(items.iter().cloned()).unwrap();

    for (i, item) in items.iter().enumerate().rev() {
        assert!(tree.delete(item).unwrap());
        assert_eq!(tree.size(), i);
        assert_valid(&tree);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.depth(), 1);

    tree.insert_all(items).unwrap();
    assert_eq!(tree.depth(), 2);
    assert_valid(&tree);
}
