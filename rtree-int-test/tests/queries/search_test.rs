use rand::Rng;
use rtree_index::{Rect, RTreeError};
use rtree_int_test::test_util::{build_tree, ids, random_items, seeded_rng, Item};

fn random_window(rng: &mut impl Rng, extent: f64) -> Rect {
    let x = rng.gen_range(0.0..extent);
    let y = rng.gen_range(0.0..extent);
    let w = rng.gen_range(0.0..extent / 4.0);
    let h = rng.gen_range(0.0..extent / 4.0);
    Rect::new(vec![x, y], vec![x + w, y + h]).unwrap()
}

#[test]
fn test_window_queries_match_linear_scan() {
    let mut rng = seeded_rng(30);
    let items = random_items(&mut rng, 0, 1000, 2, 500.0, 15.0);
    let tree = build_tree(2, 4, 10, &items).unwrap();

    for _ in 0..100 {
        let window = random_window(&mut rng, 500.0);

        let hits = ids(tree.search_intersecting(&window).unwrap());
        let expected = ids(items.iter().filter(|item| item.bounds.try_intersects(&window).unwrap()));
        assert_eq!(hits, expected);

        let inside = ids(tree.search_contained(&window).unwrap());
        let expected = ids(items.iter().filter(|item| window.try_contains(&item.bounds).unwrap()));
        assert_eq!(inside, expected);
    }
}

#[test]
fn test_queries_after_deletes() {
    let mut rng = seeded_rng(31);
    let items = random_items(&mut rng, 0, 600, 2, 200.0, 6.0);
    let mut tree = build_tree(2, 2, 6, &items).unwrap();

    for item in items.iter().filter(|item| item.id % 4 != 0) {
        assert!(tree.delete(item).unwrap());
    }
    let kept: Vec<&Item> = items.iter().filter(|item| item.id % 4 == 0).collect();

    let everything = Rect::new(vec![-1.0, -1.0], vec![300.0, 300.0]).unwrap();
    assert_eq!(ids(tree.search_contained(&everything).unwrap()), ids(kept.iter().copied()));

    for _ in 0..50 {
        let window = random_window(&mut rng, 200.0);
        let hits = ids(tree.search_intersecting(&window).unwrap());
        let expected = ids(kept.iter().copied().filter(|item| item.bounds.try_intersects(&window).unwrap()));
        assert_eq!(hits, expected);
    }
}

#[test]
fn test_nearest_neighbors_match_linear_scan() {
    let mut rng = seeded_rng(32);
    let items = random_items(&mut rng, 0, 800, 2, 100.0, 1.0);
    let tree = build_tree(2, 3, 8, &items).unwrap();

    for _ in 0..30 {
        let point = [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)];
        let found: Vec<f64> = tree
            .nearest_neighbors(&point, 5)
            .unwrap()
            .into_iter()
            .map(|(_, dist)| dist)
            .collect();

        let mut expected: Vec<f64> = items
            .iter()
            .map(|item| {
                let closest: Vec<f64> = (0..2)
                    .map(|axis| point[axis].clamp(item.bounds.min()[axis], item.bounds.max()[axis]))
                    .collect();
                closest
                    .iter()
                    .zip(point.iter())
                    .map(|(c, p)| (c - p) * (c - p))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();
        expected.sort_by(|a, b| a.total_cmp(b));
        expected.truncate(5);

        assert_eq!(found, expected);
    }
}

#[test]
fn test_queries_reject_wrong_dimensions() {
    let tree = build_tree(3, 2, 4, &[Item::point(1, &[0.0, 0.0, 0.0])]).unwrap();
    let flat = Rect::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();

    assert!(matches!(
        tree.search_intersecting(&flat),
        Err(RTreeError::DimensionMismatch { expected: 3, actual: 2 })
    ));
    assert!(tree.search_contained(&flat).is_err());
    assert!(tree.nearest_neighbors(&[0.0, 0.0], 1).is_err());
}
