use rtree_index::{RTree, RTreeResult};
use rtree_int_test::test_util::{random_items, seeded_rng};

fn main() -> RTreeResult<()> {
    println!("Starting stress test...");
    let count = 1_000_000;
    let mut rng = seeded_rng(1984);
    let items = random_items(&mut rng, 0, count, 2, 10_000.0, 5.0);

    let mut tree = RTree::builder().build()?;

    let start = std::time::Instant::now();
    tree.insert_all(items.iter().cloned())?;
    println!(
        "Inserted {} items in {:?} (depth {})",
        tree.size(),
        start.elapsed(),
        tree.depth()
    );

    let start = std::time::Instant::now();
    let query = rtree_index::Rect::new(vec![2500.0, 2500.0], vec![7500.0, 7500.0])?;
    let found = tree.search_intersecting(&query)?.len();
    println!("Found {} items in {:?}", found, start.elapsed());

    let start = std::time::Instant::now();
    let mut deleted = 0;
    for item in items.iter().step_by(2) {
        if tree.delete(item)? {
            deleted += 1;
        }
    }
    println!("Deleted {} items in {:?}", deleted, start.elapsed());

    let start = std::time::Instant::now();
    let report = tree.check_integrity();
    println!(
        "Checked {} nodes in {:?}, valid: {}",
        report.nodes_checked,
        start.elapsed(),
        report.is_valid
    );
    Ok(())
}
