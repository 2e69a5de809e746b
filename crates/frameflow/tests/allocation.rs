//! Allocator stress tests: deep chains, wide fan-out and random churn.

use frameflow::{BoxData, FlowData, LayoutTree, MarginData, NodeId, TreeError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_deep_hierarchy_creation_and_deletion() {
    init_logger();
    let mut tree = LayoutTree::new();
    let root = tree.add_generic(None).unwrap();

    let mut chain = vec![root];
    for _ in 0..1000 {
        let parent = *chain.last().unwrap();
        let child = tree.add_generic(Some(parent)).unwrap();
        assert!(tree.is_valid(child));
        chain.push(child);
    }
    assert!(chain.iter().all(|&id| tree.is_valid(id)));

    let delete_point = chain.len() / 2;
    tree.delete_node(chain[delete_point]).unwrap();

    for &id in &chain[..delete_point] {
        assert!(tree.is_valid(id));
    }
    for &id in &chain[delete_point..] {
        assert!(!tree.is_valid(id));
    }
    assert!(tree
        .get_node(chain[delete_point - 1])
        .unwrap()
        .children()
        .is_empty());
    assert_eq!(tree.len(), delete_point);
}

#[test]
fn test_deep_hierarchy_layout() {
    init_logger();
    let mut tree = LayoutTree::new();
    let root = tree.add_margin(None, MarginData::all(0.0)).unwrap();
    tree.get_node_mut(root).unwrap().bounds =
        frameflow::Rect::from_origin_size([0.0, 0.0], [640.0, 480.0]);

    let mut leaf = root;
    for _ in 0..50_000 {
        leaf = tree.add_generic(Some(leaf)).unwrap();
        tree.get_node_mut(leaf).unwrap().expand = glam::BVec2::TRUE;
    }

    // Far deeper than any call stack would allow with recursion
    tree.compute_layout(root);

    let bounds = tree.get_node(leaf).unwrap().bounds;
    assert_eq!(bounds.size, glam::Vec2::new(640.0, 480.0));

    tree.delete_node(root).unwrap();
    assert!(tree.is_empty());
}

#[test]
fn test_wide_tree_stress() {
    init_logger();
    let mut tree = LayoutTree::new();
    let root = tree.add_generic(None).unwrap();

    let children: Vec<_> = (0..1000)
        .map(|_| tree.add_generic(Some(root)).unwrap())
        .collect();
    assert_eq!(tree.get_node(root).unwrap().children().len(), 1000);

    for &child in &children[..500] {
        tree.delete_node(child).unwrap();
    }

    assert_eq!(tree.get_node(root).unwrap().children(), &children[500..]);
    for &child in &children[500..] {
        assert!(tree.is_valid(child));
    }
}

#[test]
fn test_repeated_allocation_deallocation() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut tree = LayoutTree::new();
    let root = tree.add_generic(None).unwrap();

    let mut allocated: Vec<NodeId> = Vec::new();
    let mut freed: Vec<NodeId> = Vec::new();

    for iteration in 0..100 {
        for i in 0..50 {
            let id = match (iteration + i) % 4 {
                0 => tree.add_generic(Some(root)),
                1 => tree.add_box(Some(root), BoxData::default()),
                2 => tree.add_flow(Some(root), FlowData::default()),
                _ => tree.add_margin(Some(root), MarginData::all(1.0)),
            }
            .unwrap();
            assert!(tree.is_valid(id));
            allocated.push(id);
        }

        allocated.shuffle(&mut rng);
        for _ in 0..25 {
            let id = allocated.pop().unwrap();
            tree.delete_node(id).unwrap();
            freed.push(id);
        }
    }

    assert!(allocated.iter().all(|&id| tree.is_valid(id)));
    assert!(freed.iter().all(|&id| !tree.is_valid(id)));
    assert_eq!(tree.len(), allocated.len() + 1);
    assert_eq!(
        tree.components().len(),
        allocated.len() - generic_count(&tree, root)
    );
    assert_eq!(tree.get_node(root).unwrap().children().len(), allocated.len());
}

fn generic_count(tree: &LayoutTree, root: NodeId) -> usize {
    tree.descendants(root)
        .filter(|&id| tree.get_node(id).unwrap().kind() == frameflow::NodeKind::Generic)
        .count()
}

#[test]
fn test_generation_tracking_prevents_use_after_free() {
    init_logger();
    let mut tree = LayoutTree::new();
    let root = tree.add_generic(None).unwrap();

    let node1 = tree.add_generic(Some(root)).unwrap();
    tree.delete_node(node1).unwrap();
    assert!(!tree.is_valid(node1));

    let node2 = tree.add_generic(Some(root)).unwrap();
    assert_eq!(node2.index, node1.index);
    assert!(node2.generation > node1.generation);

    assert!(!tree.is_valid(node1));
    assert!(tree.get_node(node1).is_none());
    assert!(tree.is_valid(node2));
    assert_eq!(tree.delete_node(node1), Err(TreeError::InvalidHandle(node1)));
    assert_eq!(tree.reparent_node(node1, None), Err(TreeError::InvalidHandle(node1)));
    assert_eq!(tree.get_node(root).unwrap().children(), &[node2]);
}

#[test]
fn test_generations_strictly_increase_per_slot() {
    init_logger();
    let mut tree = LayoutTree::new();
    let mut previous = tree.add_generic(None).unwrap();

    for _ in 0..100 {
        tree.delete_node(previous).unwrap();
        let next = tree.add_center(None).unwrap();
        assert_eq!(next.index, previous.index);
        assert!(next.generation > previous.generation);
        previous = next;
    }
}
