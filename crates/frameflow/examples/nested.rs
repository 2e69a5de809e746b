//! Builds a small window layout, resolves it at two window sizes and prints
//! every node's bounds.
//!
//! Run with `RUST_LOG=trace cargo run --example nested` to see the layout pass.

use frameflow::{
    Align, BoxData, Direction, FlowData, LayoutTree, MarginData, NodeId, Rect, Sides,
};
use glam::{BVec2, Vec2};

struct Window {
    tree: LayoutTree,
    root: NodeId,
}

impl Window {
    fn new() -> Self {
        let mut tree = LayoutTree::new();
        let root = tree
            .add_margin(None, MarginData::all(8.0))
            .expect("root has no parent");

        let column = tree
            .add_box(Some(root), BoxData::vertical(Align::Start))
            .expect("valid parent");
        tree.get_node_mut(column).unwrap().expand = BVec2::TRUE;

        let toolbar = tree
            .add_box(Some(column), BoxData::horizontal(Align::SpaceBetween))
            .expect("valid parent");
        let node = tree.get_node_mut(toolbar).unwrap();
        node.minimum_size = Vec2::new(0.0, 32.0);
        node.anchors = Sides::ltrb(0.0, 0.0, 1.0, 0.0);
        for width in [48.0, 96.0, 48.0] {
            let button = tree.add_generic(Some(toolbar)).expect("valid parent");
            tree.get_node_mut(button).unwrap().minimum_size = Vec2::new(width, 32.0);
        }

        let gallery = tree
            .add_flow(Some(column), FlowData::new(Direction::Horizontal, Align::Start))
            .expect("valid parent");
        let node = tree.get_node_mut(gallery).unwrap();
        node.minimum_size = Vec2::new(0.0, 200.0);
        node.expand = BVec2::new(false, true);
        node.anchors = Sides::ltrb(0.0, 0.0, 1.0, 0.0);
        for _ in 0..7 {
            let tile = tree.add_generic(Some(gallery)).expect("valid parent");
            tree.get_node_mut(tile).unwrap().minimum_size = Vec2::new(120.0, 90.0);
        }

        let status = tree.add_center(Some(column)).expect("valid parent");
        let node = tree.get_node_mut(status).unwrap();
        node.minimum_size = Vec2::new(0.0, 24.0);
        node.anchors = Sides::ltrb(0.0, 0.0, 1.0, 0.0);
        let label = tree.add_generic(Some(status)).expect("valid parent");
        tree.get_node_mut(label).unwrap().minimum_size = Vec2::new(160.0, 16.0);

        Self { tree, root }
    }

    fn resize(&mut self, width: f32, height: f32) {
        if let Some(root) = self.tree.get_node_mut(self.root) {
            root.bounds = Rect::from_origin_size([0.0, 0.0], [width, height]);
        }
        self.tree.compute_layout(self.root);
    }

    fn print(&self) {
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.tree.get_node(id) else {
                continue;
            };
            let b = node.bounds;
            println!(
                "{:indent$}{} {id}: origin ({:.1}, {:.1}) size ({:.1}, {:.1})",
                "",
                node.kind().name(),
                b.origin.x,
                b.origin.y,
                b.size.x,
                b.size.y,
                indent = depth * 2
            );
            stack.extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
        }
    }
}

fn main() {
    env_logger::init();

    let mut window = Window::new();
    for (width, height) in [(800.0, 600.0), (420.0, 600.0)] {
        log::info!("resizing to {width}x{height}");
        window.resize(width, height);
        println!("== {width}x{height}");
        window.print();
    }
}
