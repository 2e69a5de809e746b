//! Top-down layout pass
//!
//! Each node sizes and places its direct children from its own, already
//! resolved, bounds. Every child is first anchor-resolved against the
//! parent's rectangle, then handed to the parent's algorithm:
//!
//! - `Generic`: grow to the minimum size, and to the parent's size on expanding axes
//! - `Center`: minimum size (parent size on expanding axes), centered
//! - `Box`: stacked along the main axis, leftover space shared by stretch weight
//! - `Flow`: placed along the main axis, wrapping onto a new line at the far edge
//! - `Margin`: like `Generic`, inside the node's bounds shrunk by its insets
//!
//! There is no upward pass: a child never influences its parent beyond the
//! `minimum_size` stored before layout starts.

use glam::{BVec2, Vec2};

use crate::arena::{Arena, NodeId};
use crate::component::{Align, BoxData, FlowData};
use crate::node::{Node, NodeKind};
use crate::primitives::Rect;
use crate::tree::LayoutTree;

impl LayoutTree {
    /// Resolve the bounds of every node below `root`
    ///
    /// The root's own `bounds` must be set by the caller beforehand; it is read,
    /// never written. Only `bounds` fields are modified, so calling this again
    /// with unchanged hints yields the same result. An invalid `root` is a no-op.
    pub fn compute_layout(&mut self, root: NodeId) {
        if !self.nodes.contains(root) {
            log::debug!("skipping layout of invalid node {root}");
            return;
        }

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = &mut self.nodes[id];
            let bounds = node.bounds;
            let kind = node.kind;
            // Children are distinct from their parent, so they stay reachable
            // while the list is taken out.
            let children = std::mem::take(&mut node.children);

            if !children.is_empty() {
                log::trace!(
                    "layout {} node {id}: {} children in {:?}",
                    kind.name(),
                    children.len(),
                    bounds
                );
                self.layout_children(kind, bounds, &children);
            }

            stack.extend(children.iter().rev().copied());
            self.nodes[id].children = children;
        }
    }

    fn layout_children(&mut self, kind: NodeKind, bounds: Rect, children: &[NodeId]) {
        match kind {
            NodeKind::Generic => layout_generic(&mut self.nodes, bounds, children),
            NodeKind::Center => layout_center(&mut self.nodes, bounds, children),
            NodeKind::Box(key) => {
                let data = self.components.boxes[key];
                layout_box(&mut self.nodes, bounds, data, children);
            }
            NodeKind::Flow(key) => {
                let data = self.components.flows[key];
                layout_flow(&mut self.nodes, bounds, data, children);
            }
            NodeKind::Margin(key) => {
                let margin = self.components.margins[key];
                let inner = bounds.inset(margin.left, margin.right, margin.top, margin.bottom);
                layout_margin(&mut self.nodes, inner, children);
            }
        }
    }
}

/// Apply a child's anchors and offsets against `parent`
///
/// An axis is only written when the anchored span is positive. Returns which
/// axes were written.
fn resolve_anchors(child: &mut Node, parent: Rect) -> BVec2 {
    let mut resolved = BVec2::FALSE;
    for axis in 0..2 {
        let start = parent.origin[axis]
            + child.anchors.near(axis) * parent.size[axis]
            + child.offsets.near(axis);
        let end = parent.origin[axis] + child.anchors.far(axis) * parent.size[axis]
            - child.offsets.far(axis);

        if end > start {
            child.bounds.origin[axis] = start;
            child.bounds.size[axis] = end - start;
            resolved.set(axis, true);
        }
    }
    resolved
}

/// Grow (never shrink) to the minimum size, and to `available` on expanding axes
fn grow_to_fit(child: &mut Node, available: Vec2) {
    let expanded = Vec2::select(child.expand, available, Vec2::ZERO);
    child.bounds.size = child.bounds.size.max(child.minimum_size).max(expanded);
}

fn layout_generic(nodes: &mut Arena<Node>, bounds: Rect, children: &[NodeId]) {
    for &id in children {
        let child = &mut nodes[id];
        resolve_anchors(child, bounds);
        grow_to_fit(child, bounds.size);
    }
}

fn layout_center(nodes: &mut Arena<Node>, bounds: Rect, children: &[NodeId]) {
    for &id in children {
        let child = &mut nodes[id];
        resolve_anchors(child, bounds);

        let size = Vec2::select(child.expand, bounds.size, child.minimum_size);
        child.bounds.size = size;
        child.bounds.origin = bounds.origin + (bounds.size - size) * 0.5;
    }
}

fn layout_box(nodes: &mut Arena<Node>, bounds: Rect, data: BoxData, children: &[NodeId]) {
    let main = data.direction.main_axis();
    let cross = data.direction.cross_axis();

    let mut total_main = 0.0;
    let mut total_stretch = 0.0;
    for &id in children {
        let child = &nodes[id];
        total_main += child.minimum_size[main];
        if child.expand.test(main) {
            total_stretch += child.stretch[main];
        }
    }

    let leftover = (bounds.size[main] - total_main).max(0.0);
    let count = children.len();
    let (lead, spacing) = match data.align {
        Align::Start => (0.0, 0.0),
        Align::Center => (leftover * 0.5, 0.0),
        Align::End => (leftover, 0.0),
        Align::SpaceBetween if count > 1 => (0.0, leftover / (count - 1) as f32),
        Align::SpaceBetween => (0.0, 0.0),
    };

    let mut cursor = bounds.origin[main] + lead;
    for &id in children {
        let child = &mut nodes[id];
        resolve_anchors(child, bounds);

        let mut main_size = child.minimum_size[main];
        if child.expand.test(main) && total_stretch > 0.0 {
            main_size += leftover * (child.stretch[main] / total_stretch);
        }

        child.bounds.size[main] = main_size;
        child.bounds.size[cross] = child.bounds.size[cross].max(child.minimum_size[cross]);
        child.bounds.origin[main] = cursor;
        child.bounds.origin[cross] = bounds.origin[cross];

        cursor += main_size + spacing;
    }
}

fn layout_flow(nodes: &mut Arena<Node>, bounds: Rect, data: FlowData, children: &[NodeId]) {
    let main = data.direction.main_axis();
    let cross = data.direction.cross_axis();
    let far_edge = bounds.origin[main] + bounds.size[main];

    let mut cursor = bounds.origin;
    let mut line_thickness: f32 = 0.0;

    for &id in children {
        let child = &mut nodes[id];
        resolve_anchors(child, bounds);

        let mut size = child.minimum_size;
        if child.expand.test(cross) {
            size[cross] = bounds.size[cross];
        }

        if cursor[main] + size[main] > far_edge {
            cursor[main] = bounds.origin[main];
            cursor[cross] += line_thickness;
            line_thickness = 0.0;
        }

        child.bounds = Rect::new(cursor, size);
        cursor[main] += size[main];
        line_thickness = line_thickness.max(size[cross]);
    }
}

/// `inner` is the margin node's bounds already shrunk by its insets
fn layout_margin(nodes: &mut Arena<Node>, inner: Rect, children: &[NodeId]) {
    for &id in children {
        let child = &mut nodes[id];
        let anchored = resolve_anchors(child, inner);
        child.bounds.origin = Vec2::select(anchored, child.bounds.origin, inner.origin);
        grow_to_fit(child, inner.size);
    }
}
