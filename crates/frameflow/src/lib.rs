//! # frameflow
//!
//! Arena-backed layout tree.
//!
//! Callers build a tree of nodes, set the root's bounds and per-node sizing
//! hints, then run a single top-down pass that resolves every node's
//! rectangle. Drawing, text measurement and input handling are left to the
//! embedding application.
//!
//! ## Core Types
//!
//! - [`LayoutTree`] - Owns the nodes and their side data, runs layout
//! - [`NodeId`] - Generational handle to a node; stale handles are detected
//! - [`Node`] - Sizing hints, resolved bounds and tree links
//! - [`NodeKind`] - Layout algorithm a node applies to its children
//!
//! ## Layout Kinds
//!
//! - `Generic` - Anchors plus minimum size and expansion
//! - `Center` - Centers each child
//! - `Box` ([`BoxData`]) - Stacks children along one axis with stretch weights
//! - `Flow` ([`FlowData`]) - Places children along one axis and wraps
//! - `Margin` ([`MarginData`]) - Insets the area available to children
//!
//! ## Example
//!
//! ```
//! use frameflow::{Align, BoxData, LayoutTree, Rect};
//! use glam::Vec2;
//!
//! let mut tree = LayoutTree::new();
//! let row = tree.add_box(None, BoxData::horizontal(Align::SpaceBetween)).unwrap();
//! let items: Vec<_> = (0..3).map(|_| tree.add_generic(Some(row)).unwrap()).collect();
//!
//! tree.get_node_mut(row).unwrap().bounds = Rect::from_origin_size([0.0, 0.0], [100.0, 20.0]);
//! for &item in &items {
//!     tree.get_node_mut(item).unwrap().minimum_size = Vec2::new(20.0, 20.0);
//! }
//!
//! tree.compute_layout(row);
//!
//! let xs: Vec<f32> = items
//!     .iter()
//!     .map(|&item| tree.get_node(item).unwrap().bounds.origin.x)
//!     .collect();
//! assert_eq!(xs, vec![0.0, 40.0, 80.0]);
//! ```

mod arena;
mod component;
mod error;
mod layout;
mod node;
mod primitives;
mod tree;

pub use arena::*;
pub use component::*;
pub use error::*;
pub use node::*;
pub use primitives::*;
pub use tree::*;
