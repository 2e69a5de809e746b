//! Per-kind side data for container nodes
//!
//! Box, Flow and Margin nodes keep their configuration in separate tables,
//! one per kind, each with its own free list. A node refers to its entry
//! through a typed key stored in its [`NodeKind`](crate::NodeKind).

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key into the box table
    pub struct BoxKey;
    /// Key into the flow table
    pub struct FlowKey;
    /// Key into the margin table
    pub struct MarginKey;
}

/// Main axis of a Box or Flow container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Children are arranged left to right
    #[default]
    Horizontal,
    /// Children are arranged top to bottom
    Vertical,
}

impl Direction {
    /// Index of the main axis (0 = x, 1 = y)
    pub const fn main_axis(self) -> usize {
        match self {
            Direction::Horizontal => 0,
            Direction::Vertical => 1,
        }
    }

    /// Index of the cross axis (0 = x, 1 = y)
    pub const fn cross_axis(self) -> usize {
        match self {
            Direction::Horizontal => 1,
            Direction::Vertical => 0,
        }
    }
}

/// Main-axis distribution of leftover space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// First child at the start, last at the end, equal gaps in between
    SpaceBetween,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxData {
    pub direction: Direction,
    pub align: Align,
}

impl BoxData {
    pub const fn new(direction: Direction, align: Align) -> Self {
        Self { direction, align }
    }

    pub const fn horizontal(align: Align) -> Self {
        Self::new(Direction::Horizontal, align)
    }

    pub const fn vertical(align: Align) -> Self {
        Self::new(Direction::Vertical, align)
    }
}

/// Wrapping container configuration
///
/// `align` is stored for callers but does not affect placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowData {
    pub direction: Direction,
    pub align: Align,
}

impl FlowData {
    pub const fn new(direction: Direction, align: Align) -> Self {
        Self { direction, align }
    }
}

/// Insets applied to a margin node's bounds before its children are placed
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarginData {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl MarginData {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same inset on every edge
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }
}

/// Side-tables for all container kinds
#[derive(Debug, Default)]
pub struct Components {
    pub(crate) boxes: SlotMap<BoxKey, BoxData>,
    pub(crate) flows: SlotMap<FlowKey, FlowData>,
    pub(crate) margins: SlotMap<MarginKey, MarginData>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of assigned entries across all tables
    pub fn len(&self) -> usize {
        self.boxes.len() + self.flows.len() + self.margins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn clear(&mut self) {
        self.boxes.clear();
        self.flows.clear();
        self.margins.clear();
    }
}
