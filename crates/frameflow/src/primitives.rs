use glam::Vec2;

/// Axis-aligned rectangle defined by its origin corner and size
///
/// The coordinate system is left to the caller; the layout engine only
/// assumes that `origin + size` is the far corner on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Create a rectangle from `[x, y]` and `[width, height]` arrays
    pub fn from_origin_size(origin: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            origin: Vec2::from(origin),
            size: Vec2::from(size),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Far corner (origin + size)
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Shrink the rectangle by the given insets
    ///
    /// Each inset is clamped to what is left of the extent on its axis, so the
    /// result never has a negative width or height. Negative insets count as zero.
    pub fn inset(&self, left: f32, right: f32, top: f32, bottom: f32) -> Rect {
        let left = left.clamp(0.0, self.size.x.max(0.0));
        let right = right.clamp(0.0, (self.size.x - left).max(0.0));
        let top = top.clamp(0.0, self.size.y.max(0.0));
        let bottom = bottom.clamp(0.0, (self.size.y - top).max(0.0));

        Rect {
            origin: self.origin + Vec2::new(left, top),
            size: (self.size - Vec2::new(left + right, top + bottom)).max(Vec2::ZERO),
        }
    }
}

impl From<Rect> for [f32; 4] {
    fn from(rect: Rect) -> Self {
        [rect.origin.x, rect.origin.y, rect.size.x, rect.size.y]
    }
}

/// Four per-edge values, used for both anchors and offsets
///
/// Anchors are normalized (0.0 to 1.0) attachment points relative to the
/// parent's size. Offsets are pixel distances applied after the anchors:
/// `left`/`top` push inward from the anchored near edge, `right`/`bottom`
/// pull inward from the anchored far edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Sides {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Sides {
    pub const ZERO: Self = Self::all(0.0);

    /// Anchors that stretch a child over its whole parent
    pub const FILL: Self = Self::ltrb(0.0, 0.0, 1.0, 1.0);

    /// Create sides with all edges equal
    pub const fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Create sides from left, top, right, bottom values
    pub const fn ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create sides with symmetric horizontal and vertical values
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Near edge (left or top) for the given axis (0 = x, 1 = y)
    pub(crate) fn near(&self, axis: usize) -> f32 {
        if axis == 0 {
            self.left
        } else {
            self.top
        }
    }

    /// Far edge (right or bottom) for the given axis (0 = x, 1 = y)
    pub(crate) fn far(&self, axis: usize) -> f32 {
        if axis == 0 {
            self.right
        } else {
            self.bottom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_basic() {
        let rect = Rect::from_origin_size([0.0, 0.0], [100.0, 100.0]);
        let inner = rect.inset(5.0, 15.0, 10.0, 20.0);
        assert_eq!(inner.origin, Vec2::new(5.0, 10.0));
        assert_eq!(inner.size, Vec2::new(80.0, 70.0));
    }

    #[test]
    fn test_inset_never_negative() {
        let rect = Rect::from_origin_size([10.0, 10.0], [30.0, 20.0]);
        let inner = rect.inset(20.0, 20.0, 50.0, 5.0);
        assert_eq!(inner.origin, Vec2::new(30.0, 30.0));
        assert_eq!(inner.size, Vec2::ZERO);
        assert!(inner.max().x <= rect.max().x);
    }

    #[test]
    fn test_sides_edges() {
        let sides = Sides::ltrb(1.0, 2.0, 3.0, 4.0);
        assert_eq!(sides.near(0), 1.0);
        assert_eq!(sides.near(1), 2.0);
        assert_eq!(sides.far(0), 3.0);
        assert_eq!(sides.far(1), 4.0);
    }
}
