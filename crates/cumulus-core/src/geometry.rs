//! Basic geometric types used by layout and rendering.
//!
//! All coordinates are `f32` in the SVG user-space coordinate system:
//! x grows to the right, y grows downward. Positions of drawables refer to
//! their center point unless a function says otherwise.

/// A 2-D point (or offset).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a copy with the x coordinate replaced.
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Returns a copy with the y coordinate replaced.
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Component-wise addition.
    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise subtraction.
    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean length of this point interpreted as a vector.
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Bounds of a `size` rectangle centered on this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// A width/height pair.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Grows the size by the given insets on every side.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self::new(
            self.width + insets.horizontal_sum(),
            self.height + insets.vertical_sum(),
        )
    }

    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Size of `self` stacked above `other`: max width, summed height.
    pub fn merge_vertical(self, other: Size) -> Self {
        Self::new(
            self.width.max(other.width),
            self.height + other.height,
        )
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// An axis-aligned rectangle, stored as min/max corners.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Bounds of a `size` rectangle centered on `center`.
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half = Point::new(size.width() / 2.0, size.height() / 2.0);
        Self {
            min: center.sub_point(half),
            max: center.add_point(half),
        }
    }

    /// Bounds of a `size` rectangle anchored at its top-left corner.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min: top_left,
            max: top_left.add_point(Point::new(size.width(), size.height())),
        }
    }

    pub fn min_x(self) -> f32 {
        self.min.x()
    }

    pub fn min_y(self) -> f32 {
        self.min.y()
    }

    pub fn max_x(self) -> f32 {
        self.max.x()
    }

    pub fn max_y(self) -> f32 {
        self.max.y()
    }

    pub fn width(self) -> f32 {
        self.max.x() - self.min.x()
    }

    pub fn height(self) -> f32 {
        self.max.y() - self.min.y()
    }

    pub fn center(self) -> Point {
        self.min.midpoint(self.max)
    }

    pub fn min_point(self) -> Point {
        self.min
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: Point::new(
                self.min.x().min(other.min.x()),
                self.min.y().min(other.min.y()),
            ),
            max: Point::new(
                self.max.x().max(other.max.x()),
                self.max.y().max(other.max.y()),
            ),
        }
    }

    /// Returns a copy shifted by `offset`.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min: self.min.add_point(offset),
            max: self.max.add_point(offset),
        }
    }

    /// Returns a copy grown by the given insets on every side.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min: self.min.sub_point(Point::new(insets.left(), insets.top())),
            max: self.max.add_point(Point::new(insets.right(), insets.bottom())),
        }
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Self) -> bool {
        self.min.x() <= other.min.x()
            && self.min.y() <= other.min.y()
            && self.max.x() >= other.max.x()
            && self.max.y() >= other.max.y()
    }
}

/// Per-side padding values.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same inset on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns a copy with the top inset replaced.
    pub fn with_top(mut self, top: f32) -> Self {
        self.top = top;
        self
    }

    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(3.0, 5.0);

        let sum = a.add_point(b);
        assert_approx_eq!(f32, sum.x(), 13.0);
        assert_approx_eq!(f32, sum.y(), 25.0);

        let diff = a.sub_point(b);
        assert_approx_eq!(f32, diff.x(), 7.0);
        assert_approx_eq!(f32, diff.y(), 15.0);

        let mid = a.midpoint(b);
        assert_approx_eq!(f32, mid.x(), 6.5);
        assert_approx_eq!(f32, mid.y(), 12.5);
    }

    #[test]
    fn test_point_hypot_and_abs() {
        let p = Point::new(-3.0, 4.0);
        assert_approx_eq!(f32, p.hypot(), 5.0);
        assert_eq!(p.abs(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_size_max_and_padding() {
        let a = Size::new(40.0, 10.0);
        let b = Size::new(20.0, 30.0);
        assert_eq!(a.max(b), Size::new(40.0, 30.0));

        let padded = a.add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_approx_eq!(f32, padded.width(), 46.0);
        assert_approx_eq!(f32, padded.height(), 14.0);
    }

    #[test]
    fn test_size_merge_vertical() {
        let shape = Size::new(50.0, 40.0);
        let label = Size::new(80.0, 12.0);
        let merged = shape.merge_vertical(label);
        assert_approx_eq!(f32, merged.width(), 80.0);
        assert_approx_eq!(f32, merged.height(), 52.0);
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Bounds::new_from_center(Point::new(100.0, 50.0), Size::new(40.0, 20.0));
        assert_approx_eq!(f32, bounds.min_x(), 80.0);
        assert_approx_eq!(f32, bounds.min_y(), 40.0);
        assert_approx_eq!(f32, bounds.max_x(), 120.0);
        assert_approx_eq!(f32, bounds.max_y(), 60.0);
        assert_eq!(bounds.center(), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_approx_eq!(f32, bounds.min_x(), 10.0);
        assert_approx_eq!(f32, bounds.max_x(), 40.0);
        assert_approx_eq!(f32, bounds.max_y(), 60.0);
        assert_eq!(bounds.to_size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_bounds_merge() {
        let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Bounds::new_from_top_left(Point::new(20.0, -5.0), Size::new(10.0, 10.0));
        let merged = a.merge(&b);
        assert_approx_eq!(f32, merged.min_x(), 0.0);
        assert_approx_eq!(f32, merged.min_y(), -5.0);
        assert_approx_eq!(f32, merged.max_x(), 30.0);
        assert_approx_eq!(f32, merged.max_y(), 10.0);
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::new_from_top_left(Point::new(5.0, 5.0), Size::new(10.0, 10.0));
        let moved = bounds.translate(Point::new(-5.0, 15.0));
        assert_approx_eq!(f32, moved.min_x(), 0.0);
        assert_approx_eq!(f32, moved.min_y(), 20.0);
        assert_eq!(moved.to_size(), bounds.to_size());
    }

    #[test]
    fn test_bounds_contains() {
        let outer = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        let inner = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
        let overlapping = Bounds::new_from_top_left(Point::new(90.0, 90.0), Size::new(20.0, 20.0));

        assert!(outer.contains(&inner));
        assert!(!outer.contains(&overlapping));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_insets() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_approx_eq!(f32, insets.horizontal_sum(), 6.0);
        assert_approx_eq!(f32, insets.vertical_sum(), 4.0);

        let uniform = Insets::uniform(8.0);
        assert_approx_eq!(f32, uniform.horizontal_sum(), 16.0);
        assert_approx_eq!(f32, uniform.with_top(0.0).vertical_sum(), 8.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (0.0f32..1000.0, 0.0f32..1000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    proptest! {
        #[test]
        fn merge_contains_both(a in point_strategy(), b in point_strategy(), s in size_strategy()) {
            let ba = Bounds::new_from_center(a, s);
            let bb = Bounds::new_from_center(b, s);
            let merged = ba.merge(&bb);
            prop_assert!(merged.contains(&ba));
            prop_assert!(merged.contains(&bb));
        }

        #[test]
        fn translate_roundtrip(p in point_strategy(), offset in point_strategy(), s in size_strategy()) {
            let bounds = Bounds::new_from_center(p, s);
            let back = bounds.translate(offset).translate(Point::new(-offset.x(), -offset.y()));
            prop_assert!((back.min_x() - bounds.min_x()).abs() < 1e-3);
            prop_assert!((back.min_y() - bounds.min_y()).abs() < 1e-3);
        }

        #[test]
        fn center_bounds_roundtrip(p in point_strategy(), s in size_strategy()) {
            let bounds = p.to_bounds(s);
            prop_assert!((bounds.center().x() - p.x()).abs() < 1e-2);
            prop_assert!((bounds.center().y() - p.y()).abs() < 1e-2);
            prop_assert!((bounds.width() - s.width()).abs() < 1e-2);
        }
    }
}
