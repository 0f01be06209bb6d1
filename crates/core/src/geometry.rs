/// A point in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left:   f32,
    pub top:    f32,
    pub width:  f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Edge-inclusive containment.
    pub fn contains(&self, p: Point) -> bool {
        !(p.x < self.left || self.right() < p.x || p.y < self.top || self.bottom() < p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Rect::new(10.0, 20.0, 36.0, 54.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(46.0, 74.0)));
        assert!(r.contains(Point::new(28.0, 40.0)));
    }

    #[test]
    fn outside_on_any_side() {
        let r = Rect::new(10.0, 20.0, 36.0, 54.0);
        assert!(!r.contains(Point::new(9.9, 40.0)));
        assert!(!r.contains(Point::new(46.1, 40.0)));
        assert!(!r.contains(Point::new(28.0, 19.0)));
        assert!(!r.contains(Point::new(28.0, 75.0)));
    }
}
