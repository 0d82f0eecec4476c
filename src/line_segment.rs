use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        LineSegment { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    pub fn angle(&self) -> f64 {
        self.start.angle_to(&self.end)
    }

    /// Walks `length * t` from `start` towards `end`.
    ///
    /// `t` is not clamped: values outside `[0, 1]` land on the extension of
    /// the segment.
    pub fn point_at(&self, t: f64) -> Point {
        self.start.advance(self.angle(), self.length() * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn diagonal() -> LineSegment {
        LineSegment::new(Point::new(2.0, 2.0), Point::new(8.0, 10.0))
    }

    #[test]
    fn point_at_ends() {
        let line = diagonal();

        let start = line.point_at(0.0);
        assert_approx_eq!(start.x, 2.0);
        assert_approx_eq!(start.y, 2.0);

        let end = line.point_at(1.0);
        assert_approx_eq!(end.x, 8.0);
        assert_approx_eq!(end.y, 10.0);
    }

    #[test]
    fn point_at_middle() {
        let middle = diagonal().point_at(0.5);
        assert_approx_eq!(middle.x, 5.0);
        assert_approx_eq!(middle.y, 6.0);
    }

    #[test]
    fn point_at_extrapolates() {
        let beyond = diagonal().point_at(1.5);
        assert_approx_eq!(beyond.x, 11.0);
        assert_approx_eq!(beyond.y, 14.0);
    }

    #[test]
    fn degenerate_segment_stays_put() {
        let p = Point::new(3.0, 4.0);
        let line = LineSegment::new(p, p);
        assert_approx_eq!(line.length(), 0.0);
        assert_eq!(line.point_at(0.7), p);
    }
}
