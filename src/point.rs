/// A position in screen space: origin top-left, y pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Direction from `self` towards `other`, in radians.
    pub fn angle_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn advance(&self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_approx_eq!(a.distance(&b), 5.0);
        assert_approx_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn angle_follows_screen_axes() {
        let origin = Point::new(0.0, 0.0);
        assert_approx_eq!(origin.angle_to(&Point::new(3.0, 0.0)), 0.0);
        assert_approx_eq!(origin.angle_to(&Point::new(0.0, 3.0)), FRAC_PI_2);
        assert_approx_eq!(origin.angle_to(&Point::new(-3.0, 0.0)), PI);
    }

    #[test]
    fn advance_moves_along_angle() {
        let moved = Point::new(1.0, 1.0).advance(FRAC_PI_2, 4.0);
        assert_approx_eq!(moved.x, 1.0);
        assert_approx_eq!(moved.y, 5.0);
    }
}
