use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;
use crate::settings::MIN_POINT_COUNT;

/// The control polygon and everything needed to reseed it.
pub struct Scene {
    points: Vec<Point>,
    /// Target number of control points, never below `MIN_POINT_COUNT`
    count: usize,
    width: u32,
    height: u32,
    rng: SmallRng,
}

impl Scene {
    pub fn new(count: usize, width: u32, height: u32) -> Self {
        Self::with_rng(count, width, height, SmallRng::from_entropy())
    }

    pub fn with_rng(count: usize, width: u32, height: u32, rng: SmallRng) -> Self {
        let mut scene = Scene {
            points: vec![],
            count: MIN_POINT_COUNT,
            width,
            height,
            rng,
        };
        scene.regenerate(count);
        scene
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Replaces the control polygon with `count` fresh random points on the
    /// pixel grid of the screen. Counts below the minimum are raised to it.
    pub fn regenerate(&mut self, count: usize) {
        let count = count.max(MIN_POINT_COUNT);
        let (width, height) = (self.width.max(1), self.height.max(1));

        let points = (0..count)
            .map(|_| {
                Point::new(
                    self.rng.gen_range(0..width) as f64,
                    self.rng.gen_range(0..height) as f64,
                )
            })
            .collect();

        self.points = points;
        self.count = count;
        log::debug!("regenerated {} control points", self.count());
    }

    pub fn grow(&mut self) {
        self.regenerate(self.count + 1);
    }

    pub fn shrink(&mut self) {
        self.regenerate(self.count.saturating_sub(1));
    }
}
