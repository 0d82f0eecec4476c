use nannou::prelude::*;

use crate::bezier;
use crate::model::Model;
use crate::point::Point;
use crate::settings::{
    BACKGROUND, CONTROL_POINT_SIZE, FOREGROUND, SAMPLE_STEP, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Something the renderer can paint on, in screen space (origin top-left,
/// y pointing down).
pub trait Surface {
    fn clear(&mut self, color: Rgb8);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb8);
}

/// Curve parameters sampled for `extent`: every step is taken while the
/// previous sample is still below `extent`, so the last one may land on or
/// just past it.
pub fn sample_parameters(extent: f64) -> impl Iterator<Item = f64> {
    (1u32..)
        .take_while(move |&k| <f64 as From<u32>>::from(k - 1) * SAMPLE_STEP < extent)
        .map(|k| <f64 as From<u32>>::from(k) * SAMPLE_STEP)
}

/// Draws the control points as small squares and traces the curve from 0 up
/// to `extent`, one pixel per sample.
pub fn draw_scene<S: Surface>(surface: &mut S, points: &[Point], extent: f64) {
    let half = (CONTROL_POINT_SIZE / 2.0).floor();

    for point in points {
        surface.fill_rect(
            point.x - half,
            point.y - half,
            CONTROL_POINT_SIZE,
            CONTROL_POINT_SIZE,
            FOREGROUND,
        );
    }

    for t in sample_parameters(extent) {
        if let Some(point) = bezier::evaluate(points, t) {
            surface.fill_rect(point.x.round(), point.y.round(), 1.0, 1.0, FOREGROUND);
        }
    }
}

/// `Surface` over a nannou `Draw`, whose origin is the window centre with y
/// pointing up.
pub struct DrawSurface<'a> {
    draw: &'a Draw,
    width: f64,
    height: f64,
}

impl<'a> DrawSurface<'a> {
    pub fn new(draw: &'a Draw, width: f64, height: f64) -> Self {
        DrawSurface { draw, width, height }
    }
}

impl Surface for DrawSurface<'_> {
    fn clear(&mut self, color: Rgb8) {
        self.draw.background().color(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb8) {
        let center_x = x + w / 2.0 - self.width / 2.0;
        let center_y = self.height / 2.0 - (y + h / 2.0);
        self.draw
            .rect()
            .x_y(center_x as f32, center_y as f32)
            .w_h(w as f32, h as f32)
            .color(color);
    }
}

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut surface = DrawSurface::new(&draw, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);

    surface.clear(BACKGROUND);
    draw_scene(&mut surface, model.scene.points(), model.extent);

    draw.to_frame(app, &frame)
        .expect("failed to submit the frame");
}
