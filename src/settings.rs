// Settings ///////////////////////////////////////////////////////////////////
// Compile-time tunables. The program takes no external configuration.

use nannou::prelude::{Rgb8, BLACK, WHITE};

// Window /////////////////////////////////////////////////////////////////////

pub const WINDOW_TITLE: &str = "Bezier Trace";
/// Window width in logical pixels
pub const SCREEN_WIDTH: u32 = 500;
/// Window height in logical pixels
pub const SCREEN_HEIGHT: u32 = 500;

// Control Points /////////////////////////////////////////////////////////////

/// Number of control points seeded at startup
pub const INITIAL_POINT_COUNT: usize = 3;
/// A curve needs at least two points
pub const MIN_POINT_COUNT: usize = 2;
/// Edge length of the square drawn for each control point
pub const CONTROL_POINT_SIZE: f64 = 3.0;

// Curve //////////////////////////////////////////////////////////////////////

/// Increment of the interpolation parameter between two curve samples
pub const SAMPLE_STEP: f64 = 0.001;

// Colors /////////////////////////////////////////////////////////////////////

pub const BACKGROUND: Rgb8 = BLACK;
pub const FOREGROUND: Rgb8 = WHITE;
