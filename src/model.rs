use crate::input::LoopState;
use crate::scene::Scene;
use crate::settings::{INITIAL_POINT_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Application context owned by the frame loop.
pub struct Model {
    pub scene: Scene,
    /// Upper bound of the traced curve parameter, refreshed every frame
    pub extent: f64,
    pub state: LoopState,
}

impl Model {
    pub fn new(scene: Scene) -> Self {
        Model {
            scene,
            extent: 0.0,
            state: LoopState::Running,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Scene::new(INITIAL_POINT_COUNT, SCREEN_WIDTH, SCREEN_HEIGHT))
    }
}
