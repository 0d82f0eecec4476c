use anyhow::{anyhow, Context};
use nannou::prelude::*;

pub mod bezier;
pub mod input;
pub mod line_segment;
pub mod logger;
pub mod model;
pub mod point;
pub mod render;
pub mod scene;
pub mod settings;

use crate::input::{InputEvent, LoopState};
use crate::model::Model;
use crate::settings::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};

fn main() {
    logger::init();
    nannou::app(model).update(update).run();
}

fn create_window(app: &App) -> anyhow::Result<WindowId> {
    app.new_window()
        .size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .resizable(false)
        .title(WINDOW_TITLE)
        .view(render::view)
        .event(event)
        .build()
        .map_err(|err| anyhow!("{:?}", err))
        .context("could not create window")
}

fn model(app: &App) -> Model {
    // Escape is handled like any other key.
    app.set_exit_on_escape(false);

    if let Err(err) = create_window(app) {
        // Printed unfiltered as well: RUST_LOG may hide the log record.
        let message = failure_message(&err);
        eprintln!("{}", message);
        log::error!("{}", message);
        std::process::exit(1);
    }
    log::info!("window created ({}x{})", SCREEN_WIDTH, SCREEN_HEIGHT);

    Model::default()
}

fn failure_message(err: &anyhow::Error) -> String {
    format!("initialization failed: {:#}", err)
}

fn event(app: &App, m: &mut Model, event: WindowEvent) {
    let event = InputEvent::from(event);
    if m.state == LoopState::Terminated {
        return;
    }

    m.state = input::handle(&mut m.scene, event);
    if m.state == LoopState::Terminated {
        log::info!("terminating on {:?}", event);
        app.quit();
    }
}

fn update(app: &App, m: &mut Model, _update: Update) {
    // nannou reports the pointer relative to the window centre.
    let pointer_x = app.mouse.x as f64 + SCREEN_WIDTH as f64 / 2.0;
    m.extent = input::extent_from_pointer(pointer_x, SCREEN_WIDTH as f64);
}
